//! Loading a collection directory with mixed valid, invalid and skipped files.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

use walks_content::{DataFormat, EntryError, IconSet, LoadOptions, load_collection};
use walks_core::Difficulty;
use walks_schema::ValidationOptions;

const COASTAL_LOOP_JSON: &str = r#"{
  "title": "Coastal Loop",
  "cardDescription": "A scenic walk",
  "tags": ["coastal", "easy"],
  "area": "North Shore",
  "image": "img.jpg",
  "imageAlt": "coast",
  "difficulty": "Easy",
  "duration": "2h",
  "distance": "5km",
  "isAccessible": true,
  "hasAlerts": false,
  "overview": "...",
  "timeline": [{"title": "Start", "time": "09:00"}],
  "mapUrl": "https://maps.example/1",
  "visitorInfo": [{
    "title": "Parking",
    "icon": "car",
    "content": [{"type": "paragraph", "content": "Free lot available."}]
  }]
}"#;

const RIDGE_YAML: &str = r#"title: Ridge Traverse
cardDescription: Exposed ridge with big views
tags: [ridge, alpine]
area: High Peaks
image: ridge.jpg
imageAlt: ridge line
difficulty: Hard
duration: 6h
distance: 14km
isAccessible: false
hasAlerts: true
overview: Long day out.
timeline:
  - title: Trailhead
    time: "07:00"
  - title: Summit
    time: "11:30"
mapUrl: https://maps.example/2
visitorInfo:
  - title: Transport
    icon: mdi:bus
    content:
      - type: list
        content: [Bus 12 to the trailhead, Last bus 18:00]
  - title: Water
    icon: tap
    content:
      - type: paragraph
        content: No water on the ridge.
"#;

const MEADOW_TOML: &str = r#"title = "Meadow Stroll"
cardDescription = "Flat and family friendly"
tags = ["family"]
area = "Valley"
image = "meadow.jpg"
imageAlt = "meadow"
difficulty = "Moderate"
duration = "1h"
distance = "3km"
isAccessible = true
hasAlerts = false
overview = "Gentle loop."
timeline = []
mapUrl = "https://maps.example/3"

[[visitorInfo]]
title = "Toilets"
icon = "toilet"
content = [{ type = "paragraph", content = "At the car park." }]
"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir should succeed");
    }
    fs::write(path, content).expect("write should succeed");
}

fn fixture() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();
    write(root, "coastal-loop.json", COASTAL_LOOP_JSON);
    write(root, "north/ridge.yaml", RIDGE_YAML);
    write(root, "meadow.toml", MEADOW_TOML);
    write(root, "broken.json", "{ \"title\": ");
    write(root, "extreme.json", &COASTAL_LOOP_JSON.replace("\"Easy\"", "\"Extreme\""));
    write(root, "_draft.json", "not even json");
    write(root, "README.md", "# walks");
    tmp
}

#[test]
fn loads_every_format_and_isolates_failures() {
    let tmp = fixture();
    let report = load_collection("walks", tmp.path(), &LoadOptions::default()).unwrap();

    let ids: Vec<&str> = report.collection.ids().collect();
    assert_eq!(ids, ["coastal-loop", "meadow", "north/ridge"]);

    let ridge = report.collection.get("north/ridge").unwrap();
    assert_eq!(ridge.format, DataFormat::Yaml);
    assert_eq!(ridge.data.difficulty, Difficulty::Hard);
    assert_eq!(ridge.data.timeline.len(), 2);

    let failed: Vec<(String, &str)> = report
        .failures
        .iter()
        .map(|f| (f.id.clone().unwrap_or_default(), f.error.kind()))
        .collect();
    assert_eq!(
        failed,
        [
            ("broken".to_string(), "parse"),
            ("extreme".to_string(), "invalid"),
        ]
    );
    assert!(!report.is_clean());
}

#[test]
fn invalid_entry_keeps_every_validation_error() {
    let tmp = tempfile::tempdir().unwrap();
    let raw = COASTAL_LOOP_JSON
        .replace("\"Easy\"", "\"Extreme\"")
        .replace("\"hasAlerts\": false", "\"hasAlerts\": \"no\"");
    write(tmp.path(), "bad.json", &raw);

    let report = load_collection("walks", tmp.path(), &LoadOptions::default()).unwrap();
    let EntryError::Invalid(errors) = &report.failures[0].error else {
        panic!("expected validation failure, got {:?}", report.failures[0].error);
    };
    let paths: Vec<String> = errors.iter().map(|e| e.path().to_string()).collect();
    assert_eq!(paths, ["difficulty", "hasAlerts"]);
}

#[test]
fn strict_validation_applies_to_every_entry() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        "coastal-loop.json",
        &COASTAL_LOOP_JSON.replacen('{', "{\"draft\": true,", 1),
    );

    let lenient = load_collection("walks", tmp.path(), &LoadOptions::default()).unwrap();
    assert!(lenient.is_clean());

    let options = LoadOptions {
        validation: ValidationOptions {
            deny_unknown_fields: true,
        },
        ..LoadOptions::default()
    };
    let strict = load_collection("walks", tmp.path(), &options).unwrap();
    assert!(strict.collection.is_empty());
    assert_eq!(strict.failures[0].error.kind(), "invalid");
}

#[test]
fn filter_selects_by_record() {
    let tmp = fixture();
    let report = load_collection("walks", tmp.path(), &LoadOptions::default()).unwrap();

    let accessible: Vec<&str> = report
        .collection
        .filter(|walk| walk.is_accessible)
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(accessible, ["coastal-loop", "meadow"]);

    let alpine: Vec<&str> = report
        .collection
        .filter(|walk| walk.has_tag("alpine"))
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(alpine, ["north/ridge"]);
}

#[test]
fn unresolved_icons_warn_by_default() {
    let tmp = fixture();
    let options = LoadOptions {
        icons: Some(["car", "toilet"].into_iter().collect::<IconSet>()),
        ..LoadOptions::default()
    };
    let report = load_collection("walks", tmp.path(), &options).unwrap();

    assert_eq!(report.collection.len(), 3);
    let warnings: Vec<(&str, &str, &str)> = report
        .icon_warnings
        .iter()
        .map(|w| (w.id.as_str(), w.reference.path.as_str(), w.reference.icon.as_str()))
        .collect();
    // mdi:bus belongs to an icon pack and is not checked.
    assert_eq!(warnings, [("north/ridge", "visitorInfo[1].icon", "tap")]);
}

#[test]
fn strict_icons_reject_the_entry() {
    let tmp = fixture();
    let options = LoadOptions {
        icons: Some(["car", "toilet"].into_iter().collect::<IconSet>()),
        icons_strict: true,
        ..LoadOptions::default()
    };
    let report = load_collection("walks", tmp.path(), &options).unwrap();

    assert!(report.collection.get("north/ridge").is_none());
    assert!(report.icon_warnings.is_empty());
    assert!(
        report
            .failures
            .iter()
            .any(|f| f.id.as_deref() == Some("north/ridge") && f.error.kind() == "unresolved_icons")
    );
}

#[test]
fn failures_are_sorted_by_path() {
    let tmp = tempfile::tempdir().unwrap();
    for name in ["c.json", "a.json", "b.json"] {
        write(tmp.path(), name, "[]");
    }
    let report = load_collection("walks", tmp.path(), &LoadOptions::default()).unwrap();
    let names: Vec<String> = report
        .failures
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.json", "b.json", "c.json"]);
}

//! Trail-record schema.
//!
//! Every field of a walk is required. Fields are checked in declaration
//! order and all of them are visited, so [`validate_walk_all`] can report
//! every problem in one pass while [`validate_walk`] returns the first.

use serde_json::Value;
use walks_core::{Difficulty, TimelineEntry, VisitorInfoEntry, Walk};

use crate::check::{Checker, Validate, ValidationOptions, validate, validate_with};
use crate::error::{ValidationError, ValidationErrors};

impl Validate for Difficulty {
    fn check(raw: &Value, cx: &mut Checker) -> Option<Self> {
        let label = String::check(raw, cx)?;
        let difficulty = Self::from_label(&label);
        if difficulty.is_none() {
            cx.enum_violation(&label, Self::LABELS);
        }
        difficulty
    }
}

impl Validate for TimelineEntry {
    fn check(raw: &Value, cx: &mut Checker) -> Option<Self> {
        let map = cx.object(raw)?;
        let title = cx.field(map, "title");
        let time = cx.field(map, "time");

        if !cx.declared_fields_only(map, &["title", "time"]) {
            return None;
        }
        Some(Self {
            title: title?,
            time: time?,
        })
    }
}

impl Validate for VisitorInfoEntry {
    fn check(raw: &Value, cx: &mut Checker) -> Option<Self> {
        let map = cx.object(raw)?;
        let title = cx.field(map, "title");
        let icon = cx.field(map, "icon");
        let content = cx.field(map, "content");

        if !cx.declared_fields_only(map, &["title", "icon", "content"]) {
            return None;
        }
        Some(Self {
            title: title?,
            icon: icon?,
            content: content?,
        })
    }
}

impl Validate for Walk {
    fn check(raw: &Value, cx: &mut Checker) -> Option<Self> {
        let map = cx.object(raw)?;

        let title = cx.field(map, "title");
        let card_description = cx.field(map, "cardDescription");
        let tags = cx.field(map, "tags");
        let area = cx.field(map, "area");
        let image = cx.field(map, "image");
        let image_alt = cx.field(map, "imageAlt");

        let difficulty = cx.field(map, "difficulty");
        let duration = cx.field(map, "duration");
        let distance = cx.field(map, "distance");
        let is_accessible = cx.field(map, "isAccessible");
        let has_alerts = cx.field(map, "hasAlerts");

        let overview = cx.field(map, "overview");
        let timeline = cx.field(map, "timeline");
        let map_url = cx.field(map, "mapUrl");
        let visitor_info = cx.field(map, "visitorInfo");

        if !cx.declared_fields_only(map, Self::FIELDS) {
            return None;
        }
        Some(Self {
            title: title?,
            card_description: card_description?,
            tags: tags?,
            area: area?,
            image: image?,
            image_alt: image_alt?,
            difficulty: difficulty?,
            duration: duration?,
            distance: distance?,
            is_accessible: is_accessible?,
            has_alerts: has_alerts?,
            overview: overview?,
            timeline: timeline?,
            map_url: map_url?,
            visitor_info: visitor_info?,
        })
    }
}

/// Validate one raw trail entry, returning the first problem found.
///
/// # Errors
///
/// Returns the first `ValidationError` in field declaration order. Failures
/// inside `tags`, `timeline`, `visitorInfo` or a `content` sequence are
/// wrapped in `ValidationError::Nested` and carry the full path, e.g.
/// `visitorInfo[2].content[0].type`.
pub fn validate_walk(raw: &Value) -> Result<Walk, ValidationError> {
    validate(raw)
}

/// Validate one raw trail entry, returning every problem found.
///
/// # Errors
///
/// Returns all problems in traversal order; the first one is the error
/// [`validate_walk`] would return.
pub fn validate_walk_all(raw: &Value, options: ValidationOptions) -> Result<Walk, ValidationErrors> {
    validate_with(raw, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueKind;
    use crate::path::FieldPath;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn difficulty_accepts_each_label() {
        for (label, expected) in [
            ("Easy", Difficulty::Easy),
            ("Moderate", Difficulty::Moderate),
            ("Hard", Difficulty::Hard),
        ] {
            assert_eq!(validate::<Difficulty>(&json!(label)).unwrap(), expected);
        }
    }

    #[test]
    fn difficulty_rejects_lowercase_label() {
        let err = validate::<Difficulty>(&json!("easy")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EnumViolation {
                path: FieldPath::root(),
                value: "easy".into(),
                allowed: Difficulty::LABELS,
            }
        );
    }

    #[test]
    fn difficulty_rejects_number() {
        let err = validate::<Difficulty>(&json!(3)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                path: FieldPath::root(),
                expected: ValueKind::String,
                found: ValueKind::Number,
            }
        );
    }

    #[test]
    fn timeline_entry_reports_both_missing_fields() {
        let errors =
            validate_with::<TimelineEntry>(&json!({}), ValidationOptions::default()).unwrap_err();
        let paths: Vec<String> = errors.iter().map(|e| e.path().to_string()).collect();
        assert_eq!(paths, ["title", "time"]);
    }

    #[test]
    fn visitor_info_entry_validates_nested_content() {
        let entry: VisitorInfoEntry = validate(&json!({
            "title": "Facilities",
            "icon": "mdi:toilet",
            "content": [{"type": "list", "content": ["Toilets", "Cafe"]}],
        }))
        .unwrap();
        assert_eq!(entry.icon, "mdi:toilet");
        assert_eq!(entry.content.len(), 1);
    }

    #[test]
    fn visitor_info_entry_icon_is_not_resolved() {
        let entry: VisitorInfoEntry = validate(&json!({
            "title": "Parking",
            "icon": "does-not-exist-anywhere",
            "content": [],
        }))
        .unwrap();
        assert_eq!(entry.icon, "does-not-exist-anywhere");
    }
}

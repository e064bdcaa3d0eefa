use serde::Serialize;
use walks_content::{CollectionEntry, LoadOptions};
use walks_core::{Difficulty, Walk};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::context::AppContext;
use crate::output::{Tabular, output_rows};

#[derive(Debug, Serialize)]
struct WalkRow<'a> {
    id: &'a str,
    title: &'a str,
    area: &'a str,
    difficulty: Difficulty,
    duration: &'a str,
    distance: &'a str,
    accessible: bool,
    alerts: bool,
    tags: &'a [String],
}

impl<'a> From<&'a CollectionEntry> for WalkRow<'a> {
    fn from(entry: &'a CollectionEntry) -> Self {
        let walk = &entry.data;
        Self {
            id: &entry.id,
            title: &walk.title,
            area: &walk.area,
            difficulty: walk.difficulty,
            duration: &walk.duration,
            distance: &walk.distance,
            accessible: walk.is_accessible,
            alerts: walk.has_alerts,
            tags: &walk.tags,
        }
    }
}

impl Tabular for WalkRow<'_> {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "title",
        "area",
        "difficulty",
        "duration",
        "distance",
        "accessible",
        "alerts",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.to_string(),
            self.area.to_string(),
            self.difficulty.to_string(),
            self.duration.to_string(),
            self.distance.to_string(),
            self.accessible.to_string(),
            self.alerts.to_string(),
        ]
    }
}

/// Handle `walks list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = LoadOptions {
        validation: ctx.config.validation.options(),
        ..LoadOptions::default()
    };
    let report = ctx.load(args.dir.as_deref(), &options)?;
    if !report.is_clean() {
        tracing::warn!(
            failed = report.failures.len(),
            "some entries were skipped; run `walks validate` for details"
        );
    }

    let rows = report
        .collection
        .filter(|walk| matches(walk, args))
        .map(WalkRow::from)
        .collect::<Vec<_>>();
    output_rows(&rows, flags.format)
}

fn matches(walk: &Walk, args: &ListArgs) -> bool {
    args.difficulty.is_none_or(|difficulty| walk.difficulty == difficulty)
        && (!args.accessible || walk.is_accessible)
        && args.tag.as_deref().is_none_or(|tag| walk.has_tag(tag))
}

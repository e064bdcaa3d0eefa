use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{TimelineEntry, VisitorInfoEntry};
use crate::enums::Difficulty;

/// One entry of the walks collection.
///
/// Every field is required. A `Walk` is built once by the validator and
/// treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Walk {
    pub title: String,
    pub card_description: String,
    pub tags: Vec<String>,
    pub area: String,
    /// Asset reference for the hero image.
    pub image: String,
    pub image_alt: String,

    // specs
    pub difficulty: Difficulty,
    pub duration: String,
    pub distance: String,
    pub is_accessible: bool,
    pub has_alerts: bool,

    pub overview: String,

    pub timeline: Vec<TimelineEntry>,

    /// Embedded map URL. Only checked to be a string.
    pub map_url: String,

    pub visitor_info: Vec<VisitorInfoEntry>,
}

impl Walk {
    /// Wire names of every field, in declaration order.
    pub const FIELDS: &'static [&'static str] = &[
        "title",
        "cardDescription",
        "tags",
        "area",
        "image",
        "imageAlt",
        "difficulty",
        "duration",
        "distance",
        "isAccessible",
        "hasAlerts",
        "overview",
        "timeline",
        "mapUrl",
        "visitorInfo",
    ];

    /// Whether the walk carries `tag`, compared exactly.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Every icon key referenced by the visitor-info section, in order.
    pub fn icon_keys(&self) -> impl Iterator<Item = &str> {
        self.visitor_info.iter().map(|info| info.icon.as_str())
    }
}

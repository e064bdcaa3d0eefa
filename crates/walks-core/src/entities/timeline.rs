use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stop along the walk. `time` is a display string, not a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TimelineEntry {
    pub title: String,
    pub time: String,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ContentBlock;

/// A titled block of practical information ("Parking", "Accessibility").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct VisitorInfoEntry {
    pub title: String,
    /// Icon key resolved by the site's icon loader, e.g. `car` or `mdi:car`.
    pub icon: String,
    pub content: Vec<ContentBlock>,
}

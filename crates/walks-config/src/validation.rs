//! Validation strictness.

use serde::{Deserialize, Serialize};
use walks_schema::ValidationOptions;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Reject keys the walk schema does not declare.
    #[serde(default)]
    pub deny_unknown_fields: bool,

    /// Report every problem in an entry instead of only the first.
    #[serde(default)]
    pub report_all: bool,
}

impl ValidationConfig {
    #[must_use]
    pub const fn options(&self) -> ValidationOptions {
        ValidationOptions {
            deny_unknown_fields: self.deny_unknown_fields,
        }
    }
}

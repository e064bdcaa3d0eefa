//! Entity structs for trail content.
//!
//! A `Walk` is one entry of the walks data collection. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so a validated record can be
//! re-serialized, round-tripped, and exported as JSON Schema. Field names on
//! the wire are camelCase to match the content files.

mod content;
mod timeline;
mod visitor_info;
mod walk;

pub use content::ContentBlock;
pub use timeline::TimelineEntry;
pub use visitor_info::VisitorInfoEntry;
pub use walk::Walk;

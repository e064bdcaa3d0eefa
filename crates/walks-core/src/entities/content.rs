use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One unit of rich text inside a visitor-info section.
///
/// On the wire the variant is selected by the `type` discriminator and the
/// payload lives under `content`:
///
/// ```json
/// { "type": "paragraph", "content": "Free lot available." }
/// { "type": "list", "content": ["Toilets", "Cafe"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A single paragraph of text.
    Paragraph(String),
    /// A bulleted list, in display order.
    List(Vec<String>),
}

impl ContentBlock {
    /// Name of the discriminator key.
    pub const TAG_FIELD: &'static str = "type";

    /// Name of the payload key.
    pub const PAYLOAD_FIELD: &'static str = "content";

    /// Every accepted discriminator value.
    pub const TAGS: &'static [&'static str] = &["paragraph", "list"];

    /// The discriminator value of this block.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Paragraph(_) => "paragraph",
            Self::List(_) => "list",
        }
    }

    /// Plain text of the block; list items are joined by newlines.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Paragraph(text) => text.clone(),
            Self::List(items) => items.join("\n"),
        }
    }
}

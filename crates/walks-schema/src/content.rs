//! Content-block schema.
//!
//! A block is `{ "type": "paragraph", "content": "<text>" }` or
//! `{ "type": "list", "content": ["<text>", ...] }`. The discriminator is read
//! first; the payload is only checked once the tag is known, since the tag
//! decides which payload shape is valid.

use serde_json::Value;
use walks_core::ContentBlock;

use crate::check::{Checker, Validate, validate};
use crate::error::ValidationError;

impl Validate for ContentBlock {
    fn check(raw: &Value, cx: &mut Checker) -> Option<Self> {
        let map = cx.object(raw)?;
        let tag: Option<String> = cx.field(map, Self::TAG_FIELD);

        let block = match tag.as_deref() {
            Some("paragraph") => cx.field(map, Self::PAYLOAD_FIELD).map(Self::Paragraph),
            Some("list") => cx.field(map, Self::PAYLOAD_FIELD).map(Self::List),
            Some(other) => {
                cx.at_field(Self::TAG_FIELD, |cx| cx.enum_violation(other, Self::TAGS));
                None
            }
            None => None,
        };

        if !cx.declared_fields_only(map, &[Self::TAG_FIELD, Self::PAYLOAD_FIELD]) {
            return None;
        }
        block
    }
}

/// Validate one raw content block.
///
/// # Errors
///
/// - `MissingField` when `type` or `content` is absent
/// - `TypeMismatch` when the block is not an object, `type` is not a string,
///   or `content` does not match the shape its tag requires
/// - `EnumViolation` when `type` is neither `paragraph` nor `list`
pub fn validate_content_block(raw: &Value) -> Result<ContentBlock, ValidationError> {
    validate(raw)
}

/// Validate a sequence of raw content blocks, preserving order.
///
/// # Errors
///
/// Returns the first failing element wrapped in `ValidationError::Nested`,
/// whose path is the element index (e.g. `[2]`).
pub fn validate_content_sequence(raw: &Value) -> Result<Vec<ContentBlock>, ValidationError> {
    validate(raw)
}

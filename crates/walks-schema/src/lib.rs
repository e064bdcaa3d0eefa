//! # walks-schema
//!
//! Validation of raw content entries into typed walks records, plus a JSON
//! Schema registry for external tooling.
//!
//! This crate provides:
//! - The [`Validate`] trait and its [`Checker`], which walk a generic
//!   `serde_json::Value` and build typed records while recording every
//!   problem with its full [`FieldPath`]
//! - The content-block schema ([`validate_content_block`],
//!   [`validate_content_sequence`]) and the trail-record schema
//!   ([`validate_walk`], [`validate_walk_all`])
//! - [`SchemaRegistry`]: JSON Schemas generated from the `walks-core` types
//!
//! ## Architecture
//!
//! Record types are defined in `walks-core` with `#[derive(JsonSchema)]`.
//! Validation here is pure: it never logs, performs no I/O and holds no
//! shared state, so it can be called from any number of threads.
//! Consumer crates (walks-content, walks-cli) decide what to do with errors.

mod check;
mod content;
mod error;
mod path;
mod registry;
mod walk;

pub use check::{Checker, Validate, ValidationOptions, validate, validate_with};
pub use content::{validate_content_block, validate_content_sequence};
pub use error::{SchemaError, ValidationError, ValidationErrors, ValueKind};
pub use path::{FieldPath, PathSegment};
pub use registry::SchemaRegistry;
pub use walk::{validate_walk, validate_walk_all};

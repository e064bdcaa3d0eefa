//! # walks-core
//!
//! Core types for the walks content toolkit.
//!
//! This crate provides the foundational types shared across all walks crates:
//! - The trail record (`Walk`) and its nested timeline and visitor-info entries
//! - The `ContentBlock` sum type used for rich visitor-info text
//! - The closed `Difficulty` enumeration
//! - Entry id derivation from collection-relative file paths
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;

pub use entities::{ContentBlock, TimelineEntry, VisitorInfoEntry, Walk};
pub use enums::Difficulty;
pub use errors::CoreError;

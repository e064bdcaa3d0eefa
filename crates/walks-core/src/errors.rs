//! Cross-cutting error types for the walks crates.
//!
//! Validation failures have their own structured taxonomy in `walks-schema`,
//! and loader failures live in `walks-content`. This module only covers
//! conversions performed on core types.

use thiserror::Error;

/// Errors raised by conversions on core types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A difficulty label outside the closed set.
    #[error("Unknown difficulty: {0} (expected one of Easy, Moderate, Hard)")]
    UnknownDifficulty(String),

    /// A file path that cannot be turned into a collection entry id.
    #[error("Invalid entry path: {0}")]
    InvalidEntryPath(String),
}

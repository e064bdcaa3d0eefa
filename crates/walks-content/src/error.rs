//! Loader error types.

use std::path::PathBuf;

use walks_schema::ValidationErrors;

use crate::format::DataFormat;
use crate::icons::IconReference;

/// Errors that stop a whole collection from loading.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The collection directory does not exist or is not a directory.
    #[error("collection directory not found: {}", .0.display())]
    MissingCollection(PathBuf),

    /// The icon directory does not exist or is not a directory.
    #[error("icon directory not found: {}", .0.display())]
    MissingIconDir(PathBuf),

    /// Directory traversal failed.
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

/// Why a single entry was rejected. Siblings are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    /// The file could not be read.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file path cannot be turned into an entry id.
    #[error(transparent)]
    InvalidPath(#[from] walks_core::CoreError),

    /// The file is not well-formed in its format.
    #[error("{format} parse error: {message}")]
    Parse { format: DataFormat, message: String },

    /// The decoded entry does not satisfy the walk schema.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// Another file in the collection maps to the same id.
    #[error("duplicate entry id '{id}' (also defined by {})", join_paths(.others))]
    DuplicateId { id: String, others: Vec<PathBuf> },

    /// Visitor-info icons missing from the icon directory (strict icon mode).
    #[error("unresolved icons: {}", join_icons(.0))]
    UnresolvedIcons(Vec<IconReference>),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_icons(icons: &[IconReference]) -> String {
    icons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl EntryError {
    /// Short snake-case label for reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidPath(_) => "invalid_path",
            Self::Parse { .. } => "parse",
            Self::Invalid(_) => "invalid",
            Self::DuplicateId { .. } => "duplicate_id",
            Self::UnresolvedIcons(_) => "unresolved_icons",
        }
    }
}

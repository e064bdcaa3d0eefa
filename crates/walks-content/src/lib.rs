//! # walks-content
//!
//! Loads the walks data collection from disk.
//!
//! This crate plays the data-loading role around the pure validators in
//! `walks-schema`:
//! - [`walk::build_walker`] finds entry files under the collection directory
//! - [`DataFormat`] decodes JSON, YAML and TOML entries into a generic value
//! - [`load_collection`] validates every entry in isolation (in parallel),
//!   detects duplicate ids and returns a [`LoadReport`]
//! - [`IconSet`] backs the optional check that visitor-info icon keys exist
//!
//! One bad entry never prevents its siblings from loading; deciding whether
//! failures abort a build is left to the caller.

mod collection;
mod error;
mod format;
mod icons;
pub mod walk;

pub use collection::{
    Collection, CollectionEntry, EntryFailure, IconWarning, LoadOptions, LoadReport,
    load_collection,
};
pub use error::{ContentError, EntryError};
pub use format::DataFormat;
pub use icons::{IconReference, IconSet, unresolved_icons};

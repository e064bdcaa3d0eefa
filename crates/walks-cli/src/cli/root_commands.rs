use std::path::PathBuf;

use clap::{Args, Subcommand};
use walks_core::Difficulty;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate every entry of the collection.
    Validate(ValidateArgs),
    /// List walks, optionally filtered.
    List(ListArgs),
    /// Show one walk by id.
    Show(ShowArgs),
    /// Dump JSON Schema for a registered type.
    Schema(SchemaArgs),
    /// Print the effective configuration.
    Config,
}

/// Arguments for `walks validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Collection directory (defaults to `content.dir`).
    pub dir: Option<PathBuf>,
    /// Report every problem per entry instead of the first.
    #[arg(long)]
    pub all: bool,
    /// Reject keys the schema does not declare.
    #[arg(long)]
    pub strict: bool,
    /// Icon directory to check visitor-info icons against.
    #[arg(long, value_name = "DIR")]
    pub icons: Option<PathBuf>,
}

/// Arguments for `walks list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Collection directory (defaults to `content.dir`).
    pub dir: Option<PathBuf>,
    /// Only walks of this difficulty (easy, moderate, hard).
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
    /// Only accessible walks.
    #[arg(long)]
    pub accessible: bool,
    /// Only walks carrying this tag.
    #[arg(long)]
    pub tag: Option<String>,
}

/// Arguments for `walks show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Entry id, e.g. `coastal-loop` or `north/ridge`.
    pub id: String,
    /// Collection directory (defaults to `content.dir`).
    pub dir: Option<PathBuf>,
}

/// Arguments for `walks schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; lists the registered names when omitted.
    pub name: Option<String>,
    /// Write schemas as `<name>.schema.json` files into this directory.
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

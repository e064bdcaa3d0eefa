use std::path::{Path, PathBuf};

use anyhow::Context;
use walks_config::WalksConfig;
use walks_content::{IconSet, LoadOptions, LoadReport, load_collection};

/// Shared application state resolved once at startup.
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: WalksConfig,
}

impl AppContext {
    pub const fn new(project_root: PathBuf, config: WalksConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Collection directory: the command-line override as given, else the
    /// configured one resolved against the project root.
    pub fn content_dir(&self, dir: Option<&Path>) -> PathBuf {
        dir.map_or_else(
            || self.config.content.resolve_dir(&self.project_root),
            Path::to_path_buf,
        )
    }

    /// Loader options from configuration, with command-line overrides.
    pub fn load_options(&self, strict: bool, icons: Option<&Path>) -> anyhow::Result<LoadOptions> {
        let mut validation = self.config.validation.options();
        validation.deny_unknown_fields |= strict;

        let icon_dir = icons
            .map(Path::to_path_buf)
            .or_else(|| self.config.icons.resolve_dir(&self.project_root));
        let icons = icon_dir
            .map(|dir| IconSet::from_dir(&dir))
            .transpose()
            .context("failed to load icon set")?;

        Ok(LoadOptions {
            validation,
            icons,
            icons_strict: self.config.icons.strict,
        })
    }

    /// Load the collection at `dir` (or the configured one).
    pub fn load(&self, dir: Option<&Path>, options: &LoadOptions) -> anyhow::Result<LoadReport> {
        let dir = self.content_dir(dir);
        load_collection(&self.config.content.collection, &dir, options)
            .with_context(|| format!("failed to load collection at {}", dir.display()))
    }
}

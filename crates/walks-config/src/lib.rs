//! # walks-config
//!
//! Layered configuration loading for the walks toolkit using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WALKS_*` prefix, `__` as separator)
//! 2. Project-level `.walks/config.toml`
//! 3. User-level `~/.config/walks/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WALKS_CONTENT__DIR` -> `content.dir`,
//! `WALKS_VALIDATION__DENY_UNKNOWN_FIELDS` -> `validation.deny_unknown_fields`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use walks_config::WalksConfig;
//!
//! // Load from all sources (dotenvy + TOML + env), project root = cwd:
//! let config = WalksConfig::load_with_dotenv().expect("config");
//!
//! if config.icons.is_configured() {
//!     println!("Icons: {}", config.icons.dir);
//! }
//! ```

mod content;
mod error;
mod icons;
mod validation;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use icons::IconsConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the project root.
pub const PROJECT_CONFIG_PATH: &str = ".walks/config.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "WALKS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WalksConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub icons: IconsConfig,
}

impl WalksConfig {
    /// Load configuration for the project in the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type, and `ConfigError::InvalidValue` if the merged
    /// result fails [`Self::check`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for(Path::new("."))
    }

    /// Load configuration for the project rooted at `project_root`.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`WALKS_*` prefix)
    /// 2. `<project_root>/.walks/config.toml`
    /// 3. `~/.config/walks/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_for(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load a `.env` file from the current directory before
    /// building the figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain for the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain for `project_root`.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
    }

    /// Reject values that deserialize but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.content.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "content.dir".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.content.collection.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "content.collection".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("walks").join("config.toml"))
    }
}

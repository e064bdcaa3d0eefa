use std::path::Path;

use anyhow::Context;
use walks_config::WalksConfig;

/// Load `.env` for the project, then the layered configuration.
pub fn load_config(project_root: &Path) -> anyhow::Result<WalksConfig> {
    load_project_dotenv(project_root)?;
    WalksConfig::load_for(project_root).context("failed to load walks configuration")
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    // No project dotenv: fall back to the usual upward search from cwd.
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load dotenv file"),
    }
}

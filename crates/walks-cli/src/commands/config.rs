use std::path::Path;

use serde::Serialize;
use walks_config::WalksConfig;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConfigResponse<'a> {
    project_root: &'a Path,
    content_dir: String,
    #[serde(flatten)]
    config: &'a WalksConfig,
}

/// Handle `walks config`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ConfigResponse {
        project_root: &ctx.project_root,
        content_dir: ctx.content_dir(None).display().to_string(),
        config: &ctx.config,
    };
    output(&response, flags.format)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use walks_config::WalksConfig;

    use super::ConfigResponse;

    #[test]
    fn response_flattens_config_sections() {
        let config = WalksConfig::default();
        let root = PathBuf::from("/site");
        let response = ConfigResponse {
            project_root: &root,
            content_dir: "/site/src/content/walks".into(),
            config: &config,
        };

        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value["project_root"], "/site");
        assert_eq!(value["content"]["collection"], "walks");
        assert_eq!(value["validation"]["deny_unknown_fields"], false);
        assert_eq!(value["icons"]["strict"], false);
    }
}

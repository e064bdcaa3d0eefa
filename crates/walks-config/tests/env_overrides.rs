//! Environment variable precedence tests.

use figment::Jail;
use walks_config::WalksConfig;

#[test]
fn env_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("WALKS_CONTENT__DIR", "env/walks");
        jail.set_env("WALKS_VALIDATION__REPORT_ALL", "true");

        let config = WalksConfig::load().expect("config loads");
        assert_eq!(config.content.dir, "env/walks");
        assert!(config.validation.report_all);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".walks")?;
        jail.create_file(
            ".walks/config.toml",
            r#"
[icons]
dir = "from-toml"
strict = true
"#,
        )?;
        jail.set_env("WALKS_ICONS__DIR", "from-env");

        let config = WalksConfig::load().expect("config loads");
        assert_eq!(config.icons.dir, "from-env");
        // Keys not set in the environment still come from TOML.
        assert!(config.icons.strict);
        Ok(())
    });
}

#[test]
fn single_underscore_env_key_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("WALKS_CONTENT_DIR", "typo/walks");

        let config = WalksConfig::load().expect("config loads");
        assert_eq!(config.content.dir, "src/content/walks");
        Ok(())
    });
}

use walks_config::ENV_PREFIX;

/// Config sections that can be set through `WALKS_<SECTION>__<KEY>`.
const SECTIONS: &[&str] = &["CONTENT", "VALIDATION", "ICONS"];

/// Emit warnings for likely mistyped env var keys that figment silently ignores.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    keys.sort();

    let mut warnings = Vec::new();
    for section in SECTIONS {
        let single = format!("{ENV_PREFIX}{section}_");
        let double = format!("{ENV_PREFIX}{section}__");
        for key in &keys {
            if key.starts_with(&double) {
                continue;
            }
            if let Some(rest) = key.strip_prefix(&single) {
                let suggestion = format!("{double}{rest}");
                warnings.push(format!(
                    "{key} is ignored. Use double underscores between section and key (example: {suggestion})."
                ));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_section_keys() {
        let warnings = collect_unconfigured_warnings(env(&[
            "WALKS_CONTENT_DIR",
            "WALKS_ICONS_STRICT",
        ]));

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("WALKS_CONTENT__DIR"));
        assert!(warnings[1].contains("WALKS_ICONS__STRICT"));
    }

    #[test]
    fn correct_keys_and_unrelated_vars_are_quiet() {
        let warnings = collect_unconfigured_warnings(env(&[
            "WALKS_CONTENT__DIR",
            "WALKS_VALIDATION__REPORT_ALL",
            "WALKS_LOG",
            "PATH",
        ]));
        assert!(warnings.is_empty());
    }
}

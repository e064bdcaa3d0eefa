use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Serialize;
use walks_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WrittenResponse {
    written: Vec<PathBuf>,
}

/// Handle `walks schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let names: Vec<&str> = match args.name.as_deref() {
        Some(name) if registry.get(name).is_none() => bail!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        ),
        Some(name) => vec![name],
        None => registry.list(),
    };

    if let Some(out) = &args.out {
        let written = write_schemas(&registry, &names, out)?;
        return output(&WrittenResponse { written }, flags.format);
    }

    match args.name.as_deref().and_then(|name| registry.get(name)) {
        Some(schema) => output(schema, flags.format),
        None => output(&names, flags.format),
    }
}

/// Write each named schema to `<out>/<name>.schema.json`.
fn write_schemas(
    registry: &SchemaRegistry,
    names: &[&str],
    out: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out)
        .with_context(|| format!("failed to create schema directory {}", out.display()))?;

    let mut written = Vec::with_capacity(names.len());
    for name in names {
        let Some(schema) = registry.get(name) else {
            bail!("unknown schema '{name}'");
        };
        let path = out.join(format!("{name}.schema.json"));
        let mut text = serde_json::to_string_pretty(schema)?;
        text.push('\n');
        fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(schema = name, path = %path.display(), "wrote schema");
        written.push(path);
    }
    Ok(written)
}

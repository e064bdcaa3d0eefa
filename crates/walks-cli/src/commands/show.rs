use anyhow::bail;
use walks_content::LoadOptions;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `walks show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = LoadOptions {
        validation: ctx.config.validation.options(),
        ..LoadOptions::default()
    };
    let report = ctx.load(args.dir.as_deref(), &options)?;

    if let Some(entry) = report.collection.get(&args.id) {
        return output(entry, flags.format);
    }

    if let Some(failure) = report
        .failures
        .iter()
        .find(|failure| failure.id.as_deref() == Some(args.id.as_str()))
    {
        bail!(
            "walk '{}' failed to load from {}: {}",
            args.id,
            failure.path.display(),
            failure.error
        );
    }

    bail!(
        "no walk with id '{}' in collection '{}'",
        args.id,
        report.collection.name()
    )
}

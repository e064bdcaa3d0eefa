use std::path::Path;

use anyhow::bail;
use serde::Serialize;
use walks_content::{EntryError, LoadReport};

use crate::cli::root_commands::ValidateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{Tabular, output, output_rows};

/// One reported problem: a rejected entry, one of its validation errors, or
/// an unresolved icon warning.
#[derive(Debug, Serialize)]
struct ProblemRow {
    file: String,
    id: Option<String>,
    kind: &'static str,
    field: Option<String>,
    message: String,
}

impl Tabular for ProblemRow {
    const HEADERS: &'static [&'static str] = &["file", "kind", "problem"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.file.clone(),
            self.kind.to_string(),
            self.message.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    collection: String,
    dir: String,
    loaded: usize,
    failed: usize,
    problems: Vec<ProblemRow>,
}

/// Handle `walks validate`.
pub fn handle(args: &ValidateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = ctx.load_options(args.strict, args.icons.as_deref())?;
    let dir = ctx.content_dir(args.dir.as_deref());
    let report = ctx.load(Some(dir.as_path()), &options)?;

    let report_all = args.all || ctx.config.validation.report_all;
    let response = ValidateResponse {
        collection: report.collection.name().to_string(),
        dir: dir.display().to_string(),
        loaded: report.collection.len(),
        failed: report.failures.len(),
        problems: problem_rows(&report, &dir, report_all),
    };

    if flags.format == OutputFormat::Table {
        if !response.problems.is_empty() {
            output_rows(&response.problems, flags.format)?;
        }
        if !flags.quiet {
            println!(
                "{}: {} valid, {} rejected",
                response.collection, response.loaded, response.failed
            );
        }
    } else {
        output(&response, flags.format)?;
    }

    if !report.is_clean() {
        bail!(
            "{} of {} entries in {} failed validation",
            response.failed,
            response.failed + response.loaded,
            response.dir
        );
    }
    Ok(())
}

/// Flatten a load report into rows, failures first (by file), then icon
/// warnings. Validation failures expand to one row per error when
/// `report_all` is set and to their first error otherwise.
fn problem_rows(report: &LoadReport, dir: &Path, report_all: bool) -> Vec<ProblemRow> {
    let display = |path: &Path| {
        path.strip_prefix(dir)
            .unwrap_or(path)
            .display()
            .to_string()
            .replace('\\', "/")
    };

    let mut rows = Vec::new();
    for failure in &report.failures {
        let file = display(&failure.path);
        if let EntryError::Invalid(errors) = &failure.error {
            let shown = if report_all { errors.len() } else { 1 };
            for error in errors.iter().take(shown) {
                rows.push(ProblemRow {
                    file: file.clone(),
                    id: failure.id.clone(),
                    kind: error.kind(),
                    field: Some(error.path().to_string()),
                    message: error.to_string(),
                });
            }
        } else {
            rows.push(ProblemRow {
                file,
                id: failure.id.clone(),
                kind: failure.error.kind(),
                field: None,
                message: failure.error.to_string(),
            });
        }
    }

    for warning in &report.icon_warnings {
        let file = report
            .collection
            .get(&warning.id)
            .map_or_else(|| warning.id.clone(), |entry| display(&entry.path));
        rows.push(ProblemRow {
            file,
            id: Some(warning.id.clone()),
            kind: "warning",
            field: Some(warning.reference.path.clone()),
            message: format!("unresolved icon '{}'", warning.reference.icon),
        });
    }

    rows
}

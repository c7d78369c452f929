//! Progress and summary output.
//!
//! Progress lines and summaries go to stdout, refusals to stderr. Kept
//! apart from the packaging steps so podist can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    BuildPoSummary, BuildSummary, CommandResult, CommandSummary, InfoSummary, InitSummary,
    InstallSummary,
};
use crate::catalog::CatalogEvent;
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a progress line for a catalog step to stdout.
pub fn print_catalog_event(event: CatalogEvent<'_>) {
    print_catalog_event_to(event, &mut io::stdout().lock());
}

pub fn print_catalog_event_to<W: Write>(event: CatalogEvent<'_>, writer: &mut W) {
    let _ = match event {
        CatalogEvent::Extracting { template } => {
            writeln!(writer, "Generating {}...", template.display())
        }
        CatalogEvent::Updating { catalog } => {
            writeln!(writer, "Updating {}...", catalog.file_name())
        }
        CatalogEvent::Installing { catalog } => {
            writeln!(writer, "Installing '{}' translations...", catalog.lang)
        }
        CatalogEvent::Installed { dest, .. } => {
            writeln!(writer, "  {} {}", "-->".blue(), dest.display())
        }
    };
}

/// Print the summary of a finished command.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

pub fn print_to<W: Write, E: Write>(result: &CommandResult, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, out),
        CommandSummary::BuildPo(summary) => print_build_po(summary, out),
        CommandSummary::Install(summary) => print_install(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out, err),
        CommandSummary::Info(summary) => print_info(summary, out),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

fn success<W: Write>(out: &mut W, message: String) {
    let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_build<W: Write>(summary: &BuildSummary, out: &mut W) {
    success(
        out,
        format!(
            "Staged {} into {} ({} checked)",
            plural(summary.scripts_staged, "script", "scripts"),
            summary.build_dir.display(),
            plural(summary.data_files_checked, "data file", "data files")
        ),
    );
}

fn print_build_po<W: Write>(summary: &BuildPoSummary, out: &mut W) {
    print_build(&summary.build, out);
    if summary.updated.is_empty() {
        success(
            out,
            format!(
                "Generated {} (no translation files to update)",
                summary.template.display()
            ),
        );
    } else {
        success(
            out,
            format!(
                "Updated {} from {}",
                plural(summary.updated.len(), "translation file", "translation files"),
                summary.template.display()
            ),
        );
    }
}

fn print_install<W: Write>(summary: &InstallSummary, out: &mut W) {
    print_build(&summary.build, out);
    success(
        out,
        format!(
            "Installed {}, {} and {} under {}",
            plural(summary.scripts.len(), "script", "scripts"),
            plural(summary.data_files.len(), "data file", "data files"),
            plural(summary.catalogs.len(), "translation", "translations"),
            summary.root.display()
        ),
    );
}

fn print_info<W: Write>(summary: &InfoSummary, out: &mut W) {
    let width = summary
        .fields
        .iter()
        .map(|(key, _)| key.len() + 1)
        .max()
        .unwrap_or(0);
    for (key, value) in &summary.fields {
        let label = format!("{:<width$}", format!("{}:", key), width = width);
        let _ = writeln!(out, "{} {}", label.bold(), value);
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        success(out, format!("Created {}", CONFIG_FILE_NAME));
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}

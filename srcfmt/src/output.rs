//! Shared output formatting for run reports.
//!
//! Provides JSON and plain-text formatters for `RunReport`.
//! Color/terminal formatting is intentionally excluded from this core module;
//! that concern belongs to the CLI layer.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::FormatMode;
use crate::report::{BatchStatus, RunOutcome, RunReport};

/// Format a `RunReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &RunReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// List discovered files relative to `project_root`.
///
/// Paths outside `project_root` are printed as-is.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_file_list(
    files: &[PathBuf],
    project_root: &Path,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(writer, "Found {} source files:", files.len())?;
    for file in files {
        let shown = file.strip_prefix(project_root).unwrap_or(file.as_path());
        writeln!(writer, "  {}", shown.display())?;
    }
    writeln!(writer)?;
    Ok(())
}

/// The one-line verdict for a report, without color.
#[must_use]
pub fn summary_line(report: &RunReport) -> String {
    match (report.outcome, report.mode, report.ok) {
        (RunOutcome::NothingToDo, _, _) => "No C++ source files found.".to_owned(),
        (RunOutcome::ToolUnavailable, _, _) => format!(
            "\u{2717} Error: {}. Please install clang-format.",
            report.tool_error.as_deref().unwrap_or("formatter not found")
        ),
        (_, FormatMode::Check, true) => "\u{2713} All files are properly formatted.".to_owned(),
        (_, FormatMode::Check, false) => {
            "\u{2717} Some files need formatting. Run without --check to fix.".to_owned()
        }
        (_, FormatMode::Rewrite, true) => "\u{2713} Code formatting complete.".to_owned(),
        (_, FormatMode::Rewrite, false) => {
            "\u{2717} Some errors occurred during formatting.".to_owned()
        }
    }
}

/// Everything in the human-readable report except the verdict line.
///
/// Diagnostics from failed batches are relayed verbatim.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_details(report: &RunReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if !report.walk_issues.is_empty() {
        writeln!(writer, "Some directories could not be scanned:")?;
        for issue in &report.walk_issues {
            writeln!(writer, "  {}", issue.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if report.outcome != RunOutcome::Completed {
        return Ok(());
    }

    for batch in report.failed_batches() {
        let heading = match batch.status {
            BatchStatus::Violations => "Code formatting issues found:",
            _ => "Error running formatter:",
        };
        writeln!(writer, "{heading}")?;
        let text = batch.diagnostics.trim_end();
        if !text.is_empty() {
            writeln!(writer, "{text}")?;
        }
    }

    let verb = match report.mode {
        FormatMode::Check => "Checked",
        FormatMode::Rewrite => "Formatted",
    };
    writeln!(
        writer,
        "{verb} {} of {} files in {} batch(es).",
        report.files_succeeded(),
        report.discovered_files,
        report.invocations()
    )?;
    Ok(())
}

/// Format a `RunReport` as human-readable plain text to a writer.
///
/// Color/ANSI formatting is the responsibility of the caller (CLI layer).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &RunReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    write_details(report, writer)?;
    writeln!(writer, "{}", summary_line(report))?;
    Ok(())
}

//! The batch loop.
//!
//! Files are passed to the tool in consecutive fixed-size slices to stay
//! under the OS argument-length limit. Every batch is attempted even after
//! a failure, so a single run reports every problem.

use std::path::PathBuf;
use std::slice::Chunks;

use tracing::{info, warn};

use crate::config::{FormatMode, RunConfig};
use crate::error::FormatError;
use crate::report::{BatchReport, BatchStatus, RunOutcome, RunReport};
use crate::tool::Formatter;

/// Split `paths` into consecutive slices of at most `batch_size`.
///
/// # Errors
///
/// Returns `FormatError::InvalidBatchSize` if `batch_size` is zero.
pub fn batches(paths: &[PathBuf], batch_size: usize) -> Result<Chunks<'_, PathBuf>, FormatError> {
    if batch_size == 0 {
        return Err(FormatError::InvalidBatchSize);
    }
    Ok(paths.chunks(batch_size))
}

fn run_batch(
    formatter: &dyn Formatter,
    mode: FormatMode,
    index: usize,
    batch: &[PathBuf],
) -> BatchReport {
    let (status, exit_code, diagnostics) = match formatter.invoke(mode, batch) {
        Ok(output) if output.success => (BatchStatus::Succeeded, output.code, String::new()),
        Ok(output) => {
            let status = match mode {
                FormatMode::Check => BatchStatus::Violations,
                FormatMode::Rewrite => BatchStatus::ToolFailed,
            };
            (status, output.code, output.diagnostics().to_owned())
        }
        Err(e) => (
            BatchStatus::SpawnFailed,
            None,
            format!("Error running {}: {e}", formatter.name()),
        ),
    };

    match status {
        BatchStatus::Succeeded if mode == FormatMode::Rewrite => {
            info!("Formatted {} files...", batch.len());
        }
        BatchStatus::Succeeded => {}
        _ => warn!(batch = index, ?status, ?exit_code, "batch failed"),
    }

    BatchReport {
        index,
        files: batch.to_vec(),
        status,
        exit_code,
        diagnostics,
    }
}

/// Run the formatter over `paths` in batches.
///
/// An empty `paths` succeeds without touching the tool. Otherwise the tool
/// is probed once; if it is unavailable the report's outcome is
/// `ToolUnavailable` and no batch runs. Batch failures never stop the loop.
///
/// # Errors
///
/// Returns `FormatError::InvalidBatchSize` if `config.batch_size` is zero.
/// Tool and batch failures are reported through `RunReport::ok`, not as errors.
pub fn run(
    formatter: &dyn Formatter,
    paths: &[PathBuf],
    config: &RunConfig,
) -> Result<RunReport, FormatError> {
    let chunks = batches(paths, config.batch_size)?;
    let mut report = RunReport::nothing_to_do(config.mode);

    if paths.is_empty() {
        info!("No source files found.");
        return Ok(report);
    }
    report.discovered_files = paths.len();

    match formatter.probe() {
        Ok(version) => {
            info!(tool = %formatter.name(), %version, "formatter available");
            report.tool_version = Some(version);
        }
        Err(e) => {
            warn!("{e}");
            report.outcome = RunOutcome::ToolUnavailable;
            report.tool_error = Some(e.to_string());
            report.ok = false;
            return Ok(report);
        }
    }

    match config.mode {
        FormatMode::Check => info!("Checking code formatting..."),
        FormatMode::Rewrite => info!("Formatting code..."),
    }

    report.batches = chunks
        .enumerate()
        .map(|(index, batch)| run_batch(formatter, config.mode, index, batch))
        .collect();
    report.outcome = RunOutcome::Completed;
    report.ok = report.batches.iter().all(BatchReport::succeeded);
    Ok(report)
}

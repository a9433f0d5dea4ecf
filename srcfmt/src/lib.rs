//! # srcfmt
//!
//! Recursive source formatting orchestrator.
//!
//! Discovers C/C++ sources under a project's `src` directory and runs an
//! external formatter (`clang-format`) over them in fixed-size batches,
//! either rewriting files in place or checking that they already conform.
//! The crate never parses source code itself; it only decides which files
//! to hand to the tool and aggregates what the tool reports.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use srcfmt::{ClangFormat, FormatMode, RunConfig, SourceConfig, ToolConfig, format_project};
//!
//! let mut source = SourceConfig::default();
//! source.root = PathBuf::from("/path/to/project");
//!
//! let mut run = RunConfig::default();
//! run.mode = FormatMode::Check;
//!
//! let formatter = ClangFormat::new(ToolConfig::default());
//! let report = format_project(&source, &run, &formatter).unwrap();
//! println!("Invocations: {}", report.invocations());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod discover;
mod error;
pub mod output;
mod report;
mod runner;
mod tool;

pub use config::{
    DEFAULT_BATCH_SIZE, DEFAULT_EXTENSIONS, FormatMode, RunConfig, SourceConfig, ToolConfig,
};
pub use discover::{Discovery, discover};
pub use error::{FormatError, WalkIssue};
pub use report::{BatchReport, BatchStatus, RunOutcome, RunReport};
pub use runner::{batches, run};
pub use tool::{ClangFormat, Formatter, ToolOutput, verify_tool_available};

/// Check that the scan directory exists and is a directory.
///
/// # Errors
///
/// Returns `FormatError::SourceDirMissing` otherwise.
pub fn ensure_source_dir(source: &SourceConfig) -> Result<(), FormatError> {
    let dir = source.scan_dir();
    if dir.is_dir() {
        Ok(())
    } else {
        Err(FormatError::SourceDirMissing(dir))
    }
}

/// Discover and format every source file in a project.
///
/// This is the primary public API. Steps, in order:
///
/// 1. The scan directory must exist (configuration error otherwise).
/// 2. Files are discovered and sorted.
/// 3. With no files the run succeeds without touching the formatter.
/// 4. The formatter is probed once; if unavailable, no batch runs.
/// 5. Every batch is run, failures included, and the results are folded
///    into `RunReport::ok`.
///
/// # Errors
///
/// Returns an error for configuration problems: a missing source directory,
/// an unparseable exclude pattern, or a zero batch size. Formatter
/// unavailability and per-batch failures are reported in the returned
/// `RunReport` instead.
pub fn format_project(
    source: &SourceConfig,
    run_config: &RunConfig,
    formatter: &dyn Formatter,
) -> Result<RunReport, FormatError> {
    ensure_source_dir(source)?;
    let discovery = discover(source)?;
    format_discovered(discovery, run_config, formatter)
}

/// Format the files of an earlier `discover` pass.
///
/// The second half of `format_project`, for callers that need to act on the
/// file list (print it, filter it) between discovery and formatting. Walk
/// issues from `discovery` are carried into the report.
///
/// # Errors
///
/// Returns `FormatError::InvalidBatchSize` if `run_config.batch_size` is zero.
pub fn format_discovered(
    discovery: Discovery,
    run_config: &RunConfig,
    formatter: &dyn Formatter,
) -> Result<RunReport, FormatError> {
    let mut report = run(formatter, &discovery.files, run_config)?;
    report.walk_issues = discovery.walk_issues;
    Ok(report)
}

//! Error types for formatting runs.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Fatal errors: the run cannot start, or cannot continue past the probe.
///
/// Per-batch failures are not errors at this level; they are recorded in
/// the `RunReport` and folded into its `ok` flag.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The directory that should contain sources does not exist.
    #[error("Source directory {} not found", .0.display())]
    SourceDirMissing(PathBuf),

    /// The formatter could not be spawned or its version probe failed.
    #[error("{program} not found or not runnable: {reason}")]
    ToolUnavailable {
        /// Program that was probed.
        program: String,
        /// What went wrong.
        reason: String,
    },

    /// An exclude glob could not be parsed.
    #[error("Invalid exclude glob pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// The raw pattern.
        pattern: String,
        /// Parser error.
        source: glob::PatternError,
    },

    /// A batch size of zero was requested.
    #[error("Batch size must be at least 1")]
    InvalidBatchSize,
}

/// A directory traversal problem encountered during discovery.
///
/// These do not abort discovery; the affected subtree is simply not
/// represented in the file list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct WalkIssue {
    /// Path where traversal failed.
    pub path: PathBuf,
    /// Human-readable description of the failure.
    pub message: String,
}

impl WalkIssue {
    /// Format the issue for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [walk error] {}", self.path.display(), self.message)
    }
}

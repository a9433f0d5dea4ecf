//! Run report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::FormatMode;
use crate::error::WalkIssue;

/// How a single batch ended.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum BatchStatus {
    /// The tool exited with status zero.
    Succeeded,
    /// Check mode: the tool reported files that do not conform.
    Violations,
    /// Rewrite mode: the tool exited non-zero.
    ToolFailed,
    /// The tool process could not be spawned or waited on.
    SpawnFailed,
}

/// Result of one tool invocation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct BatchReport {
    /// Zero-based position of the batch in the run.
    pub index: usize,
    /// Files passed to the tool.
    pub files: Vec<PathBuf>,
    /// How the invocation ended.
    pub status: BatchStatus,
    /// Exit code, if the process ran and exited normally.
    pub exit_code: Option<i32>,
    /// Diagnostic text relayed verbatim from the tool (or the spawn error).
    pub diagnostics: String,
}

impl BatchReport {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status == BatchStatus::Succeeded
    }
}

/// Where the run stopped.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RunOutcome {
    /// No source files were found; the tool was never invoked.
    NothingToDo,
    /// The tool probe failed; no batch was run.
    ToolUnavailable,
    /// Every batch was attempted.
    Completed,
}

/// Result of a formatting run.
///
/// `ok` is the single value callers need for an exit code. The remaining
/// fields exist so the outcome can be explained.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct RunReport {
    /// Rewrite or check.
    pub mode: FormatMode,
    /// Number of files handed to the run.
    pub discovered_files: usize,
    /// Where the run stopped.
    pub outcome: RunOutcome,
    /// First line of the tool's version output, if it was probed successfully.
    pub tool_version: Option<String>,
    /// Why the tool probe failed, if it did.
    pub tool_error: Option<String>,
    /// One entry per tool invocation, in order.
    pub batches: Vec<BatchReport>,
    /// Traversal problems met during discovery. These do not affect `ok`.
    pub walk_issues: Vec<WalkIssue>,
    /// True only if the tool was available and every batch succeeded.
    pub ok: bool,
}

impl RunReport {
    /// A report for a run with no files: successful, no invocations.
    #[must_use]
    pub fn nothing_to_do(mode: FormatMode) -> Self {
        Self {
            mode,
            discovered_files: 0,
            outcome: RunOutcome::NothingToDo,
            tool_version: None,
            tool_error: None,
            batches: Vec::new(),
            walk_issues: Vec::new(),
            ok: true,
        }
    }

    /// Number of times the tool was invoked on files.
    #[must_use]
    pub fn invocations(&self) -> usize {
        self.batches.len()
    }

    /// Batches that did not succeed.
    pub fn failed_batches(&self) -> impl Iterator<Item = &BatchReport> {
        self.batches.iter().filter(|b| !b.succeeded())
    }

    /// Number of files in batches that succeeded.
    #[must_use]
    pub fn files_succeeded(&self) -> usize {
        self.batches
            .iter()
            .filter(|b| b.succeeded())
            .map(|b| b.files.len())
            .sum()
    }
}

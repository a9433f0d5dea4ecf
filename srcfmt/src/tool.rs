//! The external formatter.
//!
//! `Formatter` is the seam between the batch loop and the process that does
//! the actual work. `ClangFormat` spawns the configured program; tests
//! substitute an in-memory recorder.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::debug;

use crate::config::{FormatMode, ToolConfig};
use crate::error::FormatError;

/// Captured result of one tool invocation that actually ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ToolOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// A successful run with no output.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            ..Self::default()
        }
    }

    /// A run that exited with `code` and wrote `stderr`.
    #[must_use]
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Diagnostic text to relay to the user: stderr, falling back to stdout.
    #[must_use]
    pub fn diagnostics(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

impl From<Output> for ToolOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Something that can format batches of files.
pub trait Formatter {
    /// Name used in messages.
    fn name(&self) -> String;

    /// Check the tool can be run at all, returning its version line.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::ToolUnavailable` if the tool cannot be spawned or
    /// its version query exits non-zero.
    fn probe(&self) -> Result<String, FormatError>;

    /// Run the tool over one batch.
    ///
    /// A non-zero exit is reported through `ToolOutput::success`, not as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the process could not be spawned or waited on.
    fn invoke(&self, mode: FormatMode, batch: &[PathBuf]) -> io::Result<ToolOutput>;
}

/// Boolean view of `Formatter::probe`.
#[must_use]
pub fn verify_tool_available(formatter: &dyn Formatter) -> bool {
    formatter.probe().is_ok()
}

/// `clang-format` (or any program with the same flag conventions).
#[derive(Debug, Clone, Default)]
pub struct ClangFormat {
    config: ToolConfig,
}

impl ClangFormat {
    #[must_use]
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Build the command for one batch without running it.
    #[must_use]
    pub fn command(&self, mode: FormatMode, batch: &[PathBuf]) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(self.config.args_for(mode)).args(batch);
        cmd
    }
}

impl Formatter for ClangFormat {
    fn name(&self) -> String {
        self.config.program.display().to_string()
    }

    fn probe(&self) -> Result<String, FormatError> {
        let unavailable = |reason: String| FormatError::ToolUnavailable {
            program: self.name(),
            reason,
        };

        let output = Command::new(&self.config.program)
            .arg(&self.config.version_arg)
            .output()
            .map_err(|e| unavailable(e.to_string()))?;
        let output = ToolOutput::from(output);

        if !output.success {
            let detail = output.diagnostics().trim();
            let reason = match output.code {
                Some(code) if detail.is_empty() => format!("version query exited with {code}"),
                Some(code) => format!("version query exited with {code}: {detail}"),
                None => "version query terminated by signal".to_owned(),
            };
            return Err(unavailable(reason));
        }

        let version = output.stdout.lines().next().unwrap_or_default().trim();
        Ok(version.to_owned())
    }

    fn invoke(&self, mode: FormatMode, batch: &[PathBuf]) -> io::Result<ToolOutput> {
        debug!(tool = %self.name(), %mode, files = batch.len(), "invoking formatter");
        self.command(mode, batch).output().map(ToolOutput::from)
    }
}

//! Configuration types for a formatting run.
//!
//! Split into source discovery (where files come from), run options (how
//! they are batched and which mode applies) and tool invocation (what gets
//! spawned). Each has defaults matching the conventional project layout, so
//! callers only override what differs.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Extensions recognized as C/C++ sources and headers.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".cpp", ".hpp", ".cc", ".cxx", ".h", ".hxx"];

/// Maximum number of files passed to a single tool invocation.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Whether the formatter may touch files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatMode {
    /// Rewrite files in place.
    #[default]
    Rewrite,
    /// Report non-conforming files without modifying anything.
    Check,
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rewrite => write!(f, "rewrite"),
            Self::Check => write!(f, "check"),
        }
    }
}

/// Where source files are discovered.
///
/// NOTE: `source_dir` is resolved relative to `root`. Its absence is a
/// configuration error, not an empty result.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SourceConfig {
    /// Project root.
    pub root: PathBuf,
    /// Directory under `root` that is scanned (default: `src`).
    pub source_dir: PathBuf,
    /// File name suffixes to include. Matching is case-sensitive.
    pub extensions: Vec<String>,
    /// Exclude patterns (glob format), matched against the full path and the file name.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links to directories.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
}

impl SourceConfig {
    /// The directory that discovery walks.
    #[must_use]
    pub fn scan_dir(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_dir: PathBuf::from("src"),
            extensions: DEFAULT_EXTENSIONS.iter().copied().map(str::to_owned).collect(),
            exclude: Vec::new(),
            follow_links: false,
            max_depth: 64,
        }
    }
}

/// Options for the batch loop.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RunConfig {
    /// Rewrite or check.
    pub mode: FormatMode,
    /// Maximum files per tool invocation. Must be non-zero.
    pub batch_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: FormatMode::default(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// How the external formatter is invoked.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ToolConfig {
    /// Program name or path (default: `clang-format`).
    pub program: PathBuf,
    /// Argument used to probe availability.
    pub version_arg: String,
    /// Arguments placed before the file list in rewrite mode.
    pub rewrite_args: Vec<String>,
    /// Arguments placed before the file list in check mode.
    pub check_args: Vec<String>,
}

impl ToolConfig {
    /// Arguments that precede the file list for `mode`.
    #[must_use]
    pub fn args_for(&self, mode: FormatMode) -> &[String] {
        match mode {
            FormatMode::Rewrite => &self.rewrite_args,
            FormatMode::Check => &self.check_args,
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("clang-format"),
            version_arg: "--version".to_owned(),
            rewrite_args: vec!["-i".to_owned()],
            check_args: vec!["--dry-run".to_owned(), "--Werror".to_owned()],
        }
    }
}

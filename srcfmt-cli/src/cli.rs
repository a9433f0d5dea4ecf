use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use tracing::debug;

use srcfmt::output::{summary_line, write_details, write_file_list, write_json};
use srcfmt::{
    ClangFormat, DEFAULT_BATCH_SIZE, FormatMode, RunConfig, RunReport, SourceConfig, ToolConfig,
    discover, ensure_source_dir, format_discovered,
};

#[derive(Parser, Debug)]
#[command(
    name = "srcfmt",
    version,
    about = "Run clang-format over a project's C/C++ sources",
    long_about = None,
)]
pub struct Cli {
    /// Check formatting without modifying files; exit 1 if any file needs changes.
    #[arg(long)]
    pub check: bool,

    /// Project root containing the source directory.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Directory under the root to scan.
    #[arg(long, value_name = "DIR", default_value = "src")]
    pub source_dir: PathBuf,

    /// Glob of files to skip (repeatable).
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Maximum files per clang-format invocation.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Formatter program to run.
    #[arg(long = "clang-format", value_name = "PROGRAM", default_value = "clang-format")]
    pub clang_format: PathBuf,

    /// Print the run report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn mode(&self) -> FormatMode {
        if self.check {
            FormatMode::Check
        } else {
            FormatMode::Rewrite
        }
    }

    fn source_config(&self) -> SourceConfig {
        let mut source = SourceConfig::default();
        source.root.clone_from(&self.root);
        source.source_dir.clone_from(&self.source_dir);
        source.exclude.clone_from(&self.exclude);
        source
    }

    fn run_config(&self) -> RunConfig {
        let mut run = RunConfig::default();
        run.mode = self.mode();
        run.batch_size = self.batch_size;
        run
    }

    fn tool_config(&self) -> ToolConfig {
        let mut tool = ToolConfig::default();
        tool.program.clone_from(&self.clang_format);
        tool
    }

    /// Run discovery and formatting, writing progress and the report to `out`.
    ///
    /// Same steps as `srcfmt::format_project`, split at discovery so the
    /// file list is printed before the formatter runs.
    ///
    /// Returns the run's `ok` flag.
    fn execute(&self, out: &mut dyn Write) -> Result<bool> {
        let source = self.source_config();
        ensure_source_dir(&source)?;

        if !self.json {
            writeln!(
                out,
                "Looking for source files in: {}",
                source.scan_dir().display()
            )?;
        }
        let discovery = discover(&source)?;
        if !self.json && !discovery.files.is_empty() {
            write_file_list(&discovery.files, &source.root, out)?;
        }

        let formatter = ClangFormat::new(self.tool_config());
        let report = format_discovered(discovery, &self.run_config(), &formatter)?;
        debug!(ok = report.ok, invocations = report.invocations(), "run finished");

        if self.json {
            write_json(&report, out)?;
        } else {
            write_details(&report, out)?;
            writeln!(out, "{}", styled_summary(&report))?;
        }
        Ok(report.ok)
    }
}

fn styled_summary(report: &RunReport) -> colored::ColoredString {
    let line = summary_line(report);
    if report.ok {
        line.green()
    } else {
        line.red().bold()
    }
}

/// Parse arguments, set up logging and run.
///
/// # Errors
///
/// Returns configuration errors (missing source directory, bad exclude
/// pattern, zero batch size) and output failures.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.execute(&mut out)
}

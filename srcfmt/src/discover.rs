//! Source file discovery.
//!
//! Walks the scan directory and collects every regular file whose name ends
//! with a recognized extension. The result is sorted by raw path bytes so
//! batch contents and output order are identical across runs regardless of
//! the order the filesystem returns directory entries in.

use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::SourceConfig;
use crate::error::{FormatError, WalkIssue};

/// Files found by a discovery pass, plus any traversal problems.
#[derive(Debug, Clone, Default, Serialize)]
#[non_exhaustive]
pub struct Discovery {
    /// Matching files, sorted and deduplicated.
    pub files: Vec<PathBuf>,
    /// Subtrees that could not be walked.
    pub walk_issues: Vec<WalkIssue>,
}

/// Check if the file name ends with one of `extensions`.
fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.to_string_lossy();
        extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    })
}

/// Check if a path matches any of the exclude patterns
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>, FormatError> {
    patterns
        .iter()
        .map(|pat_str| {
            Pattern::new(pat_str).map_err(|source| FormatError::InvalidExcludePattern {
                pattern: pat_str.clone(),
                source,
            })
        })
        .collect()
}

/// Find all source files under `config.scan_dir()`.
///
/// An empty result is not an error. Traversal errors (permission denied,
/// symlink loops) are logged and returned in `walk_issues` rather than
/// aborting the walk.
///
/// The walk stops at `config.max_depth`. A directory sitting at that depth is
/// not descended into and is reported in `walk_issues`, so files below the
/// limit are never skipped silently.
///
/// # Errors
///
/// Returns `FormatError::InvalidExcludePattern` if an exclude glob does not parse.
pub fn discover(config: &SourceConfig) -> Result<Discovery, FormatError> {
    let exclude_patterns = compile_excludes(&config.exclude)?;
    let root = config.scan_dir();

    let mut discovery = Discovery::default();

    for entry_result in WalkDir::new(&root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                let path = walk_err
                    .path()
                    .map_or_else(|| root.clone(), Path::to_path_buf);
                warn!(path = %path.display(), "directory traversal error: {walk_err}");
                discovery.walk_issues.push(WalkIssue {
                    path,
                    message: walk_err.to_string(),
                });
                continue;
            }
        };

        let file_path = entry.path();

        if entry.depth() == config.max_depth && entry.file_type().is_dir() {
            warn!(
                path = %file_path.display(),
                max_depth = config.max_depth,
                "depth limit reached"
            );
            discovery.walk_issues.push(WalkIssue {
                path: file_path.to_path_buf(),
                message: format!(
                    "Maximum depth {} reached; contents not scanned",
                    config.max_depth
                ),
            });
            continue;
        }

        // Only regular files; `is_file` resolves symlinks to files.
        if !file_path.is_file() {
            continue;
        }

        if !has_source_extension(file_path, &config.extensions) {
            continue;
        }

        if matches_exclude(file_path, &exclude_patterns) {
            debug!(path = %file_path.display(), "excluded");
            continue;
        }

        discovery.files.push(file_path.to_path_buf());
    }

    discovery
        .files
        .sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    discovery.files.dedup();
    debug!(
        dir = %root.display(),
        count = discovery.files.len(),
        "discovery complete"
    );
    Ok(discovery)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        crate::config::DEFAULT_EXTENSIONS
            .iter()
            .copied()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_extension_suffix_match() {
        let exts = exts();
        assert!(has_source_extension(Path::new("src/a.cpp"), &exts));
        assert!(has_source_extension(Path::new("src/b.hpp"), &exts));
        assert!(has_source_extension(Path::new("legacy.hxx"), &exts));
        assert!(!has_source_extension(Path::new("src/c.txt"), &exts));
        assert!(!has_source_extension(Path::new("src/d.c"), &exts));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(!has_source_extension(Path::new("Upper.H"), &exts()));
        assert!(!has_source_extension(Path::new("Upper.CPP"), &exts()));
    }

    #[test]
    fn test_extension_checks_file_name_only() {
        // A directory named like a source file does not make its contents match.
        assert!(!has_source_extension(Path::new("lib.h/README"), &exts()));
    }

    #[test]
    fn test_matches_exclude_by_name_and_path() {
        let patterns = vec![
            Pattern::new("*_generated.h").unwrap(),
            Pattern::new("*/third_party/*").unwrap(),
        ];
        assert!(matches_exclude(Path::new("src/proto_generated.h"), &patterns));
        assert!(matches_exclude(
            Path::new("src/third_party/zlib.h"),
            &patterns
        ));
        assert!(!matches_exclude(Path::new("src/main.cpp"), &patterns));
    }

    #[test]
    fn test_compile_excludes_rejects_bad_glob() {
        let err = compile_excludes(&["[".to_owned()]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidExcludePattern { .. }));
    }
}

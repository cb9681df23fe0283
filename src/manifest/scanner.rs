//! Manifest discovery on disk.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for manifest files.
pub struct ScanResult {
    /// Sorted so that "first declaration wins" is stable across runs.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

pub fn scan_manifests(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    manifest_suffix: &str,
    verbose: bool,
) -> ScanResult {
    let ignores = IgnoreSet::new(base_dir, ignore_patterns, verbose);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base_dir, includes, verbose) {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn_verbose(verbose, format_args!("Cannot access path: {}", e));
                    continue;
                }
            };
            let path = entry.path();
            if ignores.is_ignored(path) {
                continue;
            }
            if entry.file_type().is_file() && is_manifest_file(path, manifest_suffix) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Ignore patterns split into literal path prefixes and glob patterns.
struct IgnoreSet {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &str, ignore_patterns: &[String], verbose: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignore_patterns {
            if !is_glob_pattern(p) {
                literal_paths.push(Path::new(base_dir).join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn_verbose(
                    verbose,
                    format_args!("Invalid ignore pattern '{}': {}", p, e),
                ),
            }
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.literal_paths.iter().any(|dir| path.starts_with(dir))
            || self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: the base directory, or every include that exists.
fn scan_roots(base_dir: &str, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![Path::new(base_dir).to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let full_path = Path::new(base_dir).join(inc);
        if !is_glob_pattern(inc) {
            if full_path.exists() {
                roots.push(full_path);
            } else {
                warn_verbose(
                    verbose,
                    format_args!("Include path does not exist: {}", full_path.display()),
                );
            }
            continue;
        }
        match glob(&full_path.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) => warn_verbose(
                verbose,
                format_args!("Invalid glob pattern '{}': {}", inc, e),
            ),
        }
    }
    roots
}

fn warn_verbose(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

fn is_manifest_file(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.len() > suffix.len() && name.ends_with(suffix))
}

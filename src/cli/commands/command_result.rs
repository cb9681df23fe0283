use crate::issues::Issue;

/// Result of running `bindmeta check`.
#[derive(Debug)]
pub struct CommandResult {
    pub error_count: usize,
    /// All issues found, sorted.
    pub issues: Vec<Issue>,
    /// Number of manifests that failed to load.
    pub parse_error_count: usize,
    pub manifest_files_checked: usize,
    /// Types, properties, and constructor parameters resolved.
    pub elements_checked: usize,
}

//! Manifest-level rules: files that failed to load and types declared twice.

use crate::{
    issues::Issue,
    manifest::{DuplicateType, ManifestFailure},
};

pub fn check_parse_error_issues(failures: &[ManifestFailure]) -> Vec<Issue> {
    failures.iter().map(Issue::parse_error).collect()
}

pub fn check_duplicate_type_issues(duplicates: &[DuplicateType]) -> Vec<Issue> {
    duplicates.iter().map(Issue::duplicate_type).collect()
}

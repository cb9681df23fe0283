//! Issues reported by `bindmeta check`.

use std::{cmp::Ordering, fmt};

use crate::analysis::ResolvedElement;
use crate::core::{ResolveError, TypeRef};
use crate::manifest::{DuplicateType, ManifestFailure};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ParseError,
    DuplicateType,
    AmbiguousConstructor,
    UnresolvedConstructor,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::DuplicateType => write!(f, "duplicate-type"),
            Rule::AmbiguousConstructor => write!(f, "ambiguous-constructor"),
            Rule::UnresolvedConstructor => write!(f, "unresolved-constructor"),
        }
    }
}

// ============================================================
// Issue
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: String,
    /// Primary subject, usually a type name.
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl Issue {
    pub fn parse_error(failure: &ManifestFailure) -> Self {
        Self {
            file_path: failure.path.clone(),
            message: failure.path.clone(),
            severity: Severity::Error,
            rule: Rule::ParseError,
            details: Some(failure.error.to_string()),
            hint: None,
        }
    }

    pub fn duplicate_type(duplicate: &DuplicateType) -> Self {
        Self {
            file_path: duplicate.duplicate_path.clone(),
            message: duplicate.name.to_string(),
            severity: Severity::Error,
            rule: Rule::DuplicateType,
            details: Some(format!("first declared in {}", duplicate.first_path)),
            hint: Some("rename the type or remove one of the declarations".to_string()),
        }
    }

    /// Several constructors of one type carry the binding-constructor marker.
    pub fn ambiguous_constructor(element: &ResolvedElement, error: &ResolveError) -> Self {
        Self {
            file_path: element.path.clone(),
            message: element.context.key.to_string(),
            severity: Severity::Error,
            rule: Rule::AmbiguousConstructor,
            details: Some(error.to_string()),
            hint: error.hint().map(str::to_string),
        }
    }

    pub fn unresolved_constructor(path: &str, ty: &TypeRef, arity: usize) -> Self {
        Self {
            file_path: path.to_string(),
            message: ty.to_string(),
            severity: Severity::Warning,
            rule: Rule::UnresolvedConstructor,
            details: Some(format!(
                "several public constructors take {} parameters and none is parameterless",
                arity
            )),
            hint: Some("mark one constructor with `bindingConstructor`".to_string()),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_path
            .cmp(&other.file_path)
            .then(self.severity.cmp(&other.severity))
            .then(self.rule.cmp(&other.rule))
            .then(self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use super::CommandResult;
use crate::issues::{Issue, Rule, Severity};

pub fn finish(
    mut issues: Vec<Issue>,
    manifest_files_checked: usize,
    elements_checked: usize,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues.iter().filter(|i| i.rule == Rule::ParseError).count();
    let error_count = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();

    CommandResult {
        error_count,
        issues,
        parse_error_count,
        manifest_files_checked,
        elements_checked,
    }
}

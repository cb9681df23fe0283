use std::env;

use anyhow::{Context, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandResult, helper::finish};
use crate::{
    analysis::resolve_catalog,
    issues::Issue,
    manifest::Workspace,
    rules::{
        check_ambiguous_constructor_issues, check_duplicate_type_issues,
        check_parse_error_issues, check_unresolved_constructor_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    AmbiguousConstructor,
    UnresolvedConstructor,
    DuplicateType,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::AmbiguousConstructor,
            CheckRule::UnresolvedConstructor,
            CheckRule::DuplicateType,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let common = &cmd.args.common;
    let start_dir = env::current_dir().context("Failed to read current directory")?;
    let workspace = Workspace::load(&start_dir, common.source_root.as_deref(), common.verbose)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let elements = resolve_catalog(&workspace.catalog);
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::AmbiguousConstructor => {
                all_issues.extend(check_ambiguous_constructor_issues(&elements));
            }
            CheckRule::UnresolvedConstructor => {
                if workspace.config.warn_on_unresolved_constructor {
                    all_issues.extend(check_unresolved_constructor_issues(
                        &workspace.catalog,
                        &elements,
                    ));
                }
            }
            CheckRule::DuplicateType => {
                all_issues.extend(check_duplicate_type_issues(&workspace.duplicates));
            }
        }
    }

    // Load failures are always reported.
    all_issues.extend(check_parse_error_issues(&workspace.failures));

    Ok(finish(all_issues, workspace.files.len(), elements.len()))
}

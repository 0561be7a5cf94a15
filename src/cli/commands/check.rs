use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        accessor::check_accessor_mismatch_issues, missing::check_missing_keys_issues,
        orphan::check_orphan_keys_issues, replica_lag::check_replica_lag_issues,
        type_mismatch::check_type_mismatch_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    MissingKey,
    AccessorMismatch,
    ReplicaLag,
    OrphanKey,
    TypeMismatch,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::MissingKey,
            CheckRule::AccessorMismatch,
            CheckRule::ReplicaLag,
            CheckRule::OrphanKey,
            CheckRule::TypeMismatch,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::MissingKey => {
                let issues = check_missing_keys_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::MissingKey));
            }
            CheckRule::AccessorMismatch => {
                let issues = check_accessor_mismatch_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::AccessorMismatch));
            }
            CheckRule::ReplicaLag => {
                let issues = check_replica_lag_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::ReplicaLag));
            }
            CheckRule::OrphanKey => {
                let issues = check_orphan_keys_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::OrphanKey));
            }
            CheckRule::TypeMismatch => {
                let issues = check_type_mismatch_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::TypeMismatch));
            }
        }
    }

    // Load failures are reported whatever rules were selected.
    all_issues.extend(
        ctx.message_parse_errors()
            .iter()
            .chain(ctx.source_read_errors())
            .map(|i| Issue::ParseError(i.clone())),
    );

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
        ctx.locale_files_checked,
        true,
    ))
}

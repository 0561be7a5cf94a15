use std::sync::Arc;

use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::cli::args::LookupArgs;
use crate::core::{Locale, Resolver, context::Project};
use crate::issues::{Issue, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    locale_files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        source_files_checked,
        locale_files_checked,
    }
}

/// Resolver for the lookup commands, in the requested locale or the
/// configured default one.
pub fn open_resolver(args: &LookupArgs) -> Result<Resolver> {
    let project = Project::load(&args.common)?;
    let catalog = project.open_catalog()?;
    let locale: Locale = args.locale.unwrap_or(project.config.default_locale);
    Ok(Resolver::new(Arc::new(catalog), locale))
}

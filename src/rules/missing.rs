//! Missing translation path detection rule.
//!
//! Detects `t()` / `ta()` call sites whose literal path does not exist in
//! one or more locales. Such a call renders the raw path (or nothing, for
//! lists) in those locales.

use crate::{
    core::{Catalog, CheckContext, KeyUsage, Locale},
    issues::MissingKeyIssue,
};

pub fn check_missing_keys_issues(ctx: &CheckContext) -> Vec<MissingKeyIssue> {
    check_missing_keys(ctx.key_usages(), &ctx.catalog, &ctx.available_locales())
}

/// Check call sites against every locale in `locales`.
///
/// A path that resolves to anything (even the wrong kind of node, or one
/// item of a list) counts as present; the accessor rule reports kind problems.
pub fn check_missing_keys(
    usages: &[KeyUsage],
    catalog: &Catalog,
    locales: &[Locale],
) -> Vec<MissingKeyIssue> {
    let mut issues: Vec<MissingKeyIssue> = usages
        .iter()
        .filter_map(|usage| {
            let missing_in: Vec<Locale> = locales
                .iter()
                .copied()
                .filter(|&locale| !catalog.contains(locale, &usage.key))
                .collect();

            if missing_in.is_empty() {
                None
            } else {
                Some(MissingKeyIssue {
                    context: usage.context.clone(),
                    key: usage.key.clone(),
                    accessor: usage.accessor,
                    missing_in,
                })
            }
        })
        .collect();

    issues.sort_by(|a, b| a.context.location.cmp(&b.context.location));
    issues
}

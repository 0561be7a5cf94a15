//! Orphan translation path detection rule.
//!
//! Detects leaves that exist in a replica locale but not in the primary
//! locale, usually left behind when copy was removed from the primary.

use crate::{
    core::{Catalog, CheckContext, DriftKind, ShapeDrift},
    issues::OrphanKeyIssue,
};

pub fn check_orphan_keys_issues(ctx: &CheckContext) -> Vec<OrphanKeyIssue> {
    check_orphan_keys(&ctx.catalog, ctx.shape_drift())
}

pub fn check_orphan_keys(catalog: &Catalog, drift: &[ShapeDrift]) -> Vec<OrphanKeyIssue> {
    let mut issues: Vec<OrphanKeyIssue> = drift
        .iter()
        .filter(|d| d.kind == DriftKind::Orphan)
        .filter_map(|d| {
            let entry = catalog.table(d.locale).get(&d.key)?;
            Some(OrphanKeyIssue {
                context: entry.context.clone(),
                locale: d.locale,
            })
        })
        .collect();

    // Sort by file path, then line for deterministic output
    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.context.key.cmp(&b.context.key))
    });

    issues
}

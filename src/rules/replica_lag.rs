//! Replica lag detection rule.
//!
//! Detects translation paths that exist in the primary locale but are
//! missing in one or more other locales.

use std::collections::BTreeMap;

use crate::{
    core::{Catalog, CheckContext, DriftKind, Locale, ShapeDrift},
    issues::ReplicaLagIssue,
    rules::helpers::{KeyUsageMap, build_key_usage_map, get_usages_for_key},
};

pub fn check_replica_lag_issues(ctx: &CheckContext) -> Vec<ReplicaLagIssue> {
    let key_usages = build_key_usage_map(ctx.key_usages());
    check_replica_lags(&ctx.catalog, ctx.shape_drift(), &key_usages)
}

/// One issue per primary leaf, listing every replica that lacks it.
pub fn check_replica_lags(
    catalog: &Catalog,
    drift: &[ShapeDrift],
    key_usages: &KeyUsageMap,
) -> Vec<ReplicaLagIssue> {
    let primary = catalog.primary_table();

    let mut missing: BTreeMap<&str, Vec<Locale>> = BTreeMap::new();
    for d in drift.iter().filter(|d| d.kind == DriftKind::Missing) {
        missing.entry(d.key.as_str()).or_default().push(d.locale);
    }

    let mut issues: Vec<ReplicaLagIssue> = missing
        .into_iter()
        .filter_map(|(key, mut missing_in)| {
            let entry = primary.get(key)?;
            missing_in.sort();
            missing_in.dedup();
            Some(ReplicaLagIssue {
                context: entry.context.clone(),
                primary_locale: catalog.primary(),
                missing_in,
                usages: get_usages_for_key(key_usages, key),
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

//! Accessor mismatch detection rule.
//!
//! `t()` must name a string leaf and `ta()` a list leaf. Anything else
//! resolves to the fallback in every locale, so the call can never show a
//! translation.

use crate::{
    core::{Accessor, Catalog, CheckContext, KeyUsage, Node},
    issues::AccessorMismatchIssue,
};

pub fn check_accessor_mismatch_issues(ctx: &CheckContext) -> Vec<AccessorMismatchIssue> {
    check_accessor_mismatches(ctx.key_usages(), &ctx.catalog)
}

/// Compare each call site's accessor with what the path holds in the
/// primary locale. Paths absent from the primary are left to the
/// missing-key rule.
pub fn check_accessor_mismatches(
    usages: &[KeyUsage],
    catalog: &Catalog,
) -> Vec<AccessorMismatchIssue> {
    let primary = catalog.primary();

    let mut issues: Vec<AccessorMismatchIssue> = usages
        .iter()
        .filter_map(|usage| {
            let Some(node) = catalog.lookup(primary, &usage.key) else {
                return list_item_read_as_list(usage, catalog);
            };
            if node.value_type() == Some(usage.accessor.expected_type()) {
                return None;
            }
            Some(AccessorMismatchIssue {
                context: usage.context.clone(),
                key: usage.key.clone(),
                accessor: usage.accessor,
                found: node.kind(),
                primary_locale: primary,
                hint: hint_for(&usage.key, node),
            })
        })
        .collect();

    issues.sort_by(|a, b| a.context.location.cmp(&b.context.location));
    issues
}

/// `ta()` over a single list item always falls back; `t()` reads it.
fn list_item_read_as_list(usage: &KeyUsage, catalog: &Catalog) -> Option<AccessorMismatchIssue> {
    let primary = catalog.primary();
    catalog.list_item(primary, &usage.key)?;
    (usage.accessor == Accessor::List).then(|| AccessorMismatchIssue {
        context: usage.context.clone(),
        key: usage.key.clone(),
        accessor: usage.accessor,
        found: "string",
        primary_locale: primary,
        hint: Some(format!("use {}(\"{}\")", Accessor::Scalar, usage.key)),
    })
}

fn hint_for(key: &str, node: &Node) -> Option<String> {
    match node {
        Node::Text(_) => Some(format!("use {}(\"{}\")", Accessor::Scalar, key)),
        Node::List(_) => Some(format!("use {}(\"{}\")", Accessor::List, key)),
        Node::Branch(branch) => {
            let (first, _) = branch.iter().next()?;
            Some(format!("'{}' is a group, e.g. '{}.{}'", key, key, first))
        }
    }
}

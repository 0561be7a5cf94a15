//! Type mismatch detection rule.
//!
//! Detects leaves whose value type differs between the primary and a
//! replica locale, e.g. a feature list in `fr` that is a single string in
//! `en`. The locale with the wrong type always falls back at that path.
//!
//! Issues point at the primary locale file, list the mismatched locales
//! with their file locations, and show where the path is used in code.

use std::collections::BTreeMap;

use crate::{
    core::{Catalog, CheckContext, DriftKind, LocaleTypeMismatch, ShapeDrift},
    issues::TypeMismatchIssue,
    rules::helpers::{KeyUsageMap, build_key_usage_map, get_usages_for_key},
};

pub fn check_type_mismatch_issues(ctx: &CheckContext) -> Vec<TypeMismatchIssue> {
    let key_usages = build_key_usage_map(ctx.key_usages());
    check_type_mismatches(&ctx.catalog, ctx.shape_drift(), &key_usages)
}

pub fn check_type_mismatches(
    catalog: &Catalog,
    drift: &[ShapeDrift],
    key_usages: &KeyUsageMap,
) -> Vec<TypeMismatchIssue> {
    let primary = catalog.primary_table();

    let mut mismatches: BTreeMap<&str, Vec<LocaleTypeMismatch>> = BTreeMap::new();
    for d in drift {
        let DriftKind::TypeMismatch { actual, .. } = d.kind else {
            continue;
        };
        let Some(entry) = catalog.table(d.locale).get(&d.key) else {
            continue;
        };
        mismatches
            .entry(d.key.as_str())
            .or_default()
            .push(LocaleTypeMismatch::new(
                d.locale,
                actual,
                entry.context.location.clone(),
            ));
    }

    let mut issues: Vec<TypeMismatchIssue> = mismatches
        .into_iter()
        .filter_map(|(key, mut mismatched_in)| {
            let entry = primary.get(key)?;
            mismatched_in.sort();
            Some(TypeMismatchIssue {
                context: entry.context.clone(),
                expected_type: entry.value_type,
                primary_locale: catalog.primary(),
                mismatched_in,
                usages: get_usages_for_key(key_usages, key),
            })
        })
        .collect();

    issues.sort_by(|a, b| a.context.location.cmp(&b.context.location));
    issues
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{Locale, ValueType};
    use crate::rules::helpers::catalog_from;

    #[test]
    fn test_same_types() {
        let table = r#"{"a": "x", "b": ["y"]}"#;
        let catalog = catalog_from(table, table);
        let issues = check_type_mismatches(&catalog, &catalog.shape_drift(), &KeyUsageMap::new());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_array_expected_string_found() {
        let catalog = catalog_from(
            r#"{"pricing": {"features": ["Export PNG", "3 couches"]}}"#,
            "{\n  \"pricing\": {\n    \"features\": \"PNG export\"\n  }\n}",
        );
        let issues = check_type_mismatches(&catalog, &catalog.shape_drift(), &KeyUsageMap::new());

        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.context.key, "pricing.features");
        assert_eq!(issue.context.file_path(), "messages/fr.json");
        assert_eq!(issue.expected_type, ValueType::StringArray);
        assert_eq!(issue.primary_locale, Locale::Fr);
        assert_eq!(issue.mismatched_in.len(), 1);
        assert_eq!(issue.mismatched_in[0].locale, Locale::En);
        assert_eq!(issue.mismatched_in[0].actual_type, ValueType::String);
        assert_eq!(issue.mismatched_in[0].location.line, 3);
    }
}

//! Helpers shared by rule implementations.

use std::collections::HashMap;

use crate::core::{KeyUsage, SourceLocation};

/// Lookup path -> every call site using it.
pub type KeyUsageMap = HashMap<String, Vec<SourceLocation>>;

/// Build a map from lookup path to its call sites, each list sorted by
/// file, line and column.
pub fn build_key_usage_map(usages: &[KeyUsage]) -> KeyUsageMap {
    let mut map: KeyUsageMap = HashMap::new();

    for usage in usages {
        map.entry(usage.key.clone())
            .or_default()
            .push(usage.context.location.clone());
    }

    for locations in map.values_mut() {
        locations.sort();
    }

    map
}

pub fn get_usages_for_key(key_usages: &KeyUsageMap, key: &str) -> Vec<SourceLocation> {
    key_usages.get(key).cloned().unwrap_or_default()
}

/// Catalog built from inline fr/en tables, primary fr.
#[cfg(test)]
pub(crate) fn catalog_from(fr: &str, en: &str) -> crate::core::Catalog {
    use crate::core::{AllLocaleMessages, Catalog, Locale, parsers::json::parse_messages};

    let mut messages = AllLocaleMessages::new();
    messages.insert(
        Locale::Fr,
        parse_messages(fr, Locale::Fr, "messages/fr.json").unwrap(),
    );
    messages.insert(
        Locale::En,
        parse_messages(en, Locale::En, "messages/en.json").unwrap(),
    );
    Catalog::from_messages(messages, Locale::Fr).unwrap()
}

/// Call site of `accessor(key)` at `file:line:col`.
#[cfg(test)]
pub(crate) fn key_usage(
    file: &str,
    line: usize,
    key: &str,
    accessor: crate::core::Accessor,
) -> KeyUsage {
    let source_line = format!("{}(\"{}\")", accessor, key);
    KeyUsage {
        context: crate::core::SourceContext::new(SourceLocation::new(file, line, 1), source_line),
        key: key.to_string(),
        accessor,
    }
}

//! Immutable set of per-locale translation tables.
//!
//! # Invariants
//!
//! 1. **Every locale present**: a `Catalog` holds one table for each
//!    [`Locale`]; construction fails with [`I18nError::MissingLocale`]
//!    otherwise, so lookups never need a "locale not loaded" case.
//!
//! 2. **Read-only**: tables are never mutated after construction, so a
//!    catalog can be shared across threads behind an `Arc`.
//!
//! 3. **Shape is checked, not assumed**: tables may disagree on which
//!    paths exist. [`Catalog::shape_drift`] lists the differences against
//!    the primary locale and [`Catalog::ensure_consistent`] turns any
//!    difference into an error for callers that want to fail fast.

use std::path::Path;

use anyhow::Result;

use super::parsers::json::{MessageScanWarning, parse_messages, scan_message_files};
use super::{AllLocaleMessages, I18nError, Locale, LocaleMessages, Node, ValueType};

const BUNDLED_TABLES: [(Locale, &str, &str); 2] = [
    (
        Locale::Fr,
        "messages/fr.json",
        include_str!("../../messages/fr.json"),
    ),
    (
        Locale::En,
        "messages/en.json",
        include_str!("../../messages/en.json"),
    ),
];

/// How a replica table differs from the primary at one path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DriftKind {
    /// Leaf exists in the primary but not in the replica.
    Missing,
    /// Leaf exists in the replica but not in the primary.
    Orphan,
    /// Leaf exists in both with different value types.
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShapeDrift {
    pub key: String,
    /// The replica locale the difference was found in.
    pub locale: Locale,
    pub kind: DriftKind,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Indexed by `Locale::index`.
    tables: Vec<LocaleMessages>,
    primary: Locale,
}

impl Catalog {
    /// The KartoMap site tables compiled into the binary.
    pub fn bundled() -> Result<Self> {
        let mut messages = AllLocaleMessages::new();
        for (locale, label, content) in BUNDLED_TABLES {
            messages.insert(locale, parse_messages(content, locale, label)?);
        }
        Ok(Self::from_messages(messages, Locale::default())?)
    }

    /// Load `<locale>.json` files from a directory.
    ///
    /// Unreadable or unsupported files come back as warnings; a supported
    /// locale without a usable file is an error.
    pub fn from_dir(
        dir: impl AsRef<Path>,
        primary: Locale,
    ) -> Result<(Self, Vec<MessageScanWarning>)> {
        let dir = dir.as_ref();
        let scanned = scan_message_files(dir)?;
        for warning in &scanned.warnings {
            tracing::warn!(file = %warning.file_path, error = %warning.error, "skipped message file");
        }
        let catalog = Self::from_messages(scanned.messages, primary)?;
        tracing::debug!(dir = %dir.display(), primary = %primary, "loaded catalog");
        Ok((catalog, scanned.warnings))
    }

    pub fn from_messages(
        mut messages: AllLocaleMessages,
        primary: Locale,
    ) -> Result<Self, I18nError> {
        let mut tables = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let table = messages
                .remove(&locale)
                .ok_or_else(|| I18nError::MissingLocale(locale.to_string()))?;
            tables.push(table);
        }
        Ok(Self { tables, primary })
    }

    /// Locale the other tables are compared against.
    pub fn primary(&self) -> Locale {
        self.primary
    }

    pub fn with_primary(mut self, primary: Locale) -> Self {
        self.primary = primary;
        self
    }

    pub fn table(&self, locale: Locale) -> &LocaleMessages {
        &self.tables[usize::from(locale.index())]
    }

    pub fn primary_table(&self) -> &LocaleMessages {
        self.table(self.primary)
    }

    /// Tables in locale order.
    pub fn tables(&self) -> impl Iterator<Item = &LocaleMessages> {
        self.tables.iter()
    }

    /// Non-primary tables.
    pub fn replicas(&self) -> impl Iterator<Item = &LocaleMessages> {
        let primary = self.primary;
        self.tables.iter().filter(move |t| t.locale != primary)
    }

    pub fn lookup(&self, locale: Locale, path: &str) -> Option<&Node> {
        self.table(locale).lookup(path)
    }

    pub fn list_item(&self, locale: Locale, path: &str) -> Option<&str> {
        self.table(locale).list_item(path)
    }

    /// Whether `path` names a node or a list item in `locale`.
    pub fn contains(&self, locale: Locale, path: &str) -> bool {
        self.lookup(locale, path).is_some() || self.list_item(locale, path).is_some()
    }

    /// Every path whose presence or type differs from the primary table,
    /// sorted by key then locale.
    pub fn shape_drift(&self) -> Vec<ShapeDrift> {
        let primary = self.primary_table();
        let mut drift = Vec::new();

        for replica in self.replicas() {
            for (key, entry) in &primary.entries {
                match replica.get(key) {
                    None => drift.push(ShapeDrift {
                        key: key.clone(),
                        locale: replica.locale,
                        kind: DriftKind::Missing,
                    }),
                    Some(other) if other.value_type != entry.value_type => {
                        drift.push(ShapeDrift {
                            key: key.clone(),
                            locale: replica.locale,
                            kind: DriftKind::TypeMismatch {
                                expected: entry.value_type,
                                actual: other.value_type,
                            },
                        })
                    }
                    Some(_) => {}
                }
            }
            for key in replica.keys() {
                if !primary.contains_key(key) {
                    drift.push(ShapeDrift {
                        key: key.clone(),
                        locale: replica.locale,
                        kind: DriftKind::Orphan,
                    });
                }
            }
        }

        drift.sort();
        drift
    }

    /// Fail when any table's shape differs from the primary's.
    pub fn ensure_consistent(&self) -> Result<(), I18nError> {
        let drift = self.shape_drift();
        match drift.first() {
            None => Ok(()),
            Some(first) => Err(I18nError::ShapeMismatch {
                count: drift.len(),
                first: first.key.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog(fr: &str, en: &str) -> Catalog {
        let mut messages = AllLocaleMessages::new();
        messages.insert(
            Locale::Fr,
            parse_messages(fr, Locale::Fr, "fr.json").unwrap(),
        );
        messages.insert(
            Locale::En,
            parse_messages(en, Locale::En, "en.json").unwrap(),
        );
        Catalog::from_messages(messages, Locale::Fr).unwrap()
    }

    #[test]
    fn test_bundled_loads_every_locale() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.primary(), Locale::Fr);
        for locale in Locale::ALL {
            assert_eq!(catalog.table(locale).locale, locale);
            assert!(!catalog.table(locale).is_empty());
        }
    }

    #[test]
    fn test_bundled_tables_share_shape() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.shape_drift(), Vec::new());
        assert!(catalog.ensure_consistent().is_ok());
    }

    #[test]
    fn test_missing_locale_rejected() {
        let mut messages = AllLocaleMessages::new();
        messages.insert(
            Locale::Fr,
            parse_messages(r#"{"a": "b"}"#, Locale::Fr, "fr.json").unwrap(),
        );
        let err = Catalog::from_messages(messages, Locale::Fr).unwrap_err();
        assert_eq!(err, I18nError::MissingLocale("en".to_string()));
    }

    #[test]
    fn test_shape_drift_kinds() {
        let catalog = catalog(
            r#"{"nav": {"login": "Se connecter", "cta": "Essayer"}, "items": ["a"]}"#,
            r#"{"nav": {"login": "Sign in", "extra": "Extra"}, "items": "a"}"#,
        );

        assert_eq!(
            catalog.shape_drift(),
            vec![
                ShapeDrift {
                    key: "items".to_string(),
                    locale: Locale::En,
                    kind: DriftKind::TypeMismatch {
                        expected: ValueType::StringArray,
                        actual: ValueType::String,
                    },
                },
                ShapeDrift {
                    key: "nav.cta".to_string(),
                    locale: Locale::En,
                    kind: DriftKind::Missing,
                },
                ShapeDrift {
                    key: "nav.extra".to_string(),
                    locale: Locale::En,
                    kind: DriftKind::Orphan,
                },
            ]
        );

        let err = catalog.ensure_consistent().unwrap_err();
        assert_eq!(
            err,
            I18nError::ShapeMismatch {
                count: 3,
                first: "items".to_string()
            }
        );
    }

    #[test]
    fn test_primary_swap_reverses_direction() {
        let catalog = catalog(r#"{"a": "A", "b": "B"}"#, r#"{"a": "A"}"#).with_primary(Locale::En);
        let drift = catalog.shape_drift();
        assert_eq!(drift.len(), 1);
        assert_eq!(drift[0].locale, Locale::Fr);
        assert_eq!(drift[0].kind, DriftKind::Orphan);
    }

    #[test]
    fn test_from_dir() {
        use std::fs;
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("fr.json"), r#"{"nav": {"login": "Se connecter"}}"#).unwrap();
        fs::write(dir.path().join("en.json"), r#"{"nav": {"login": "Sign in"}}"#).unwrap();

        let (catalog, warnings) = Catalog::from_dir(dir.path(), Locale::En).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(catalog.primary(), Locale::En);
        assert_eq!(
            catalog.lookup(Locale::Fr, "nav.login").and_then(Node::as_text),
            Some("Se connecter")
        );
    }

    #[test]
    fn test_from_dir_missing_locale_file() {
        use std::fs;
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("fr.json"), r#"{"a": "b"}"#).unwrap();

        let err = Catalog::from_dir(dir.path(), Locale::Fr).unwrap_err();
        assert_eq!(err.to_string(), "no messages for locale 'en'");
    }
}

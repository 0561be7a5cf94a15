use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use super::tree::{Branch, Node};
use crate::core::Locale;

/// Position information in message files (JSON).
///
/// Used for error reporting when tables disagree across locales.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path or label of the locale file (e.g., "./messages/en.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

/// Value type of a translation leaf.
///
/// 1. **String**: `"key": "value"`, read with `t("key")`.
/// 2. **StringArray**: `"key": ["a", "b"]`, read with `ta("key")`.
///
/// Reading a leaf with the other accessor always falls back (the path for
/// `t`, an empty list for `ta`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    String,
    StringArray,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::StringArray => write!(f, "array"),
        }
    }
}

/// A replica locale whose leaf type differs from the primary's.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocaleTypeMismatch {
    pub locale: Locale,
    pub actual_type: ValueType,
    pub location: MessageLocation,
}

impl LocaleTypeMismatch {
    pub fn new(locale: Locale, actual_type: ValueType, location: MessageLocation) -> Self {
        Self {
            locale,
            actual_type,
            location,
        }
    }
}

/// Key and display value at a location in a message file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// The lookup path (e.g., "pricing.pro.name").
    pub key: String,
    /// Display value; list items are joined with ", ".
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// A single leaf of a locale file, flattened for diagnostics.
#[derive(Debug, Clone)]
pub struct MessageEntry {
    pub context: MessageContext,
    pub value_type: ValueType,
}

/// One locale's table: the typed tree used for lookups plus a flat,
/// line-annotated index of its leaves used by the checker.
#[derive(Debug, Clone)]
pub struct LocaleMessages {
    pub locale: Locale,
    /// File path or label the table was read from.
    pub file_path: String,
    /// Root of the translation tree.
    pub root: Branch,
    /// All leaves, keyed by lookup path.
    pub entries: HashMap<String, MessageEntry>,
}

/// Tables for every loaded locale, in locale order.
pub type AllLocaleMessages = BTreeMap<Locale, LocaleMessages>;

impl LocaleMessages {
    pub fn new(locale: Locale, file_path: impl Into<String>) -> Self {
        Self {
            locale,
            file_path: file_path.into(),
            root: Branch::new(),
            entries: HashMap::new(),
        }
    }

    /// Walk the tree along a dot path.
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        self.root.lookup(path)
    }

    /// List item addressed by a trailing index segment.
    pub fn list_item(&self, path: &str) -> Option<&str> {
        self.root.list_item(path)
    }

    /// Get a flattened leaf entry by path.
    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use thiserror::Error;

/// Errors raised by the translation library.
///
/// Lookups never produce these: a missing path falls back to the path
/// itself (scalar) or to an empty list. They come from locale parsing,
/// table loading and the optional shape check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("unsupported locale '{0}' (expected one of: fr, en)")]
    UnsupportedLocale(String),

    #[error("no messages for locale '{0}'")]
    MissingLocale(String),

    #[error("unsupported value at '{path}' in locale '{locale}': expected string, array of strings or object, found {found}")]
    InvalidValue {
        locale: String,
        path: String,
        found: &'static str,
    },

    #[error("translation tables disagree on {count} key(s), first: '{first}' (run `karto check` for details)")]
    ShapeMismatch { count: usize, first: String },
}

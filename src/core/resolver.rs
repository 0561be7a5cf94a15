//! Translation resolver: dot-path lookups against the active locale.
//!
//! Lookups are fail-soft. A path that does not resolve to the requested
//! kind of leaf never raises:
//!
//! | Call | Path resolves to | Result |
//! |------|------------------|--------|
//! | `t`  | string           | the string |
//! | `t`  | anything else / nothing | the path itself |
//! | `ta` | list             | the list |
//! | `ta` | anything else / nothing | empty list |
//!
//! Returning the path from `t` keeps a missing translation visible on the
//! page instead of rendering nothing.

use std::sync::Arc;

use super::{Catalog, I18nError, Locale, LocaleCell, Node, SubscriptionId};

/// Resolves lookup paths against a shared catalog and an owned locale
/// cell.
///
/// Cloning is not offered: share a resolver behind an `Arc` so every
/// consumer observes the same active locale.
#[derive(Debug)]
pub struct Resolver {
    catalog: Arc<Catalog>,
    locale: LocaleCell,
}

impl Resolver {
    pub fn new(catalog: Arc<Catalog>, initial: Locale) -> Self {
        Self {
            catalog,
            locale: LocaleCell::new(initial),
        }
    }

    /// Resolver over the bundled site tables, starting in the default
    /// locale.
    pub fn bundled() -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(Catalog::bundled()?), Locale::default()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active locale.
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Switch the active locale. Lookups issued after this returns use
    /// the new locale; subscribers are notified if it changed.
    pub fn set_locale(&self, locale: Locale) {
        let previous = self.locale.set(locale);
        if previous != locale {
            tracing::info!(from = %previous, to = %locale, "switched locale");
        }
    }

    /// Switch using a free-form tag. An unsupported tag is rejected and
    /// the active locale is left unchanged.
    pub fn set_locale_code(&self, code: &str) -> Result<Locale, I18nError> {
        let locale = code.parse::<Locale>()?;
        self.set_locale(locale);
        Ok(locale)
    }

    /// Flip between the two supported locales, as the site's language
    /// switcher does. Returns the new locale.
    pub fn toggle_locale(&self) -> Locale {
        let next = self.locale().toggled();
        self.set_locale(next);
        next
    }

    pub fn subscribe(&self, callback: impl Fn(Locale) + Send + Sync + 'static) -> SubscriptionId {
        self.locale.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.locale.unsubscribe(id)
    }

    /// Scalar lookup in the active locale; falls back to `path`.
    pub fn t<'a>(&'a self, path: &'a str) -> &'a str {
        self.t_in(self.locale(), path)
    }

    /// List lookup in the active locale; falls back to an empty slice.
    pub fn ta<'a>(&'a self, path: &str) -> &'a [String] {
        self.ta_in(self.locale(), path)
    }

    /// Scalar lookup in an explicit locale. A trailing index segment picks
    /// one item of a list.
    pub fn t_in<'a>(&'a self, locale: Locale, path: &'a str) -> &'a str {
        let found = self.catalog.lookup(locale, path);
        if let Some(Node::Text(text)) = found {
            return text.as_str();
        }
        if found.is_none()
            && let Some(item) = self.catalog.list_item(locale, path)
        {
            return item;
        }
        tracing::debug!(
            path,
            locale = %locale,
            found = describe(found),
            "no string translation, falling back to path"
        );
        path
    }

    /// List lookup in an explicit locale.
    pub fn ta_in<'a>(&'a self, locale: Locale, path: &str) -> &'a [String] {
        match self.catalog.lookup(locale, path) {
            Some(Node::List(items)) => items.as_slice(),
            found => {
                tracing::debug!(
                    path,
                    locale = %locale,
                    found = describe(found),
                    "no list translation, falling back to empty"
                );
                &[]
            }
        }
    }
}

fn describe(node: Option<&Node>) -> &'static str {
    node.map_or("nothing", Node::kind)
}

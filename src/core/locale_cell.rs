//! Shared active-locale cell with change notification.
//!
//! # Invariants
//!
//! 1. **Visibility**: once [`LocaleCell::set`] returns, every [`LocaleCell::get`]
//!    on any thread observes the new locale (release store / acquire load).
//!
//! 2. **Notify after store**: subscribers run after the new value is
//!    visible, so a callback that reads the cell sees the locale it was
//!    called with. Store and notify happen under the subscriber lock, so
//!    concurrent setters are serialized and every subscriber receives the
//!    changes in store order.
//!
//! 3. **Only real changes notify**: setting the current locale again is a
//!    no-op for subscribers.
//!
//! Callbacks run synchronously on the setter's thread while the
//! subscriber list is locked; they must not call `set`, `subscribe`,
//! `unsubscribe` or `subscriber_count`.

use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicU8, AtomicU64, Ordering},
};

use super::Locale;

/// Handle returned by [`LocaleCell::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn Fn(Locale) + Send + Sync>;

pub struct LocaleCell {
    current: AtomicU8,
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(SubscriptionId, Callback)>>,
}

impl LocaleCell {
    pub fn new(initial: Locale) -> Self {
        Self {
            current: AtomicU8::new(initial.index()),
            next_id: AtomicU64::new(0),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn get(&self) -> Locale {
        // Only `set` writes, and it only stores valid indices.
        Locale::from_index(self.current.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Store `locale` and notify subscribers if it differs from the
    /// previous value. Returns the previous locale.
    pub fn set(&self, locale: Locale) -> Locale {
        let subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = self.current.swap(locale.index(), Ordering::AcqRel);
        let previous = Locale::from_index(previous).unwrap_or_default();
        if previous != locale {
            for (_, callback) in subscribers.iter() {
                callback(locale);
            }
        }
        previous
    }

    pub fn subscribe(&self, callback: impl Fn(Locale) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for LocaleCell {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl std::fmt::Debug for LocaleCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleCell")
            .field("current", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

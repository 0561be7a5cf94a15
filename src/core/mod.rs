//! Core translation engine.
//!
//! ## Module Structure
//!
//! - `locale`: the closed set of supported locales
//! - `data`: translation tree, message and source location types
//! - `parsers`: locale JSON tables and `t()` / `ta()` call sites
//! - `catalog`: immutable per-locale tables with shape-drift detection
//! - `locale_cell`: shared active locale with change notification
//! - `resolver`: fail-soft dot-path lookups against the active locale
//! - `file_scanner`: source file discovery for call-site audits
//! - `context`: everything a `check` run needs, loaded once

pub mod catalog;
pub mod context;
pub mod data;
pub mod error;
pub mod file_scanner;
pub mod locale;
pub mod locale_cell;
pub mod parsers;
pub mod resolver;

pub use catalog::{Catalog, DriftKind, ShapeDrift};
pub use context::CheckContext;
pub use data::*;
pub use error::I18nError;
pub use locale::Locale;
pub use locale_cell::{LocaleCell, SubscriptionId};
pub use resolver::Resolver;

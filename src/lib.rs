//! karto-i18n - translations for the KartoMap marketing site
//!
//! A fail-soft translation resolver over the site's French and English
//! tables, typed models of the page sections, and a checker that keeps the
//! tables and the `t()` / `ta()` call sites in agreement.
//!
//! ```
//! use karto_i18n::core::{Locale, Resolver};
//!
//! let resolver = Resolver::bundled()?;
//! assert_eq!(resolver.t("nav.login"), "Se connecter");
//! resolver.set_locale(Locale::En);
//! assert_eq!(resolver.t("nav.login"), "Sign in");
//! assert_eq!(resolver.t("does.not.exist"), "does.not.exist");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Locales, tables, resolver and the check context
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Checks over tables and call sites
//! - `sections`: Typed landing page sections

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod sections;

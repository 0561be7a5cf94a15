//! Typed models of the KartoMap landing page sections.
//!
//! Every section is read through a [`SectionReader`], which resolves
//! paths fail-soft like the page does and records each path it reads with
//! the value type it expects. That record is what the tests check against
//! every locale, so a section can't read a path the tables don't have
//! without a test noticing.
//!
//! ## Module Structure
//!
//! One module per section, in page order: `nav`, `hero`, `stats`,
//! `features`, `how_it_works`, `ecosystem`, `api`, `pricing`, `cta`,
//! `footer`, `map3d`.

use std::{cell::RefCell, fmt};

use clap::ValueEnum;

use crate::core::{Locale, Resolver, ValueType};

pub mod api;
pub mod cta;
pub mod ecosystem;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod map3d;
pub mod nav;
pub mod pricing;
pub mod stats;

pub use api::Api;
pub use cta::Cta;
pub use ecosystem::Ecosystem;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use map3d::Map3d;
pub use nav::Nav;
pub use pricing::Pricing;
pub use stats::Stats;

/// Resolves the paths a section reads in one locale, and records them.
pub struct SectionReader<'a> {
    resolver: &'a Resolver,
    locale: Locale,
    reads: RefCell<Vec<(String, ValueType)>>,
}

impl<'a> SectionReader<'a> {
    pub fn new(resolver: &'a Resolver, locale: Locale) -> Self {
        Self {
            resolver,
            locale,
            reads: RefCell::new(Vec::new()),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Scalar at `path`, or the path itself.
    pub fn text(&self, path: &str) -> String {
        self.record(path, ValueType::String);
        self.resolver.t_in(self.locale, path).to_string()
    }

    /// List at `path`, or an empty list.
    pub fn list(&self, path: &str) -> Vec<String> {
        self.record(path, ValueType::StringArray);
        self.resolver.ta_in(self.locale, path).to_vec()
    }

    /// Paths read so far, in read order, without repeats.
    pub fn into_reads(self) -> Vec<(String, ValueType)> {
        self.reads.into_inner()
    }

    fn record(&self, path: &str, value_type: ValueType) {
        let mut reads = self.reads.borrow_mut();
        if !reads.iter().any(|(p, _)| p == path) {
            reads.push((path.to_string(), value_type));
        }
    }
}

/// A page section built from translations.
pub trait Section: fmt::Display + Sized {
    fn read(reader: &SectionReader<'_>) -> Self;

    /// Build the section in `locale`.
    fn load(resolver: &Resolver, locale: Locale) -> Self {
        Self::read(&SectionReader::new(resolver, locale))
    }

    /// Every path the section reads, with its expected value type.
    fn paths(resolver: &Resolver) -> Vec<(String, ValueType)> {
        let reader = SectionReader::new(resolver, resolver.locale());
        Self::read(&reader);
        reader.into_reads()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionName {
    Nav,
    Hero,
    Stats,
    Features,
    HowItWorks,
    Ecosystem,
    Api,
    Pricing,
    Cta,
    Footer,
    #[value(name = "map3d")]
    Map3d,
}

impl SectionName {
    /// Sections in page order.
    pub const ALL: [SectionName; 11] = [
        SectionName::Nav,
        SectionName::Hero,
        SectionName::Stats,
        SectionName::Features,
        SectionName::HowItWorks,
        SectionName::Ecosystem,
        SectionName::Api,
        SectionName::Pricing,
        SectionName::Cta,
        SectionName::Footer,
        SectionName::Map3d,
    ];

    /// Section rendered as plain text in `locale`.
    pub fn render(self, resolver: &Resolver, locale: Locale) -> String {
        match self {
            SectionName::Nav => Nav::load(resolver, locale).to_string(),
            SectionName::Hero => Hero::load(resolver, locale).to_string(),
            SectionName::Stats => Stats::load(resolver, locale).to_string(),
            SectionName::Features => Features::load(resolver, locale).to_string(),
            SectionName::HowItWorks => HowItWorks::load(resolver, locale).to_string(),
            SectionName::Ecosystem => Ecosystem::load(resolver, locale).to_string(),
            SectionName::Api => Api::load(resolver, locale).to_string(),
            SectionName::Pricing => Pricing::load(resolver, locale).to_string(),
            SectionName::Cta => Cta::load(resolver, locale).to_string(),
            SectionName::Footer => Footer::load(resolver, locale).to_string(),
            SectionName::Map3d => Map3d::load(resolver, locale).to_string(),
        }
    }

    pub fn paths(self, resolver: &Resolver) -> Vec<(String, ValueType)> {
        match self {
            SectionName::Nav => Nav::paths(resolver),
            SectionName::Hero => Hero::paths(resolver),
            SectionName::Stats => Stats::paths(resolver),
            SectionName::Features => Features::paths(resolver),
            SectionName::HowItWorks => HowItWorks::paths(resolver),
            SectionName::Ecosystem => Ecosystem::paths(resolver),
            SectionName::Api => Api::paths(resolver),
            SectionName::Pricing => Pricing::paths(resolver),
            SectionName::Cta => Cta::paths(resolver),
            SectionName::Footer => Footer::paths(resolver),
            SectionName::Map3d => Map3d::paths(resolver),
        }
    }
}

/// Title block shared by most sections: eyebrow label, title, subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub label: String,
    pub title: String,
    pub subtitle: Option<String>,
}

impl Heading {
    pub fn read(reader: &SectionReader<'_>, prefix: &str, with_subtitle: bool) -> Self {
        Self {
            label: reader.text(&format!("{}.label", prefix)),
            title: reader.text(&format!("{}.title", prefix)),
            subtitle: with_subtitle.then(|| reader.text(&format!("{}.subtitle", prefix))),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.label)?;
        writeln!(f, "{}", self.title)?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(f, "{}", subtitle)?;
        }
        Ok(())
    }
}

/// Title and description pair used by cards and steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub desc: String,
}

impl Card {
    pub fn read(reader: &SectionReader<'_>, prefix: &str) -> Self {
        Self {
            title: reader.text(&format!("{}.title", prefix)),
            desc: reader.text(&format!("{}.desc", prefix)),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}", self.title)?;
        writeln!(f, "  {}", self.desc)
    }
}

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::error::I18nError;

/// A supported site locale.
///
/// The set is closed: a tag outside it cannot be represented, so any
/// `Locale` value handed to the resolver is valid by construction.
/// Free-form tags go through [`Locale::from_str`], which rejects
/// unsupported ones.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// French, the site's default.
    #[default]
    Fr,
    /// English.
    En,
}

impl Locale {
    /// Every supported locale, in declaration order.
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    /// Lowercase tag, also used as the message file stem (`fr.json`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// Name of the language in itself, as shown by the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Fr => "Français",
            Locale::En => "English",
        }
    }

    pub(crate) fn index(self) -> u8 {
        match self {
            Locale::Fr => 0,
            Locale::En => 1,
        }
    }

    pub(crate) fn from_index(index: u8) -> Option<Locale> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The other locale, for a two-state toggle.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::Fr => Locale::En,
            Locale::En => Locale::Fr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    /// Parses a tag case-insensitively. Region subtags are not accepted:
    /// `en-US` is a different, unsupported tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(tag))
            .ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

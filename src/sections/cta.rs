use std::fmt;

use super::{Section, SectionReader};

/// Closing call to action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cta {
    pub title: String,
    pub subtitle: String,
    pub primary: String,
    pub secondary: String,
}

impl Section for Cta {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            title: reader.text("cta.title"),
            subtitle: reader.text("cta.subtitle"),
            primary: reader.text("cta.primary"),
            secondary: reader.text("cta.secondary"),
        }
    }
}

impl fmt::Display for Cta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f, "> {}  > {}", self.primary, self.secondary)
    }
}

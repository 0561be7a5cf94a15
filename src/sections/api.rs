use std::fmt;

use super::{Card, Heading, Section, SectionReader};

/// Open API cards and the sample request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Api {
    pub heading: Heading,
    pub cards: Vec<Card>,
    pub code_comment: String,
    /// Already quoted, as it appears in the sample.
    pub code_name: String,
}

impl Section for Api {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            heading: Heading::read(reader, "api", true),
            cards: ["input", "connectors", "output"]
                .iter()
                .map(|card| Card::read(reader, &format!("api.{}", card)))
                .collect(),
            code_comment: reader.text("api.codeComment"),
            code_name: reader.text("api.codeName"),
        }
    }
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.code_comment)?;
        writeln!(f, "await kartomap.layers.create({{")?;
        writeln!(f, "  name: {},", self.code_name)?;
        writeln!(f, "}})")
    }
}

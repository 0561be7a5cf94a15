use std::fmt;

use super::{Card, Heading, Section, SectionReader};

const CARDS: [&str; 6] = [
    "layers",
    "basemaps",
    "tables",
    "customize",
    "collaborative",
    "rights",
];

/// Feature grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    pub heading: Heading,
    pub cards: Vec<Card>,
}

impl Section for Features {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            heading: Heading::read(reader, "features", true),
            cards: CARDS
                .iter()
                .map(|card| Card::read(reader, &format!("features.{}", card)))
                .collect(),
        }
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

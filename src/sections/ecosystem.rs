use std::fmt;

use super::{Card, Heading, Section, SectionReader};

const AUDIENCES: [&str; 3] = ["businesses", "citizens", "communities"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audience {
    pub card: Card,
    pub items: Vec<String>,
}

/// One column per audience, each with its bullet items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ecosystem {
    pub heading: Heading,
    pub audiences: Vec<Audience>,
    pub learn_more: String,
}

impl Section for Ecosystem {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            heading: Heading::read(reader, "ecosystem", true),
            audiences: AUDIENCES
                .iter()
                .map(|audience| {
                    let prefix = format!("ecosystem.{}", audience);
                    Audience {
                        card: Card::read(reader, &prefix),
                        items: reader.list(&format!("{}.items", prefix)),
                    }
                })
                .collect(),
            learn_more: reader.text("ecosystem.learnMore"),
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for audience in &self.audiences {
            write!(f, "{}", audience.card)?;
            for item in &audience.items {
                writeln!(f, "    * {}", item)?;
            }
            writeln!(f, "  {} ->", self.learn_more)?;
        }
        Ok(())
    }
}

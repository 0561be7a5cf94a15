use std::fmt;

use super::{Card, Heading, Section, SectionReader};

/// Three numbered steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HowItWorks {
    pub heading: Heading,
    pub steps: Vec<Card>,
}

impl Section for HowItWorks {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            heading: Heading::read(reader, "howItWorks", false),
            steps: (1..=3)
                .map(|n| Card::read(reader, &format!("howItWorks.step{}", n)))
                .collect(),
        }
    }
}

impl fmt::Display for HowItWorks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{:02}. {}", i + 1, step.title)?;
            writeln!(f, "    {}", step.desc)?;
        }
        Ok(())
    }
}

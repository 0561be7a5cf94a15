use std::fmt;

use super::{Section, SectionReader};

/// Figures are the same in every locale; only labels are translated.
const FIGURES: [(&str, &str); 4] = [
    ("500+", "stats.orgs"),
    ("2M+", "stats.dataPoints"),
    ("50+", "stats.connectors"),
    ("99.9%", "stats.uptime"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: String,
}

/// Band of headline figures under the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub stats: Vec<Stat>,
}

impl Section for Stats {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            stats: FIGURES
                .iter()
                .map(|&(value, path)| Stat {
                    value,
                    label: reader.text(path),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stat in &self.stats {
            writeln!(f, "{:>6}  {}", stat.value, stat.label)?;
        }
        Ok(())
    }
}

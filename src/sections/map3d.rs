use std::fmt;

use super::{Section, SectionReader};

const PIN_COUNT: usize = 7;
const BADGE_COUNT: usize = 5;

/// A data point on the hero's 3D map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    pub label: String,
    pub desc: String,
    pub value: String,
}

/// Copy shown on the interactive 3D map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map3d {
    pub pins: Vec<Pin>,
    pub click_label: String,
    pub data_label: String,
    pub badges: Vec<String>,
}

impl Section for Map3d {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            pins: (1..=PIN_COUNT)
                .map(|n| {
                    let path = |field: &str| format!("map3d.pin{}.{}", n, field);
                    Pin {
                        label: reader.text(&path("label")),
                        desc: reader.text(&path("desc")),
                        value: reader.text(&path("value")),
                    }
                })
                .collect(),
            click_label: reader.text("map3d.clickLabel"),
            data_label: reader.text("map3d.dataLabel"),
            badges: (1..=BADGE_COUNT)
                .map(|n| reader.text(&format!("map3d.badge{}", n)))
                .collect(),
        }
    }
}

impl fmt::Display for Map3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pin in &self.pins {
            writeln!(f, "- {} ({}: {})", pin.label, self.data_label, pin.value)?;
            writeln!(f, "  {}", pin.desc)?;
        }
        writeln!(f, "[{}]", self.click_label)?;
        writeln!(f, "{}", self.badges.join(" · "))
    }
}

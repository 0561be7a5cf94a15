use std::fmt;

use super::{Section, SectionReader};

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    /// Anchor links in page order.
    pub links: Vec<String>,
    pub login: String,
    pub cta: String,
    pub open_menu: String,
    pub close_menu: String,
}

impl Section for Nav {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            links: ["features", "ecosystem", "api", "pricing"]
                .iter()
                .map(|key| reader.text(&format!("nav.{}", key)))
                .collect(),
            login: reader.text("nav.login"),
            cta: reader.text("nav.cta"),
            open_menu: reader.text("nav.openMenu"),
            close_menu: reader.text("nav.closeMenu"),
        }
    }
}

impl fmt::Display for Nav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.links.join(" | "))?;
        writeln!(f, "{} / {}", self.login, self.cta)?;
        writeln!(f, "menu: {} / {}", self.open_menu, self.close_menu)
    }
}

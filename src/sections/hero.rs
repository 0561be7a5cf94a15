use std::fmt;

use super::{Section, SectionReader};

/// Number of organizations shown next to the trust line.
const TRUST_COUNT: &str = "500+";

/// Landing hero above the 3D map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub badge: String,
    /// Title split around the highlighted words.
    pub title: [String; 3],
    pub subtitle: String,
    pub pills: Vec<String>,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub trust_orgs: String,
    pub scroll_hint: String,
    pub click_hint: String,
}

impl Section for Hero {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            badge: reader.text("hero.badge"),
            title: [
                reader.text("hero.titleStart"),
                reader.text("hero.titleHighlight"),
                reader.text("hero.titleEnd"),
            ],
            subtitle: reader.text("hero.subtitle"),
            pills: ["pillLayers", "pillApi", "pillCollab"]
                .iter()
                .map(|key| reader.text(&format!("hero.{}", key)))
                .collect(),
            cta_primary: reader.text("hero.ctaPrimary"),
            cta_secondary: reader.text("hero.ctaSecondary"),
            trust_orgs: reader.text("hero.trustOrgs"),
            scroll_hint: reader.text("hero.scrollHint"),
            click_hint: reader.text("hero.clickHint"),
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [start, highlight, end] = &self.title;
        writeln!(f, "[{}]", self.badge)?;
        writeln!(f, "{} *{}* {}", start, highlight, end)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f, "{}", self.pills.join(" · "))?;
        writeln!(f, "> {}  > {}", self.cta_primary, self.cta_secondary)?;
        writeln!(f, "{} {}", TRUST_COUNT, self.trust_orgs)?;
        writeln!(f, "{} / {}", self.scroll_hint, self.click_hint)
    }
}

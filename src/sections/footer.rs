use std::fmt;

use super::{Section, SectionReader};

/// Link columns: title key, then link keys, all under `footer.`.
const COLUMNS: [(&str, [&str; 4]); 4] = [
    ("product", ["features", "apiLink", "pricingLink", "changelog"]),
    (
        "solutions",
        ["businesses", "municipalities", "communities", "education"],
    ),
    ("resources", ["docs", "tutorials", "blog", "support"]),
    ("company", ["about", "careers", "contact", "legal"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub description: String,
    pub columns: Vec<LinkColumn>,
    pub copyright: String,
    /// Privacy, terms, cookies.
    pub legal_links: Vec<String>,
}

impl Section for Footer {
    fn read(reader: &SectionReader<'_>) -> Self {
        let text = |key: &str| reader.text(&format!("footer.{}", key));
        Self {
            description: text("description"),
            columns: COLUMNS
                .iter()
                .map(|&(title, links)| LinkColumn {
                    title: text(title),
                    links: links.iter().map(|&link| text(link)).collect(),
                })
                .collect(),
            copyright: text("copyright"),
            legal_links: ["privacy", "terms", "cookies"]
                .iter()
                .map(|&key| text(key))
                .collect(),
        }
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        for column in &self.columns {
            writeln!(f, "{}: {}", column.title, column.links.join(", "))?;
        }
        writeln!(f, "© {}", self.copyright)?;
        writeln!(f, "{}", self.legal_links.join(" | "))
    }
}

use std::fmt;

use super::{Heading, Section, SectionReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    Discovery,
    Pro,
    Enterprise,
}

impl PlanKind {
    pub const ALL: [PlanKind; 3] = [PlanKind::Discovery, PlanKind::Pro, PlanKind::Enterprise];

    fn key(self) -> &'static str {
        match self {
            PlanKind::Discovery => "discovery",
            PlanKind::Pro => "pro",
            PlanKind::Enterprise => "enterprise",
        }
    }

    /// Only the pro plan is shown with a price period and the popular badge.
    fn is_highlighted(self) -> bool {
        self == PlanKind::Pro
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub kind: PlanKind,
    pub name: String,
    pub price: String,
    /// Billing period, e.g. "/mo"; present for highlighted plans only.
    pub price_detail: Option<String>,
    pub desc: String,
    pub features: Vec<String>,
    pub cta: String,
}

impl Plan {
    fn read(reader: &SectionReader<'_>, kind: PlanKind) -> Self {
        let path = |field: &str| format!("pricing.{}.{}", kind.key(), field);
        Self {
            kind,
            name: reader.text(&path("name")),
            price: reader.text(&path("price")),
            price_detail: kind
                .is_highlighted()
                .then(|| reader.text(&path("priceDetail"))),
            desc: reader.text(&path("desc")),
            features: reader.list(&path("features")),
            cta: reader.text(&path("cta")),
        }
    }
}

/// Plan comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pricing {
    pub heading: Heading,
    pub popular: String,
    pub plans: Vec<Plan>,
}

impl Pricing {
    pub fn plan(&self, kind: PlanKind) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.kind == kind)
    }
}

impl Section for Pricing {
    fn read(reader: &SectionReader<'_>) -> Self {
        Self {
            heading: Heading::read(reader, "pricing", true),
            popular: reader.text("pricing.popular"),
            plans: PlanKind::ALL
                .iter()
                .map(|&kind| Plan::read(reader, kind))
                .collect(),
        }
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for plan in &self.plans {
            if plan.kind.is_highlighted() {
                writeln!(f, "- {} ({})", plan.name, self.popular)?;
            } else {
                writeln!(f, "- {}", plan.name)?;
            }
            match &plan.price_detail {
                Some(detail) => writeln!(f, "  {}€{}", plan.price, detail)?,
                None => writeln!(f, "  {}", plan.price)?,
            }
            writeln!(f, "  {}", plan.desc)?;
            for feature in &plan.features {
                writeln!(f, "    * {}", feature)?;
            }
            writeln!(f, "  > {}", plan.cta)?;
        }
        Ok(())
    }
}

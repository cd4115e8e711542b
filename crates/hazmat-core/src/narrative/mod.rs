//! Findings and recommendation text.
//!
//! Every composer is a pure function over the aggregated rows and folded
//! flags. Each falls through to a fixed default pair, so every category always
//! yields text. Markup is limited to the inline list fragments the report
//! templates expect (`<ul>`, `<li>`, `<strong>`, `<i>`, `<br>`).

pub mod biological;
pub mod boilerplate;
pub mod designated;
pub mod equipment;
pub mod mercury;

use crate::aggregate::Aggregates;
use crate::model::Area;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use boilerplate::{AssessmentResponse, Boilerplate, ChecklistItem};
pub use mercury::{AreaMercuryRecommendation, LampThreshold};

pub const NO_ACTION_REQUIRED: &str = "No Action Required";

/// The ten rows of the report's summary table, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeCategory {
    Asbestos,
    Lead,
    Mercury,
    Silica,
    OtherDesignatedSubstances,
    Uffi,
    Mould,
    PestInfestation,
    Pcb,
    OdsGws,
}

impl NarrativeCategory {
    pub const ALL: [NarrativeCategory; 10] = [
        NarrativeCategory::Asbestos,
        NarrativeCategory::Lead,
        NarrativeCategory::Mercury,
        NarrativeCategory::Silica,
        NarrativeCategory::OtherDesignatedSubstances,
        NarrativeCategory::Uffi,
        NarrativeCategory::Mould,
        NarrativeCategory::PestInfestation,
        NarrativeCategory::Pcb,
        NarrativeCategory::OdsGws,
    ];

    /// Substance column text.
    pub fn as_str(&self) -> &'static str {
        match self {
            NarrativeCategory::Asbestos => "Asbestos",
            NarrativeCategory::Lead => "Lead",
            NarrativeCategory::Mercury => "Mercury",
            NarrativeCategory::Silica => "Silica",
            NarrativeCategory::OtherDesignatedSubstances => "Other Designated Substances",
            NarrativeCategory::Uffi => "Urea Formaldehyde Foam Insulation (UFFI)",
            NarrativeCategory::Mould => "Mould Contamination",
            NarrativeCategory::PestInfestation => "Pest Infestation",
            NarrativeCategory::Pcb => "Polychlorinated Biphenyls (PCB)",
            NarrativeCategory::OdsGws => "Ozone Depleting and Global Warming Substances (ODS/GWS)",
        }
    }
}

impl fmt::Display for NarrativeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Findings and recommendations for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeBlock {
    pub category: NarrativeCategory,
    pub substance: &'static str,
    pub findings: String,
    pub recommendations: String,
}

impl NarrativeBlock {
    pub fn new(
        category: NarrativeCategory,
        findings: impl Into<String>,
        recommendations: impl Into<String>,
    ) -> Self {
        Self {
            category,
            substance: category.as_str(),
            findings: findings.into(),
            recommendations: recommendations.into(),
        }
    }

    pub fn requires_action(&self) -> bool {
        self.recommendations != NO_ACTION_REQUIRED
    }
}

/// Everything the composers read.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeContext<'a> {
    pub areas: &'a [Area],
    pub aggregates: &'a Aggregates,
    /// Organisation named in the lamp recycling recommendation.
    pub organization: &'a str,
    /// First area's project type, else "Project".
    pub project_type: &'a str,
    pub photo_count: usize,
}

impl<'a> NarrativeContext<'a> {
    pub fn primary(&self) -> Option<&'a Area> {
        self.areas.first()
    }
}

/// Composed text for the whole report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Narratives {
    pub summary_table: Vec<NarrativeBlock>,
    pub other_hazardous_materials_recommendations: String,
    pub area_mercury_recommendations: Vec<AreaMercuryRecommendation>,
    pub mercury_equipment_removal_recommendation: Option<String>,
    #[serde(flatten)]
    pub boilerplate: Boilerplate,
}

impl Narratives {
    pub fn block(&self, category: NarrativeCategory) -> Option<&NarrativeBlock> {
        self.summary_table.iter().find(|b| b.category == category)
    }
}

pub fn compose(ctx: &NarrativeContext<'_>) -> Narratives {
    let summary_table: Vec<NarrativeBlock> = NarrativeCategory::ALL
        .iter()
        .map(|&category| block_for(category, ctx))
        .collect();

    let other_hazardous_materials_recommendations = other_hazardous_recommendations(ctx);
    let actionable = summary_table.iter().filter(|b| b.requires_action()).count();
    tracing::debug!(actionable, "narratives composed");

    Narratives {
        summary_table,
        other_hazardous_materials_recommendations,
        area_mercury_recommendations: mercury::area_recommendations(ctx),
        mercury_equipment_removal_recommendation: mercury::equipment_removal(ctx),
        boilerplate: boilerplate::compose(ctx),
    }
}

pub fn block_for(category: NarrativeCategory, ctx: &NarrativeContext<'_>) -> NarrativeBlock {
    let agg = ctx.aggregates;
    match category {
        NarrativeCategory::Asbestos => designated::asbestos(agg),
        NarrativeCategory::Lead => designated::lead(agg),
        NarrativeCategory::Mercury => designated::mercury(ctx),
        NarrativeCategory::Silica => designated::silica(agg),
        NarrativeCategory::OtherDesignatedSubstances => designated::other_designated(),
        NarrativeCategory::Uffi => designated::uffi(),
        NarrativeCategory::Mould => biological::mould(agg),
        NarrativeCategory::PestInfestation => biological::pest(&agg.pest),
        NarrativeCategory::Pcb => equipment::pcb(&agg.pcb),
        NarrativeCategory::OdsGws => equipment::ods(&agg.ods),
    }
}

/// Pest, PCB and ODS recommendations under bold headings, or the default.
pub fn other_hazardous_recommendations(ctx: &NarrativeContext<'_>) -> String {
    let agg = ctx.aggregates;
    let parts: Vec<String> = [
        ("Pest Infestation", biological::pest(&agg.pest)),
        ("Polychlorinated Biphenyls", equipment::pcb(&agg.pcb)),
        (
            "Ozone Depleting and Global Warming Substances",
            equipment::ods(&agg.ods),
        ),
    ]
    .into_iter()
    .filter(|(_, block)| block.requires_action())
    .map(|(heading, block)| format!("<strong>{heading}:</strong> {}", block.recommendations))
    .collect();

    if parts.is_empty() {
        NO_ACTION_REQUIRED.to_string()
    } else {
        parts.join("<br><br>")
    }
}

/// `<ul><li>..</li></ul>` over `items`.
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        out.push_str("<li>");
        out.push_str(item.as_ref());
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

/// Like [`bullet_list`], with a single "N/A" item when `items` is empty.
pub fn bullet_list_or_na<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        bullet_list(&["N/A"])
    } else {
        bullet_list(items)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::Fixture;
    use super::*;
    use crate::aggregate::test_support::area;
    use serde_json::json;

    #[test]
    fn test_summary_table_order() {
        let fx = Fixture::new(vec![]);
        let narratives = compose(&fx.ctx());
        let substances: Vec<&str> = narratives.summary_table.iter().map(|b| b.substance).collect();
        assert_eq!(substances.len(), 10);
        assert_eq!(substances[0], "Asbestos");
        assert_eq!(substances[5], "Urea Formaldehyde Foam Insulation (UFFI)");
        assert_eq!(
            substances[9],
            "Ozone Depleting and Global Warming Substances (ODS/GWS)"
        );
    }

    #[test]
    fn test_bullet_lists() {
        assert_eq!(bullet_list(&["a", "b"]), "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(bullet_list_or_na::<&str>(&[]), "<ul><li>N/A</li></ul>");
    }

    #[test]
    fn test_other_hazardous_default() {
        let fx = Fixture::new(vec![area(json!({"name": "Office"}))]);
        assert_eq!(other_hazardous_recommendations(&fx.ctx()), NO_ACTION_REQUIRED);
    }

    #[test]
    fn test_other_hazardous_joins_parts() {
        let fx = Fixture::new(vec![area(json!({
            "name": "Basement",
            "infestationTypeSelect": ["Mouse"],
            "pcbObserved": "Yes"
        }))]);
        let text = other_hazardous_recommendations(&fx.ctx());
        let parts: Vec<&str> = text.split("<br><br>").collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with(
            "<strong>Pest Infestation:</strong> Precautions should be taken to minimize worker exposure when disturbing/removing Mouse."
        ));
        assert!(parts[1].starts_with(
            "<strong>Polychlorinated Biphenyls:</strong> PCB-containing ballasts should be removed"
        ));
    }
}

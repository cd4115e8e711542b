//! Appendix and sample tables.
//!
//! Unlike the consolidated tables these keep one row per material
//! occurrence, so per-area detail survives.

pub mod occurrences;
pub mod samples;
pub mod sections;

use crate::model::Area;
use crate::schema::FormSchema;
use serde::Serialize;

pub use occurrences::{occurrence_summary, OccurrenceRow, QuantityUnit};
pub use samples::{
    asbestos_lab_samples, asbestos_samples, lead_lab_samples, lead_samples, AsbestosLabSample,
    AsbestosSample, LeadLabSample, LeadSample, LeadSamples,
};
pub use sections::{area_sections, AreaPcbEquipment, AreaSection};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appendices {
    /// Table 2.
    pub asbestos_samples: Vec<AsbestosSample>,
    /// Table 4 and the lead band lists.
    #[serde(flatten)]
    pub lead: LeadSamples,
    #[serde(rename = "appendixASummaryTable")]
    pub appendix_a: Vec<OccurrenceRow>,
    #[serde(rename = "appendixCAsbestos")]
    pub appendix_c: Vec<AsbestosLabSample>,
    #[serde(rename = "appendixDLead")]
    pub appendix_d: Vec<LeadLabSample>,
    pub area_sections: Vec<AreaSection>,
}

pub fn build(areas: &[Area], schema: Option<&FormSchema>) -> Appendices {
    let appendices = Appendices {
        asbestos_samples: asbestos_samples(areas),
        lead: lead_samples(areas),
        appendix_a: occurrence_summary(areas),
        appendix_c: asbestos_lab_samples(areas),
        appendix_d: lead_lab_samples(areas),
        area_sections: area_sections(schema, areas),
    };
    tracing::debug!(
        occurrences = appendices.appendix_a.len(),
        asbestos_lab = appendices.appendix_c.len(),
        lead_lab = appendices.appendix_d.len(),
        sections = appendices.area_sections.len(),
        "appendices built"
    );
    appendices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::area;
    use serde_json::json;

    #[test]
    fn test_output_keys() {
        let areas = vec![area(json!({
            "name": "Lobby",
            "asbestosMaterials": [{"materialType": "Plaster", "sampleCollected": "Yes"}],
            "leadMaterials": [{"percentageLead": "0.5"}]
        }))];
        let json = serde_json::to_value(build(&areas, None)).unwrap();
        assert_eq!(json["appendixASummaryTable"][0]["material"], "Plaster");
        assert_eq!(json["appendixCAsbestos"][0]["sampleNo"], "Lobby-A1");
        assert_eq!(json["highLevelLeadSamples"].as_array().unwrap().len(), 1);
        assert_eq!(json["leadSamples"][0]["materialClassification"], "LCP");
        assert!(json["areaSections"].as_array().unwrap().is_empty());
    }
}

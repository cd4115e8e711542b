use super::{bullet_list, NarrativeBlock, NarrativeCategory, NO_ACTION_REQUIRED};
use crate::aggregate::{Aggregates, PestSummary};

const NO_MOULD: &str =
    "No suspect mould contamination was observed on building finishes in the subject area.";
const MOULD_ABATEMENT: &str = "Mould-impacted building materials should be removed in accordance with the EACC Mould Abatement Guidelines (2015). Refer to Section 3.2.2.1 (Mould Contamination) and Table 6 (Mould Contamination).";

const NO_PESTS: &str = "No pest infestations were observed in the areas assessed.";

pub fn mould(agg: &Aggregates) -> NarrativeBlock {
    let flags = &agg.flags;
    if agg.mould_rows.is_empty() && !flags.mould_growth_observed {
        return NarrativeBlock::new(NarrativeCategory::Mould, NO_MOULD, NO_ACTION_REQUIRED);
    }

    let mut findings = if agg.mould_rows.is_empty() {
        "Suspect mould growth was observed in the subject area.".to_string()
    } else {
        let materials: Vec<&str> = agg.mould_rows.iter().map(|r| r.material.as_str()).collect();
        format!(
            "Suspect mould contamination was observed on the following building materials:{}",
            bullet_list(&materials)
        )
    };
    if !flags.mould_areas.is_empty() {
        findings.push_str(&format!(" Affected areas: {}.", flags.mould_areas));
    }
    NarrativeBlock::new(NarrativeCategory::Mould, findings, MOULD_ABATEMENT)
}

/// Droppings and carcass statements, or the default pair when there are none.
pub fn pest(summary: &PestSummary) -> NarrativeBlock {
    if !summary.has_evidence() {
        return NarrativeBlock::new(NarrativeCategory::PestInfestation, NO_PESTS, NO_ACTION_REQUIRED);
    }

    let findings = summary
        .statements
        .iter()
        .map(|s| s.statement.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    // only carcasses recorded: no droppings types to name
    let sources = if summary.infestation_types.is_empty() {
        "animal remains".to_string()
    } else {
        summary.infestation_types.join(", ")
    };
    let recommendations = format!(
        "Precautions should be taken to minimize worker exposure when disturbing/removing {sources}. This includes measures to minimize dust generation and use of appropriate personal protection."
    );
    NarrativeBlock::new(NarrativeCategory::PestInfestation, findings, recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::area;
    use crate::narrative::test_support::Fixture;
    use serde_json::json;

    #[test]
    fn test_mould_default() {
        let fx = Fixture::new(vec![area(json!({"name": "Office", "moldGrowth": "No"}))]);
        let block = mould(&fx.aggregates);
        assert_eq!(block.findings, NO_MOULD);
        assert_eq!(block.recommendations, NO_ACTION_REQUIRED);
    }

    #[test]
    fn test_mould_itemized() {
        let fx = Fixture::new(vec![area(json!({
            "name": "Kitchen",
            "moldGrowth": "Yes",
            "mouldMaterials": [{"materialType": "Drywall"}, {"materialType": "Carpet"}]
        }))]);
        let block = mould(&fx.aggregates);
        assert_eq!(
            block.findings,
            "Suspect mould contamination was observed on the following building materials:<ul><li>Drywall</li><li>Carpet</li></ul> Affected areas: Kitchen."
        );
        assert!(block.recommendations.contains("Table 6 (Mould Contamination)"));
    }

    #[test]
    fn test_mould_flag_without_rows() {
        let fx = Fixture::new(vec![area(json!({"name": "Bath", "moldGrowth": "Yes"}))]);
        let block = mould(&fx.aggregates);
        assert_eq!(block.findings, "Suspect mould growth was observed in the subject area.");
        assert!(block.requires_action());
    }

    #[test]
    fn test_pest_statements_join() {
        let fx = Fixture::new(vec![area(json!({
            "name": "Attic",
            "infestationTypeSelect": ["Bird"],
            "droppingsLocation": "the joists",
            "deadAnimals": [{"animalName": "Squirrel", "animalLocation": "the hatch"}]
        }))]);
        let block = pest(&fx.aggregates.pest);
        assert_eq!(
            block.findings,
            "An area of Bird dropping accumulation was identified on the joists in the Attic. Squirrel was identified on/near the hatch in the Attic."
        );
        assert!(block
            .recommendations
            .starts_with("Precautions should be taken to minimize worker exposure when disturbing/removing Bird."));
    }

    #[test]
    fn test_no_pests() {
        let block = pest(&PestSummary::default());
        assert_eq!(block.findings, NO_PESTS);
        assert!(!block.requires_action());
    }
}

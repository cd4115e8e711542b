use super::mercury::{lamp_recommendation, report_threshold};
use super::{bullet_list, bullet_list_or_na, NarrativeBlock, NarrativeCategory, NarrativeContext};
use super::NO_ACTION_REQUIRED;
use crate::aggregate::{Aggregates, Occurrences};

const ASBESTOS_RECOMMENDATIONS: &str = "Disturbance of asbestos-containing materials must be conducted in accordance with Ontario Regulation 278/05 <i>Designated Substance – Asbestos on Construction Projects and in Building and Repair Operations</i>. Refer to Table 3 (Results of Assessment for Asbestos-Containing Materials), Section 3.1.1 (Conclusions and Recommendations), Appendix A (Summary of ACM Occurrences) and Appendix B (Site Drawings). Asbestos-containing materials must be disposed of in accordance with R.R.O. 1990, Regulation 347, <i>General - Waste Management</i>.";

const LEAD_RECOMMENDATIONS: &str = "Disturbance of lead-containing materials must be conducted in accordance with the Ontario Ministry of Labour, Immigration, Training and Skills Development (MLITSD) Lead on Construction Projects guideline (2011) and/or the Environmental Abatement Council of Canada (EACC) Lead Guideline (October 2014). For additional details, refer to Section 2.1.2 (Results) and Section 3.1.2 (Conclusions and Recommendations). Lead-containing wastes should be recycled if practicable or handled and disposed of according to R.R.O. 1990, Regulation 347, General-Waste Management.";

const SILICA_RECOMMENDATIONS: &str = "Any work involving the disturbance of silica-containing materials should follow the procedures outlined in the Ontario MLITSD “Silica on Construction Projects” guideline. For additional information, refer to Section 2.1.4 (Results) and Section 3.1.4 (Conclusions and Recommendations).";

/// Found list (or "N/A"), then the suspected list when there is one.
fn occurrence_findings(heading: &str, noun: &str, occurrences: &Occurrences) -> String {
    let mut findings = format!("{heading}{}", bullet_list_or_na(&occurrences.first_seen));
    if !occurrences.suspected.is_empty() {
        findings.push_str(&format!(
            "The following building materials are suspected to be {noun}-containing:{}",
            bullet_list(&occurrences.suspected)
        ));
    }
    findings
}

pub fn asbestos(agg: &Aggregates) -> NarrativeBlock {
    NarrativeBlock::new(
        NarrativeCategory::Asbestos,
        occurrence_findings(
            "The following asbestos-containing materials were identified in the subject area that may be impacted during the project:",
            "asbestos",
            &agg.lists.asbestos,
        ),
        ASBESTOS_RECOMMENDATIONS,
    )
}

pub fn lead(agg: &Aggregates) -> NarrativeBlock {
    NarrativeBlock::new(
        NarrativeCategory::Lead,
        occurrence_findings(
            "The following materials are assumed to be lead-containing:",
            "lead",
            &agg.lists.lead,
        ),
        LEAD_RECOMMENDATIONS,
    )
}

pub fn mercury(ctx: &NarrativeContext<'_>) -> NarrativeBlock {
    NarrativeBlock::new(
        NarrativeCategory::Mercury,
        occurrence_findings(
            "The following mercury-containing materials were identified in the subject area that may be impacted during the project:",
            "mercury",
            &ctx.aggregates.lists.mercury,
        ),
        lamp_recommendation(
            report_threshold(ctx.areas),
            ctx.organization,
            ctx.project_type,
        ),
    )
}

pub fn silica(agg: &Aggregates) -> NarrativeBlock {
    NarrativeBlock::new(
        NarrativeCategory::Silica,
        occurrence_findings(
            "The following silica-containing materials were identified in the subject area that may be impacted during the project:",
            "silica",
            &agg.lists.silica,
        ),
        SILICA_RECOMMENDATIONS,
    )
}

pub fn other_designated() -> NarrativeBlock {
    NarrativeBlock::new(
        NarrativeCategory::OtherDesignatedSubstances,
        "No other designated substances are expected to be present in any significant quantities or in a form that would represent an exposure concern.",
        "No protective measures or procedures specific to acrylonitrile, arsenic, benzene, coke oven emissions, ethylene oxide, isocyanates, and vinyl chloride are considered necessary.",
    )
}

pub fn uffi() -> NarrativeBlock {
    NarrativeBlock::new(
        NarrativeCategory::Uffi,
        "No UFFI was identified or is suspected in the subject area.",
        NO_ACTION_REQUIRED,
    )
}

//! Mercury lamp and equipment recommendations.
//!
//! Lamp disposal follows the Reg. 347 small-quantity exemption: at or below
//! fifteen lamps the waste may go to landfill, though recycling is still
//! recommended; above that the short handling text applies.

use super::NarrativeContext;
use crate::model::Area;
use serde::Serialize;

/// The largest lamp count for which the small-quantity narrative applies.
pub const LAMP_THRESHOLD: u32 = 15;

pub const AT_OR_BELOW_THRESHOLD: &str = "<=15";
pub const ABOVE_THRESHOLD: &str = ">15";

const LAMP_HANDLING: &str = "Fluorescent and HID lamps that require removal should be handled with care and kept intact to avoid potential exposure to mercury vapour present within the lamps.";

/// Which side of the lamp threshold a report, or one area, falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LampThreshold {
    AtOrBelow,
    Above,
}

impl LampThreshold {
    /// Reads the literal "<=15" / ">15" answers.
    pub fn from_answer(raw: &str) -> Option<Self> {
        match raw {
            AT_OR_BELOW_THRESHOLD => Some(LampThreshold::AtOrBelow),
            ABOVE_THRESHOLD => Some(LampThreshold::Above),
            _ => None,
        }
    }
}

fn lamp_areas(areas: &[Area]) -> impl Iterator<Item = &Area> {
    areas.iter().filter(|a| a.survey.has_lamps.is_yes())
}

/// Report-wide threshold side.
///
/// A literal "<=15" in any lamp area wins, then a literal ">15". Without
/// either, plain numeric counts of the lamp areas are summed; no count at all
/// reads as above the threshold.
pub fn report_threshold(areas: &[Area]) -> LampThreshold {
    let answers: Vec<Option<LampThreshold>> = lamp_areas(areas)
        .map(|a| a.survey.lamp_count.as_deref().and_then(LampThreshold::from_answer))
        .collect();
    if answers.contains(&Some(LampThreshold::AtOrBelow)) {
        return LampThreshold::AtOrBelow;
    }
    if answers.contains(&Some(LampThreshold::Above)) {
        return LampThreshold::Above;
    }

    let counts: Vec<u32> = lamp_areas(areas)
        .filter_map(|a| a.survey.lamp_count.trimmed())
        .filter_map(|c| c.parse::<u32>().ok())
        .collect();
    let total: u32 = counts.iter().copied().fold(0, u32::saturating_add);
    if !counts.is_empty() && total <= LAMP_THRESHOLD {
        LampThreshold::AtOrBelow
    } else {
        LampThreshold::Above
    }
}

pub fn lamp_recommendation(threshold: LampThreshold, organization: &str, project_type: &str) -> String {
    match threshold {
        LampThreshold::Above => LAMP_HANDLING.to_string(),
        LampThreshold::AtOrBelow => format!(
            "{LAMP_HANDLING} Under Reg. 347, waste mercury produced in amounts less than 5 kilograms (kg) in any month or otherwise accumulated in an amount less than 5 kg are exempt from hazardous waste registration, treatment and disposal requirements and can be disposed of in landfill as regular waste. Larger quantities of waste mercury must be treated and disposed of in accordance with the requirements of Reg. 347. Although it is anticipated that less than 5 kg of waste lamps will be produced as part of the {project_type} Project, to prevent the release of mercury into the environment, {organization} recommends that all waste lamps be sent to a lamp recycling facility and not disposed of in landfill."
        ),
    }
}

/// Mercury recommendation for a single lamp area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaMercuryRecommendation {
    pub area_name: String,
    pub recommendation: String,
}

/// One entry per lamp area whose count is a literal threshold answer.
pub fn area_recommendations(ctx: &NarrativeContext<'_>) -> Vec<AreaMercuryRecommendation> {
    lamp_areas(ctx.areas)
        .filter_map(|area| {
            let threshold = area.survey.lamp_count.as_deref().and_then(LampThreshold::from_answer)?;
            Some(AreaMercuryRecommendation {
                area_name: area.section_name(),
                recommendation: lamp_recommendation(threshold, ctx.organization, ctx.project_type),
            })
        })
        .collect()
}

const EQUIPMENT_LIST: &str = "Mercury-containing thermostats, thermometers, barometers and other measuring devices (pressure gauges/sensors, vacuum gauges, manometers, etc.), and a variety of other electrical switches (temperature sensitive, tilt switches, float switches, etc.) associated with mechanical equipment";
const EQUIPMENT_HANDLING: &str = "If any of these items are to be removed it should be done so carefully to avoid spillage and stored/packaged in a manner that will prevent breakage or spillage. Any mercury-containing equipment that is to be removed is recommended to be recycled rather than disposed of in landfill.";

/// Removal narrative from the first area answering the removal question.
///
/// "Unknown" is treated as "Removed"; any other answer yields nothing.
pub fn equipment_removal(ctx: &NarrativeContext<'_>) -> Option<String> {
    let status = ctx
        .areas
        .iter()
        .find_map(|a| a.survey.will_the_mercury_containing_equipment_be_removed.as_deref())?;
    let project_type = ctx.project_type;
    match status {
        "Removed" | "Unknown" => Some(format!(
            "{EQUIPMENT_LIST} are expected to be removed as part of the {project_type}. Care should be taken not to disturb these items during the work as breakage could cause a spill of liquid mercury. {EQUIPMENT_HANDLING}"
        )),
        "Distributed" => Some(format!(
            "{EQUIPMENT_LIST} were observed in the project areas. These items are not expected to be removed as part of the {project_type}. However, care should be taken not to disturb these items during the work as breakage could cause a spill of liquid mercury. {EQUIPMENT_HANDLING}"
        )),
        _ => None,
    }
}

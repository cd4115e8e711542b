//! Fixed report lists: key findings, recommendations, control measures,
//! work procedures, monitoring, the assessment checklist and the raw
//! question/response table.

use super::NarrativeContext;
use crate::model::{Answer, Area};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    pub item: &'static str,
    pub status: String,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResponse {
    pub question: &'static str,
    pub response: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Boilerplate {
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub control_measures: Vec<&'static str>,
    pub work_procedures: Vec<&'static str>,
    pub monitoring_requirements: Vec<&'static str>,
    pub assessment_checklist: Vec<ChecklistItem>,
    pub assessment_responses: Vec<AssessmentResponse>,
}

pub fn compose(ctx: &NarrativeContext<'_>) -> Boilerplate {
    let assessment_responses = ctx.primary().map(assessment_responses).unwrap_or_default();
    Boilerplate {
        key_findings: key_findings(ctx),
        recommendations: recommendations(ctx.areas),
        control_measures: CONTROL_MEASURES.to_vec(),
        work_procedures: WORK_PROCEDURES.to_vec(),
        monitoring_requirements: MONITORING_REQUIREMENTS.to_vec(),
        assessment_checklist: checklist(ctx),
        assessment_responses,
    }
}

/// Survey switches that add findings and recommendations, folded across areas.
#[derive(Debug, Clone, Copy, Default)]
struct SurveyFlags {
    asbestos: bool,
    lead: bool,
    silica: bool,
    mercury: bool,
    pcb: bool,
    mould: bool,
    pest: bool,
}

type Pick = fn(&Area) -> &Answer;

fn any_yes(areas: &[Area], pick: Pick) -> bool {
    areas.iter().any(|a| pick(a).is_yes())
}

impl SurveyFlags {
    fn fold(areas: &[Area]) -> Self {
        SurveyFlags {
            asbestos: any_yes(areas, |a| &a.survey.is_asbestos_assessed),
            lead: any_yes(areas, |a| &a.survey.is_lead_assessed),
            silica: any_yes(areas, |a| &a.survey.silica_observed),
            mercury: any_yes(areas, |a| &a.survey.mercury_observed),
            pcb: any_yes(areas, |a| &a.survey.pcb_observed),
            mould: any_yes(areas, |a| &a.survey.mold_growth),
            pest: any_yes(areas, |a| &a.survey.pest_infestation_observed),
        }
    }
}

fn key_findings(ctx: &NarrativeContext<'_>) -> Vec<String> {
    let flags = SurveyFlags::fold(ctx.areas);
    let mut findings = vec![
        "Comprehensive designated substances survey completed in accordance with regulatory requirements".to_string(),
        format!(
            "{} area(s) systematically inspected and documented with detailed findings",
            ctx.areas.len()
        ),
    ];
    if ctx.photo_count > 0 {
        findings.push("Extensive photographic documentation provided for all assessment areas and identified materials".to_string());
    }

    let conditional = [
        (flags.asbestos, "Asbestos-containing materials identified and condition assessed for potential disturbance during construction"),
        (flags.lead, "Lead-containing materials identified and documented for safe handling during renovation activities"),
        (flags.silica, "Silica-containing materials identified requiring dust control measures during construction activities"),
        (flags.mercury, "Mercury-containing equipment identified requiring special handling and disposal procedures"),
        (flags.pcb, "PCB-containing equipment identified requiring specialized removal and disposal procedures"),
        (flags.mould, "Mold growth observed and documented requiring appropriate remediation procedures"),
        (flags.pest, "Pest infestation identified requiring appropriate control measures and worker protection"),
    ];
    findings.extend(
        conditional
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, text)| text.to_string()),
    );

    findings.extend(
        [
            "Risk assessment completed for all identified hazardous materials",
            "Comprehensive recommendations provided for safe work procedures and control measures",
            "Regulatory compliance requirements identified and documented",
        ]
        .map(String::from),
    );
    findings
}

const BASE_RECOMMENDATIONS: [&str; 8] = [
    "Implement comprehensive designated substances control program in accordance with regulatory requirements",
    "Ensure all workers receive appropriate training on hazardous materials identification and safe work procedures",
    "Establish proper containment and decontamination procedures for all work activities",
    "Implement regular monitoring and documentation protocols during construction activities",
    "Maintain detailed records of all control measures and worker protection procedures",
    "Establish emergency response procedures for unexpected discovery of hazardous materials",
    "Coordinate with qualified environmental contractors for specialized removal and disposal activities",
    "Implement proper waste management procedures for all hazardous materials",
];

fn recommendations(areas: &[Area]) -> Vec<String> {
    let flags = SurveyFlags::fold(areas);
    let conditional: [(bool, [&str; 2]); 6] = [
        (flags.asbestos, [
            "Implement asbestos abatement procedures in accordance with Regulation 278/05 requirements",
            "Ensure asbestos awareness training for all workers and supervisors",
        ]),
        (flags.lead, [
            "Implement lead-safe work practices during all renovation and demolition activities",
            "Provide appropriate respiratory protection and personal protective equipment",
        ]),
        (flags.silica, [
            "Implement comprehensive silica dust control measures during cutting and grinding activities",
            "Use wet methods and local exhaust ventilation where appropriate",
        ]),
        (flags.mercury, [
            "Implement specialized handling procedures for mercury-containing equipment",
            "Arrange for proper disposal of mercury waste at approved facilities",
        ]),
        (flags.pcb, [
            "Implement specialized procedures for PCB-containing equipment removal and disposal",
            "Coordinate with qualified PCB disposal contractors",
        ]),
        (flags.mould, [
            "Implement appropriate mold remediation procedures following industry best practices",
            "Ensure proper containment and worker protection during remediation activities",
        ]),
    ];

    BASE_RECOMMENDATIONS
        .iter()
        .copied()
        .chain(
            conditional
                .iter()
                .filter(|(on, _)| *on)
                .flat_map(|(_, pair)| pair.iter().copied()),
        )
        .map(String::from)
        .collect()
}

const CONTROL_MEASURES: [&str; 8] = [
    "Implement engineering controls including local exhaust ventilation and wet methods",
    "Use appropriate personal protective equipment (PPE) including respiratory protection",
    "Establish work area isolation and containment procedures",
    "Implement proper decontamination procedures for workers and equipment",
    "Provide adequate ventilation and air monitoring during work activities",
    "Establish proper waste containment and disposal procedures",
    "Implement regular air monitoring and exposure assessment",
    "Establish emergency response and evacuation procedures",
];

const WORK_PROCEDURES: [&str; 8] = [
    "Conduct pre-work inspections and hazard assessments",
    "Implement proper work area preparation and containment",
    "Follow established safe work procedures for each material type",
    "Implement proper waste handling and disposal procedures",
    "Maintain detailed documentation of all work activities",
    "Establish communication protocols for all workers and supervisors",
    "Implement proper cleanup and decontamination procedures",
    "Conduct post-work inspections and air monitoring",
];

const MONITORING_REQUIREMENTS: [&str; 8] = [
    "Conduct regular air monitoring during work activities to assess exposure levels",
    "Implement visual inspections of work areas and control measures",
    "Document effectiveness of control measures and worker protection procedures",
    "Conduct worker health monitoring as required by regulations",
    "Maintain detailed records of all monitoring activities and results",
    "Implement real-time monitoring for critical work activities",
    "Conduct post-work clearance monitoring and documentation",
    "Establish regular review and update of monitoring protocols",
];

fn checklist_item(item: &'static str, status: impl Into<String>, comments: impl Into<String>) -> ChecklistItem {
    ChecklistItem {
        item,
        status: status.into(),
        comments: comments.into(),
    }
}

/// The first area's answer, else "N/A".
fn primary_status(ctx: &NarrativeContext<'_>, pick: Pick) -> String {
    ctx.primary()
        .map(|a| pick(a).or("N/A"))
        .unwrap_or("N/A")
        .to_string()
}

fn checklist(ctx: &NarrativeContext<'_>) -> Vec<ChecklistItem> {
    let area_count = ctx.areas.len();
    let photos = ctx.photo_count;
    let survey_rows: [(&'static str, Pick, &'static str); 7] = [
        ("Asbestos Assessment", |a| &a.survey.is_asbestos_assessed, "Asbestos-containing materials identified and condition assessed"),
        ("Lead Assessment", |a| &a.survey.is_lead_assessed, "Lead-containing materials identified and documented"),
        ("Silica Assessment", |a| &a.survey.silica_observed, "Silica-containing materials identified and documented"),
        ("Mercury Assessment", |a| &a.survey.mercury_observed, "Mercury-containing equipment identified and documented"),
        ("PCB Assessment", |a| &a.survey.pcb_observed, "PCB-containing equipment identified and documented"),
        ("Mold Assessment", |a| &a.survey.mold_growth, "Mold growth and water damage assessed"),
        ("Pest Assessment", |a| &a.survey.pest_infestation_observed, "Pest infestation and associated hazards evaluated"),
    ];

    let mut items = vec![
        checklist_item(
            "Comprehensive Area Inspection",
            "Completed",
            format!("{area_count} area(s) systematically inspected"),
        ),
        checklist_item(
            "Historical Documentation Review",
            "Completed",
            "Building plans, construction records, and renovation history reviewed",
        ),
        checklist_item(
            "Photographic Documentation",
            if photos > 0 { "Completed" } else { "Not Available" },
            format!("{photos} photos taken and documented"),
        ),
    ];
    items.extend(
        survey_rows
            .iter()
            .map(|&(item, pick, comments)| checklist_item(item, primary_status(ctx, pick), comments)),
    );
    items.push(checklist_item(
        "Risk Assessment",
        "Completed",
        "Comprehensive risk assessment completed for all identified materials",
    ));
    items.push(checklist_item(
        "Regulatory Compliance Review",
        "Completed",
        "All applicable regulations identified and compliance requirements documented",
    ));
    items
}

/// Question label, answer field, and an optional notes field with its prefix.
type ResponseRow = (&'static str, &'static str, Option<(&'static str, &'static str)>);

const RESPONSE_ROWS: &[ResponseRow] = &[
    ("Project Name", "projectName", None),
    ("Project Number", "projectNumber", None),
    ("Project Address", "projectAddress", None),
    ("Client Company Name", "clientCompanyName", None),
    ("Client Address", "clientAddress", None),
    ("Area Name", "name", None),
    ("Area Description", "areaDescription", None),
    ("Area Square Feet", "areaSquareFeet", None),
    ("Specific Location", "specificLocation", None),
    ("Inspection Date", "inspectionDate", None),
    ("Contact Name", "contactName", None),
    ("Contact Email", "contactEmail", None),
    ("Contact Phone", "contactPhone", None),
    ("Contact Position", "contactPosition", None),
    ("Project Manager Name", "pmName", None),
    ("Project Manager Email", "pmEmail", None),
    ("Project Manager Phone", "pmPhone", None),
    ("Start Date", "startDate", None),
    ("End Date", "endDate", None),
    ("Asbestos Assessment", "isAsbestosAssessed", None),
    ("Lead Assessment", "isLeadAssessed", None),
    ("Silica Observed", "silicaObserved", None),
    ("Mercury Observed", "mercuryObserved", None),
    ("PCB Observed", "pcbObserved", None),
    ("Mold Growth", "moldGrowth", None),
    ("Water Staining", "waterStaining", None),
    ("Pest Infestation", "pestInfestationObserved", Some(("infestationTypeSelect", "Type: "))),
    ("Droppings Observed", "droppingsObserved", None),
    ("Vinyl Floor Tiles", "vinyleFloorTiles", None),
    ("Vinyl Sheet Flooring", "vinyleSheetFlooring", None),
    ("Flooring Mastic", "flooringMastic", None),
    ("Drywall Joint Compound", "drywallJointCompound", None),
    ("Plaster Finishes", "plasterFinishes", None),
    ("Sprayed Fireproofing", "hasSprayedFireproofing", Some(("sprayedFireproofingDetails", ""))),
    ("Sprayed Insulation", "hasSprayedInsulation", None),
    ("Loose Fill/Vermiculite Insulation", "haslooseFillOrvermiculiteInsulation", None),
    ("HVAC Duct Insulation", "hvacDuctInsulation", None),
    ("Boiler Insulation", "boilerInsulation", None),
    ("Tank Insulation", "tankInsulation", None),
    ("Breeching/Exhaust Insulation", "breechingExhaustInsulation", None),
    ("Mechanical Pipe Insulation (Straights)", "mechanicalPipeInsulationStraights", None),
    ("Mechanical Pipe Insulation (Fittings)", "mechanicalPipeInsulationFittings", None),
    ("Other Mechanical Equipment Insulation", "otherMechanicalEquipmentInsulation", None),
    ("Asbestos Cement Piping", "asbestosCementPiping", None),
    ("Asbestos Cement Roofing/Siding/Wallboard", "asbestosCementRoofingSidingWallboard", None),
    ("Other Asbestos Cement Products", "otherAsbestosCementProducts", None),
    ("Lay-in Acoustic Ceiling Tiles", "layInAcousticCeilingTiles", None),
    ("Glued-on Acoustic Ceiling Tiles", "gluedOnAcousticCeilingTiles", None),
    ("Cement Ceiling Panels", "cementCeilingPanels", None),
    ("Sprayed Texture/Stucco Finishes", "sprayedTextureStuccoFinishes", None),
    ("Exterior Building Caulking", "exteriorBuildingCaulking", None),
    ("Exterior Building Shingles", "exteriorBuildingShingles", None),
    ("Exterior Building Roof Membrane", "exteriorBuildingRoofMembrane", None),
    ("Miscellaneous Materials Mastic", "miscMaterialsMastic", None),
    ("Miscellaneous Materials Suspect ACM", "miscMaterialsSuspectAcm", None),
    ("Fluorescent Fixtures", "fluorescentFixtures", None),
    ("HID Lights Present", "hidLightsPresent", Some(("hidLightsCount", "Count: "))),
    ("Recent Lighting Retrofit", "recentLightingRetrofit", None),
    ("Emergency Lighting", "isThereEmergencyLighting", None),
    ("Wall Mounted Capacitor", "wallMountedCapacitor", None),
    ("Capacitor Leakage Signs", "capacitorLeakageSigns", None),
    ("Liquid Filled Transformer", "liquidFilledTransformer", None),
    ("Transformer Leakage Signs", "transformerLeakageSigns", None),
    ("Additional PCB Equipment", "additionalPcbEquipment", None),
    ("Mercury Containing Equipment", "areThereMercuryContainingEquip", None),
    ("Mercury Equipment Removal", "willTheMercuryContainingEquipmentBeRemoved", None),
    ("Fire Extinguishing Equipment", "fireExtinguishingEquipment", None),
    ("Air Conditioning", "hasAirConditioning", None),
    ("Refrigerant Pounds", "refrigerantPounds", None),
    ("ODS Observed", "odsObserved", None),
    ("Are There Vials", "areThereVials", None),
    ("Area Available", "areaAvailable", None),
    ("Documents Used", "documentsUsed", None),
    ("Areas Not Accessible", "areasNotAccessible", None),
];

/// The first area's answers as a question/response/notes table.
pub fn assessment_responses(area: &Area) -> Vec<AssessmentResponse> {
    RESPONSE_ROWS
        .iter()
        .map(|&(question, key, notes)| AssessmentResponse {
            question,
            response: area.answer_text(key).unwrap_or_else(|| "N/A".to_string()),
            notes: notes
                .and_then(|(note_key, prefix)| {
                    area.answer_text(note_key).map(|text| format!("{prefix}{text}"))
                })
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::area;
    use crate::narrative::test_support::Fixture;
    use serde_json::json;

    #[test]
    fn test_key_findings_fold_across_areas() {
        let fx = Fixture::new(vec![
            area(json!({"name": "A"})),
            area(json!({"name": "B", "pcbObserved": "Yes"})),
        ]);
        let findings = key_findings(&fx.ctx());
        assert_eq!(findings[1], "2 area(s) systematically inspected and documented with detailed findings");
        assert!(findings.iter().any(|f| f.starts_with("PCB-containing equipment identified")));
        assert_eq!(findings.len(), 6);
    }

    #[test]
    fn test_photo_finding_needs_photos() {
        let fx = Fixture::new(vec![area(json!({}))]);
        let mut ctx = fx.ctx();
        assert!(!key_findings(&ctx).iter().any(|f| f.contains("photographic")));
        ctx.photo_count = 3;
        assert!(key_findings(&ctx).iter().any(|f| f.contains("photographic")));
    }

    #[test]
    fn test_recommendations_add_pairs() {
        let areas = vec![area(json!({"isAsbestosAssessed": "Yes", "moldGrowth": "Yes"}))];
        let recs = recommendations(&areas);
        assert_eq!(recs.len(), 12);
        assert_eq!(recs[8], "Implement asbestos abatement procedures in accordance with Regulation 278/05 requirements");
        assert_eq!(recs[11], "Ensure proper containment and worker protection during remediation activities");
    }

    #[test]
    fn test_checklist_uses_first_area() {
        let fx = Fixture::new(vec![
            area(json!({"isAsbestosAssessed": "No"})),
            area(json!({"isAsbestosAssessed": "Yes", "isLeadAssessed": "Yes"})),
        ]);
        let items = checklist(&fx.ctx());
        assert_eq!(items.len(), 12);
        assert_eq!(items[2].status, "Not Available");
        assert_eq!(items[3].status, "No");
        assert_eq!(items[4].status, "N/A");
        assert_eq!(items[0].comments, "2 area(s) systematically inspected");
    }

    #[test]
    fn test_assessment_responses() {
        let a = area(json!({
            "name": "Room 1",
            "pestInfestationObserved": "Yes",
            "infestationTypeSelect": ["Mouse", "Bird"],
            "hidLightsCount": 4
        }));
        let rows = assessment_responses(&a);
        assert_eq!(rows.len(), RESPONSE_ROWS.len());
        assert_eq!(rows[0].response, "N/A");
        let area_name = rows.iter().find(|r| r.question == "Area Name").unwrap();
        assert_eq!(area_name.response, "Room 1");
        let pest = rows.iter().find(|r| r.question == "Pest Infestation").unwrap();
        assert_eq!(pest.notes, "Type: Mouse,Bird");
        let hid = rows.iter().find(|r| r.question == "HID Lights Present").unwrap();
        assert_eq!(hid.response, "N/A");
        assert_eq!(hid.notes, "Count: 4");
    }

    #[test]
    fn test_fixed_lists_have_eight_entries() {
        let fx = Fixture::new(vec![]);
        let bp = compose(&fx.ctx());
        assert_eq!(bp.control_measures.len(), 8);
        assert_eq!(bp.work_procedures.len(), 8);
        assert_eq!(bp.monitoring_requirements.len(), 8);
        assert!(bp.assessment_responses.is_empty());
    }
}

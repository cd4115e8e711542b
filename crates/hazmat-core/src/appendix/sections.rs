use crate::aggregate::OdsRow;
use crate::model::{Area, AreaSurvey, MaterialBase, PcbEquipment};
use crate::schema::walk::rows_for_area;
use crate::schema::{AssessmentRow, FormSchema, SchemaTable};
use rust_decimal::Decimal;
use serde::Serialize;

/// PCB equipment as listed in an area section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaPcbEquipment {
    pub location: String,
    pub equipment: String,
    pub manufacturer: String,
    pub pcb_info: String,
    pub pcb_content: String,
}

impl From<&PcbEquipment> for AreaPcbEquipment {
    fn from(e: &PcbEquipment) -> Self {
        AreaPcbEquipment {
            location: e.table_location.to_string(),
            equipment: e.table_electrical_equipment.to_string(),
            manufacturer: e.table_manufacturer.to_string(),
            pcb_info: e.table_pcb_id_info.to_string(),
            pcb_content: e.table_pcb_content.to_string(),
        }
    }
}

/// Everything the report shows for one area on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSection {
    pub area_name: String,
    pub area_number: String,
    pub asbestos_assessment: Vec<AssessmentRow>,
    pub lead_assessment: Vec<AssessmentRow>,
    pub suspect_lead_materials: Vec<String>,
    pub mercury_assessment: Vec<String>,
    pub silica_observed: bool,
    pub silica_materials: Vec<String>,
    pub mercury_present: bool,
    pub mercury_sources_materials: Vec<String>,
    pub mould_assessment: Vec<AssessmentRow>,
    pub pest_infestation_observed: bool,
    pub infestation_type: String,
    pub droppings_observed: bool,
    pub droppings_location: String,
    pub pcb_observed: bool,
    pub pcb_assessment: Vec<AreaPcbEquipment>,
    pub pcb_summary_paragraphs: Vec<String>,
    pub ods_observed: bool,
    pub ods_assessment: Vec<OdsRow>,
    pub ods_summary_paragraphs: Vec<String>,
}

/// `Lead Material 1` style rows from an area's material list.
fn material_rows<'a>(kind: &str, materials: impl Iterator<Item = &'a MaterialBase>) -> Vec<AssessmentRow> {
    materials
        .enumerate()
        .map(|(n, base)| AssessmentRow {
            id: format!("{kind} Material {}", n + 1),
            location_and_description: [
                base.location.as_deref(),
                base.description.as_deref(),
                base.name(),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" - "),
            photo: base.first_photo().unwrap_or("").to_string(),
        })
        .collect()
}

fn is_number(raw: &str) -> bool {
    raw.trim().parse::<Decimal>().is_ok()
}

fn mercury_sources(s: &AreaSurvey) -> Vec<String> {
    let mut sources = Vec::new();
    if s.has_lamps.is_yes() {
        match s.lamp_count.as_deref() {
            Some(count) if is_number(count) => {
                sources.push(format!("fluorescent lamps (Count: {count})"))
            }
            _ => sources.push("fluorescent lamps".to_string()),
        }
    }
    if s.are_there_vials.is_yes() {
        sources.push("mercury vials".to_string());
    }
    if s.are_there_mercury_containing_equip.is_yes() {
        sources.push(
            "mercury-containing equipment (thermostats, thermometers, barometers, etc.)"
                .to_string(),
        );
    }
    sources.extend(s.mercury_forms.iter().cloned());
    sources
}

fn infestation_type(s: &AreaSurvey) -> String {
    match (s.infestation_type_select.as_slice(), s.infestation_type_other.as_deref()) {
        ([only], Some(other)) if only == "Other" => other.to_string(),
        (types, _) => types.join(", "),
    }
}

fn pcb_paragraphs(s: &AreaSurvey) -> Vec<String> {
    let mut paragraphs = Vec::new();

    let has_fixture_answers = [
        &s.fluorescent_fixtures,
        &s.fixture_type,
        &s.fixture_size,
        &s.ballast_pcb_percentage,
        &s.assumed_pcb_ballasts_count,
    ]
    .iter()
    .any(|a| a.is_present());
    if has_fixture_answers {
        let fixtures = s.fluorescent_fixtures.or("N/A");
        let size = s.fixture_size.or("N/A");
        let ballasts = s.assumed_pcb_ballasts_count.or("N/A");
        let pct = s.ballast_pcb_percentage.or("N/A");
        paragraphs.push(format!(
            "Fluorescent light fixtures were identified in the project areas. These were noted to be {fixtures}-lamp fixtures. Most of the lamps were noted to be {size}. {fixtures} fluorescent light fixtures were inspected to determine PCB content. {ballasts} ballasts were identified. {pct} of these ballasts were verified to be non-PCB-containing while {pct} ballasts were verified to contain PCBs. {pct} ballast(s) did not contain sufficient information on the label to make a proper determination and therefore is assumed to contain PCBs."
        ));
    }

    if s.hid_lights_present.is_yes() {
        let count = s.hid_lights_count.or("N/A");
        paragraphs.push(format!(
            "A total of approximately {count} HID lights were also present throughout the project areas. These lights could not be accessed for further evaluation to determine the type(s) of ballasts present and therefore the ballasts within these lights are assumed to contain PCBs."
        ));
    }

    if s.liquid_filled_transformer.is_yes() {
        let location = s.transformer_location.or("the project areas");
        let staining = if s.transformer_leakage_signs.is_yes() {
            "Significant staining or discolouration of the concrete floor was noted beneath the transformer that may be suggestive of previous leakage."
        } else {
            "No significant staining or discolouration of the concrete floor was noted beneath the transformer that may be suggestive of previous leakage."
        };
        paragraphs.push(format!(
            "1 liquid-filled transformer was identified in {location} of the project areas that was identified to be PCB-containing. {staining} The transformer itself was observed to be in good condition and did not exhibit any signs of leakage."
        ));
    }

    if s.wall_mounted_capacitor.is_yes() {
        let count = s.wall_mounted_capacitor_count.or("N/A");
        let verdict = if s.capacitor_leakage_signs.is_yes() {
            "was verified to not contain PCBs while the second capacitor is assumed to be PCB-containing. No suspect leakage was observed on the exterior casing of these capacitors."
        } else {
            "is assumed to be PCB-containing. No suspect leakage was observed on the exterior casing of these capacitors."
        };
        paragraphs.push(format!(
            "(wall-mounted capacitors) {count} wall-mounted capacitors were identified in the project areas. Based on the nameplate information obtained, {verdict}"
        ));
    }

    paragraphs
}

fn ods_paragraphs(s: &AreaSurvey) -> Vec<String> {
    let mut paragraphs = Vec::new();
    if s.has_air_conditioning.is_yes() {
        paragraphs.push(format!(
            "There are {} air conditioning unit(s) ({}) present in the project area.",
            s.ac_unit_count.or("N/A"),
            s.ac_unit_size.or("N/A")
        ));
    }
    if let Some(refrigerant) = s.refrigerant_type.as_deref() {
        paragraphs.push(format!(
            "The refrigerant type is {refrigerant} with approximately {} pounds present.",
            s.refrigerant_pounds.or("N/A")
        ));
    }
    if s.fire_extinguishing_equipment.is_yes() {
        paragraphs.push("Fire extinguishing equipment is present in the project area.".to_string());
    }
    paragraphs
}

impl AreaSection {
    pub fn build(schema: &FormSchema, area: &Area) -> Self {
        let s = &area.survey;
        let pcb_observed = s.pcb_observed.is_yes();
        let ods_observed = s.ods_observed.is_yes();
        let mercury = mercury_sources(s);

        AreaSection {
            area_name: area.section_name(),
            area_number: s.area_number.to_string(),
            asbestos_assessment: rows_for_area(schema, SchemaTable::Asbestos, area),
            lead_assessment: material_rows("Lead", s.lead_materials.iter().map(|m| &m.base)),
            suspect_lead_materials: s.suspect_lead_materials.clone(),
            mercury_assessment: mercury.clone(),
            silica_observed: s.silica_observed.is_yes(),
            silica_materials: s.silica_forms.clone(),
            mercury_present: s.mercury_observed.is_yes(),
            mercury_sources_materials: mercury,
            mould_assessment: material_rows("Mould", s.mould_materials.iter().map(|m| &m.base)),
            pest_infestation_observed: s.pest_infestation_observed.is_yes(),
            infestation_type: infestation_type(s),
            droppings_observed: s.droppings_observed.is_yes(),
            droppings_location: s.droppings_location.to_string(),
            pcb_observed,
            pcb_assessment: if pcb_observed {
                s.pcb_electrical_equipment_table.iter().map(AreaPcbEquipment::from).collect()
            } else {
                Vec::new()
            },
            pcb_summary_paragraphs: if pcb_observed { pcb_paragraphs(s) } else { Vec::new() },
            ods_observed,
            ods_assessment: if ods_observed {
                s.ods_gws_assessment_table.iter().map(OdsRow::from).collect()
            } else {
                Vec::new()
            },
            ods_summary_paragraphs: if ods_observed { ods_paragraphs(s) } else { Vec::new() },
        }
    }
}

/// One section per area. Needs a form schema; without one there are no sections.
pub fn area_sections(schema: Option<&FormSchema>, areas: &[Area]) -> Vec<AreaSection> {
    match schema {
        Some(schema) => areas.iter().map(|area| AreaSection::build(schema, area)).collect(),
        None => Vec::new(),
    }
}

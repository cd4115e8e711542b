use crate::aggregate::{ConsolidatedRow, Lighting, OdsData, PcbData, PestStatement, SiteFlags};
use crate::appendix::Appendices;
use crate::logo::LogoAsset;
use crate::model::{Area, Drawing};
use crate::narrative::Narratives;
use crate::parsing::Photo;
use crate::schema::AssessmentRow;
use crate::trace::Diagnostic;
use serde::Serialize;

/// The record handed to the report renderer.
///
/// Keys are camelCase. Nested groups are flattened where the renderer
/// addresses their fields at the top level.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput {
    // Report
    pub report_name: String,
    pub report_number: String,
    pub report_date: String,
    pub pm_feedback: Option<String>,

    // Project and client
    pub project_name: String,
    pub project_number: String,
    pub project_contact_name: String,
    pub project_contact_title: String,
    pub project_location: String,
    pub project_description: String,
    pub client_name: String,
    pub customer_head_office_address: String,

    // Assessment
    pub assessment_date: String,
    pub assessment_due_to: String,
    pub date_of_loss: Option<String>,
    pub areas_assessed: String,
    pub documents_used_list: Vec<String>,

    pub logo_url: String,
    pub logo: LogoAsset,
    pub technician_name: String,
    pub technician_signature: String,
    pub pm_name: String,
    pub pm_signature: String,

    pub photos: Vec<Photo>,
    pub project_drawings: Vec<Drawing>,
    pub area_details: Vec<Area>,

    #[serde(flatten)]
    pub narratives: Narratives,
    #[serde(flatten)]
    pub appendices: Appendices,

    // Form schema tables; empty without a schema
    pub asbestos_assessment: Vec<AssessmentRow>,
    pub lead_assessment: Vec<AssessmentRow>,
    pub pcb_assessment: Vec<AssessmentRow>,

    // Consolidated tables
    pub asbestos_assessment_table: Vec<ConsolidatedRow>,
    pub lead_assessment_table: Vec<ConsolidatedRow>,
    pub mercury_assessment_table: Vec<ConsolidatedRow>,
    pub silica_assessment_table: Vec<ConsolidatedRow>,
    pub mould_assessment_table: Vec<ConsolidatedRow>,

    #[serde(flatten)]
    pub hazards: HazardLists,

    #[serde(flatten)]
    pub site: SiteFlags,
    pub mould_locations_html: String,

    pub pest_infestation_data: Vec<PestStatement>,
    pub is_pest_infestation_observed: bool,
    pub pest_infestation: bool,
    pub mouse_infestation: bool,
    pub pest_type: String,
    pub pest_location: String,

    pub pcb_data: PcbData,
    pub pcb_observed: bool,
    pub ods_data: OdsData,
    pub ods_observed: bool,
    #[serde(flatten)]
    pub lighting: Lighting,
    #[serde(flatten)]
    pub air_conditioning: AirConditioningOutput,

    /// Inputs that were defaulted while building this record.
    pub diagnostics: Vec<Diagnostic>,
}

/// Found flags and material lists per designated substance.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardLists {
    pub asbestos_found: bool,
    pub asbestos_containing_materials: Vec<String>,
    pub suspect_asbestos_materials: Vec<String>,

    pub lead_found: bool,
    pub lead_containing_materials: Vec<String>,
    pub suspect_lead_materials: Vec<String>,
    pub suspect_lead_material_list: Vec<String>,

    pub mercury_found: bool,
    pub mercury_containing_materials: Vec<String>,
    pub suspect_mercury_materials: Vec<String>,
    pub mercury_material_list: Vec<String>,

    pub silica_found: bool,
    pub silica_containing_materials: Vec<String>,
    pub suspect_silica_materials: Vec<String>,
    pub silica_material_list: Vec<String>,

    pub mould_found: bool,
}

/// Air conditioning details under the names the ODS narrative uses.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirConditioningOutput {
    pub air_conditioning_units: bool,
    pub air_conditioning_count: String,
    pub air_conditioning_size: String,
    pub air_conditioning_area: String,
    pub air_conditioning_room: String,
    pub refrigerant_type: String,
    pub refrigerant_pounds: String,
    /// "1", "2" or empty.
    pub refrigerant_class: String,
    #[serde(rename = "class1or2Refrigerant")]
    pub class_1_or_2_refrigerant: bool,
    pub fire_extinguishing_equipment: bool,
}

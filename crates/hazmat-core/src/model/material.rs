use super::answer::{self, Answer, Entries};
use super::area::AreaSurvey;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_MATERIAL: &str = "Unknown Material";

/// Hazard categories that carry per-material observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hazard {
    Asbestos,
    Lead,
    Mercury,
    Silica,
    Mould,
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hazard::Asbestos => write!(f, "asbestos"),
            Hazard::Lead => write!(f, "lead"),
            Hazard::Mercury => write!(f, "mercury"),
            Hazard::Silica => write!(f, "silica"),
            Hazard::Mould => write!(f, "mould"),
        }
    }
}

/// Fields every material observation shares, whatever the hazard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterialBase {
    pub material_type: Answer,
    pub custom_material_name: Answer,
    pub location: Answer,
    pub description: Answer,
    #[serde(deserialize_with = "answer::text_list")]
    pub photos: Vec<String>,
    pub sample_no: Answer,
    pub sample_collected: Answer,
    pub condition: Answer,
}

impl MaterialBase {
    /// Material type, else the custom label.
    pub fn name(&self) -> Option<&str> {
        self.material_type
            .as_deref()
            .or_else(|| self.custom_material_name.as_deref())
    }

    /// Identity used for consolidation and narrative lists.
    pub fn label(&self) -> &str {
        self.name().unwrap_or(UNKNOWN_MATERIAL)
    }

    pub fn first_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    pub fn is_sampled(&self) -> bool {
        self.sample_collected.is_affirmative()
    }
}

/// A material observation recorded for one hazard inside one area.
pub trait MaterialObservation {
    const HAZARD: Hazard;

    fn base(&self) -> &MaterialBase;

    /// The hazard's own "suspected" radio equals "Yes".
    fn is_suspected(&self) -> bool;

    /// This hazard's observations within an area.
    fn in_area(area: &AreaSurvey) -> &[Self]
    where
        Self: Sized;
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AsbestosMaterial {
    #[serde(flatten)]
    pub base: MaterialBase,
    pub percentage_asbestos: Answer,
    pub suspected_acm: Answer,
    pub asbestos_type: Answer,
    pub friability: Answer,
    pub quantity: Answer,
    pub square_footage: Answer,
    pub quantity_type: Answer,
    pub sample_id: Answer,
}

impl MaterialObservation for AsbestosMaterial {
    const HAZARD: Hazard = Hazard::Asbestos;

    fn base(&self) -> &MaterialBase {
        &self.base
    }

    fn is_suspected(&self) -> bool {
        self.suspected_acm.is_yes()
    }

    fn in_area(area: &AreaSurvey) -> &[Self] {
        area.asbestos_materials.as_slice()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadMaterial {
    #[serde(flatten)]
    pub base: MaterialBase,
    pub percentage_lead: Answer,
    pub suspected_lead: Answer,
}

impl MaterialObservation for LeadMaterial {
    const HAZARD: Hazard = Hazard::Lead;

    fn base(&self) -> &MaterialBase {
        &self.base
    }

    fn is_suspected(&self) -> bool {
        self.suspected_lead.is_yes()
    }

    fn in_area(area: &AreaSurvey) -> &[Self] {
        area.lead_materials.as_slice()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MercuryMaterial {
    #[serde(flatten)]
    pub base: MaterialBase,
    pub suspected_mercury: Answer,
}

impl MaterialObservation for MercuryMaterial {
    const HAZARD: Hazard = Hazard::Mercury;

    fn base(&self) -> &MaterialBase {
        &self.base
    }

    fn is_suspected(&self) -> bool {
        self.suspected_mercury.is_yes()
    }

    fn in_area(area: &AreaSurvey) -> &[Self] {
        area.mercury_materials.as_slice()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SilicaMaterial {
    #[serde(flatten)]
    pub base: MaterialBase,
    pub suspected_silica: Answer,
}

impl MaterialObservation for SilicaMaterial {
    const HAZARD: Hazard = Hazard::Silica;

    fn base(&self) -> &MaterialBase {
        &self.base
    }

    fn is_suspected(&self) -> bool {
        self.suspected_silica.is_yes()
    }

    fn in_area(area: &AreaSurvey) -> &[Self] {
        area.silica_materials.as_slice()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MouldMaterial {
    #[serde(flatten)]
    pub base: MaterialBase,
}

impl MaterialObservation for MouldMaterial {
    const HAZARD: Hazard = Hazard::Mould;

    fn base(&self) -> &MaterialBase {
        &self.base
    }

    fn is_suspected(&self) -> bool {
        false
    }

    fn in_area(area: &AreaSurvey) -> &[Self] {
        area.mould_materials.as_slice()
    }
}

/// One row of the PCB electrical equipment table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PcbEquipment {
    pub table_location: Answer,
    pub table_pcb_id_info: Answer,
    pub table_pcb_content: Answer,
    pub table_manufacturer: Answer,
    pub table_electrical_equipment: Answer,
}

impl PcbEquipment {
    pub fn has_data(&self) -> bool {
        [
            &self.table_location,
            &self.table_pcb_id_info,
            &self.table_pcb_content,
            &self.table_manufacturer,
            &self.table_electrical_equipment,
        ]
        .iter()
        .any(|a| a.is_present())
    }
}

/// One row of the ODS/GWS equipment table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OdsEquipment {
    pub table_location: Answer,
    pub table_ods_gws_classification: Answer,
    pub table_refrigerant_type_quantity: Answer,
    pub table_equipment_manufacturer_type: Answer,
}

impl OdsEquipment {
    pub fn has_data(&self) -> bool {
        [
            &self.table_location,
            &self.table_ods_gws_classification,
            &self.table_refrigerant_type_quantity,
            &self.table_equipment_manufacturer_type,
        ]
        .iter()
        .any(|a| a.is_present())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeadAnimal {
    pub animal_name: Answer,
    pub animal_location: Answer,
}

/// Total count of entries dropped while reading an area's repeated groups.
pub(crate) fn skipped_entries(area: &AreaSurvey) -> usize {
    fn count<T>(e: &Entries<T>) -> usize {
        e.skipped()
    }
    count(&area.asbestos_materials)
        + count(&area.suspected_asbestos_materials)
        + count(&area.lead_materials)
        + count(&area.mercury_materials)
        + count(&area.silica_materials)
        + count(&area.mould_materials)
        + count(&area.pcb_electrical_equipment_table)
        + count(&area.ods_gws_assessment_table)
        + count(&area.dead_animals)
}

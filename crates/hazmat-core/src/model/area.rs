use super::answer::{self, text_of, Answer, Entries};
use super::material::{
    AsbestosMaterial, DeadAnimal, LeadMaterial, MercuryMaterial, MouldMaterial, OdsEquipment,
    PcbEquipment, SilicaMaterial,
};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

pub const UNKNOWN_AREA: &str = "Unknown Area";

/// Typed view over the survey answers the engine reasons about.
///
/// Every field is optional in the source document; absent or malformed values
/// read as empty answers and empty lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaSurvey {
    pub name: Answer,
    pub id: Answer,
    pub area_number: Answer,
    pub floor: Answer,
    #[serde(deserialize_with = "answer::text_list")]
    pub area_photo: Vec<String>,

    pub asbestos_materials: Entries<AsbestosMaterial>,
    pub suspected_asbestos_materials: Entries<AsbestosMaterial>,
    pub lead_materials: Entries<LeadMaterial>,
    pub mercury_materials: Entries<MercuryMaterial>,
    pub silica_materials: Entries<SilicaMaterial>,
    pub mould_materials: Entries<MouldMaterial>,
    pub pcb_electrical_equipment_table: Entries<PcbEquipment>,
    pub ods_gws_assessment_table: Entries<OdsEquipment>,
    pub dead_animals: Entries<DeadAnimal>,

    pub is_asbestos_assessed: Answer,
    pub is_lead_assessed: Answer,
    pub silica_observed: Answer,
    #[serde(deserialize_with = "answer::split_list")]
    pub silica_forms: Vec<String>,
    #[serde(deserialize_with = "answer::split_list")]
    pub suspect_lead_materials: Vec<String>,

    // Mercury
    pub mercury_observed: Answer,
    pub has_lamps: Answer,
    pub lamp_count: Answer,
    pub are_there_vials: Answer,
    pub are_there_mercury_containing_equip: Answer,
    pub will_the_mercury_containing_equipment_be_removed: Answer,
    #[serde(deserialize_with = "answer::split_list")]
    pub mercury_forms: Vec<String>,

    // Mould and pests
    pub mold_growth: Answer,
    pub pest_infestation_observed: Answer,
    #[serde(deserialize_with = "answer::one_or_many")]
    pub infestation_type_select: Vec<String>,
    pub infestation_type_other: Answer,
    pub droppings_observed: Answer,
    pub droppings_location: Answer,

    // Lighting and PCBs
    pub pcb_observed: Answer,
    pub fluorescent_fixtures: Answer,
    pub fixture_type: Answer,
    pub fixture_size: Answer,
    pub ballast_pcb_percentage: Answer,
    pub assumed_pcb_ballasts_count: Answer,
    pub hid_lights_present: Answer,
    pub hid_lights_count: Answer,
    pub recent_lighting_retrofit: Answer,
    pub is_there_emergency_lighting: Answer,
    pub liquid_filled_transformer: Answer,
    pub transformer_location: Answer,
    pub transformer_leakage_signs: Answer,
    pub wall_mounted_capacitor: Answer,
    pub wall_mounted_capacitor_count: Answer,
    pub capacitor_leakage_signs: Answer,
    pub capacitor_verified_not_pcb_text: Answer,

    // ODS/GWS
    pub ods_observed: Answer,
    pub has_air_conditioning: Answer,
    pub ac_unit_count: Answer,
    pub ac_unit_size: Answer,
    pub refrigerant_type: Answer,
    pub refrigerant_pounds: Answer,
    pub fire_extinguishing_equipment: Answer,

    // Site and project answers
    pub building_construction_year: Answer,
    pub specific_location: Answer,
    pub project_type: Answer,
    pub documents_used: Answer,
    pub client_company_name: Answer,
    pub client_address: Answer,
    pub inspection_date: Answer,
}

/// One inspected area of a report.
///
/// Holds the typed survey plus the complete, open field mapping the area was
/// built from, so schema-driven lookups can reach fields the typed view does
/// not declare.
#[derive(Debug, Clone)]
pub struct Area {
    /// 1-based position within the report.
    pub sequence: usize,
    pub survey: AreaSurvey,
    fields: Map<String, Value>,
}

impl Area {
    pub fn from_fields(sequence: usize, fields: Map<String, Value>) -> Self {
        // Every AreaSurvey field deserializes leniently, so an object never fails.
        let survey = AreaSurvey::deserialize(Value::Object(fields.clone())).unwrap_or_default();
        Self {
            sequence,
            survey,
            fields,
        }
    }

    /// Name used in consolidated tables and narratives.
    pub fn name(&self) -> &str {
        self.survey.name.or(UNKNOWN_AREA)
    }

    /// Name used in appendix listings: name, else id, else empty.
    pub fn listing_name(&self) -> &str {
        self.survey
            .name
            .as_deref()
            .or_else(|| self.survey.id.as_deref())
            .unwrap_or("")
    }

    /// Name used for per-area sections.
    pub fn section_name(&self) -> String {
        match self
            .survey
            .name
            .as_deref()
            .or_else(|| self.survey.id.as_deref())
        {
            Some(name) => name.to_string(),
            None => format!("Area {}", self.survey.area_number),
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Display text of an arbitrary field. Arrays are comma-joined.
    pub fn answer_text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().filter_map(text_of).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(","))
                }
            }
            other => text_of(other),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Serialize for Area {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn area(value: Value) -> Area {
        match value {
            Value::Object(map) => Area::from_fields(1, map),
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_typed_survey_reads_flags_and_lists() {
        let a = area(json!({
            "name": "Room 101",
            "pcbObserved": "Yes",
            "infestationTypeSelect": ["Mouse", "Bird"],
            "asbestosMaterials": [{"materialType": "Vinyl Floor Tile"}],
            "lampCount": "<=15"
        }));
        assert!(a.survey.pcb_observed.is_yes());
        assert_eq!(a.survey.infestation_type_select, vec!["Mouse", "Bird"]);
        assert_eq!(a.survey.asbestos_materials.len(), 1);
        assert_eq!(a.survey.lamp_count.as_deref(), Some("<=15"));
    }

    #[test]
    fn test_wrong_shapes_degrade_to_empty() {
        let a = area(json!({
            "name": 12,
            "asbestosMaterials": "none",
            "areaPhoto": {"url": "x"}
        }));
        assert_eq!(a.name(), "12");
        assert!(a.survey.asbestos_materials.is_empty());
        assert!(a.survey.area_photo.is_empty());
    }

    #[test]
    fn test_name_fallbacks() {
        let a = area(json!({"id": "A-7", "areaNumber": 3}));
        assert_eq!(a.name(), UNKNOWN_AREA);
        assert_eq!(a.listing_name(), "A-7");
        assert_eq!(a.section_name(), "A-7");

        let b = area(json!({"areaNumber": 3}));
        assert_eq!(b.listing_name(), "");
        assert_eq!(b.section_name(), "Area 3");
    }

    #[test]
    fn test_answer_text_joins_arrays() {
        let a = area(json!({"infestationTypeSelect": ["Mouse", "Bird"], "other": true}));
        assert_eq!(a.answer_text("infestationTypeSelect").as_deref(), Some("Mouse,Bird"));
        assert_eq!(a.answer_text("other").as_deref(), Some("true"));
        assert!(a.answer_text("missing").is_none());
    }

    #[test]
    fn test_serializes_open_fields() {
        let a = area(json!({"name": "Lobby", "customQuestion": "Yes"}));
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["customQuestion"], "Yes");
    }
}

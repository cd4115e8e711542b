use crate::classify::refrigerant::{refrigerant_class, RefrigerantClass};
use crate::model::{Area, OdsEquipment, PcbEquipment};
use serde::Serialize;

/// A PCB equipment table row that carries at least one value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PcbRow {
    pub location: String,
    pub pcb_id_info: String,
    pub pcb_content: String,
    pub manufacturer: String,
    pub electrical_equipment: String,
}

impl From<&PcbEquipment> for PcbRow {
    fn from(e: &PcbEquipment) -> Self {
        PcbRow {
            location: e.table_location.to_string(),
            pcb_id_info: e.table_pcb_id_info.to_string(),
            pcb_content: e.table_pcb_content.to_string(),
            manufacturer: e.table_manufacturer.to_string(),
            electrical_equipment: e.table_electrical_equipment.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PcbData {
    pub pcb_observed: bool,
    pub pcb_electrical_equipment_table: Vec<PcbRow>,
}

/// An ODS/GWS equipment table row that carries at least one value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OdsRow {
    pub location: String,
    pub classification: String,
    pub refrigerant_type: String,
    pub equipment_type: String,
}

impl From<&OdsEquipment> for OdsRow {
    fn from(e: &OdsEquipment) -> Self {
        OdsRow {
            location: e.table_location.to_string(),
            classification: e.table_ods_gws_classification.to_string(),
            refrigerant_type: e.table_refrigerant_type_quantity.to_string(),
            equipment_type: e.table_equipment_manufacturer_type.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OdsData {
    pub ods_observed: bool,
    pub ods_gws_assessment_table: Vec<OdsRow>,
}

pub fn collect_pcb(areas: &[Area]) -> PcbData {
    PcbData {
        pcb_observed: areas.iter().any(|a| a.survey.pcb_observed.is_yes()),
        pcb_electrical_equipment_table: areas
            .iter()
            .flat_map(|a| a.survey.pcb_electrical_equipment_table.iter())
            .filter(|e| e.has_data())
            .map(PcbRow::from)
            .collect(),
    }
}

pub fn collect_ods(areas: &[Area]) -> OdsData {
    OdsData {
        ods_observed: areas.iter().any(|a| a.survey.ods_observed.is_yes()),
        ods_gws_assessment_table: areas
            .iter()
            .flat_map(|a| a.survey.ods_gws_assessment_table.iter())
            .filter(|e| e.has_data())
            .map(OdsRow::from)
            .collect(),
    }
}

/// HID light count summed over flagged areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidCount {
    Counted(u64),
    /// Flagged but no area gave a usable count.
    Unknown,
}

impl Serialize for HidCount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HidCount::Counted(n) => serializer.serialize_u64(*n),
            HidCount::Unknown => serializer.serialize_str("N/A"),
        }
    }
}

/// Lighting and electrical answers folded across areas for the PCB narrative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lighting {
    pub fluorescent_fixtures: bool,
    /// First fixture type from an area with fluorescent fixtures, else "N/A".
    pub fixture_type: String,
    pub fixture_size: String,
    pub hid_lights_present: bool,
    pub hid_lights_count: HidCount,
    pub recent_lighting_retrofit: bool,
    pub liquid_filled_transformer: bool,
    /// First transformer location, else "the project areas".
    pub transformer_location: String,
    pub wall_mounted_capacitor: bool,
    /// Last capacitor wording supplied by a flagged area, else "one (1)".
    pub capacitor_verified_not_pcb_text: String,
    pub emergency_lighting: bool,
    pub emergency_lighting_location: String,
}

/// Leading integer of a count answer ("12", "12 fixtures").
///
/// Counts too large for `u64` saturate.
fn leading_count(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let digits = &raw[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

pub fn lighting(areas: &[Area]) -> Lighting {
    let mut fixture_type = None;
    let mut fixture_size = None;
    let mut hid_total = 0u64;
    let mut transformer_location = None;
    let mut capacitor_text = None;
    let mut emergency_location = None;

    for area in areas {
        let s = &area.survey;
        if s.fluorescent_fixtures.is_yes() {
            fixture_type = fixture_type.or(s.fixture_type.as_deref());
            fixture_size = fixture_size.or(s.fixture_size.as_deref());
        }
        if s.hid_lights_present.is_yes() {
            let count = s.hid_lights_count.as_deref().and_then(leading_count).unwrap_or(0);
            hid_total = hid_total.saturating_add(count);
        }
        if s.liquid_filled_transformer.is_yes() {
            transformer_location = transformer_location.or(s.transformer_location.as_deref());
        }
        if s.wall_mounted_capacitor.is_yes() {
            if let Some(text) = s.capacitor_verified_not_pcb_text.as_deref() {
                capacitor_text = Some(text);
            }
        }
        if s.is_there_emergency_lighting.is_yes() {
            // the last flagged area with a usable name wins
            if let Some(place) = s.specific_location.trimmed().or(s.name.trimmed()) {
                emergency_location = Some(place);
            }
        }
    }

    let any_yes = |pick: fn(&Area) -> bool| areas.iter().any(pick);
    let hid_lights_present = any_yes(|a| a.survey.hid_lights_present.is_yes());
    let emergency_lighting = any_yes(|a| a.survey.is_there_emergency_lighting.is_yes());

    Lighting {
        fluorescent_fixtures: any_yes(|a| a.survey.fluorescent_fixtures.is_yes()),
        fixture_type: fixture_type.unwrap_or("N/A").to_string(),
        fixture_size: fixture_size.unwrap_or("N/A").to_string(),
        hid_lights_present,
        hid_lights_count: if hid_lights_present && hid_total == 0 {
            HidCount::Unknown
        } else {
            HidCount::Counted(hid_total)
        },
        recent_lighting_retrofit: any_yes(|a| a.survey.recent_lighting_retrofit.is_yes()),
        liquid_filled_transformer: any_yes(|a| a.survey.liquid_filled_transformer.is_yes()),
        transformer_location: transformer_location
            .unwrap_or("the project areas")
            .to_string(),
        wall_mounted_capacitor: any_yes(|a| a.survey.wall_mounted_capacitor.is_yes()),
        capacitor_verified_not_pcb_text: capacitor_text.unwrap_or("one (1)").to_string(),
        emergency_lighting,
        emergency_lighting_location: match emergency_location {
            Some(place) => place.to_string(),
            None if emergency_lighting => "throughout the project areas".to_string(),
            None => String::new(),
        },
    }
}

/// Air conditioning narrative fields, taken from the first area with AC.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirConditioning {
    pub units_present: bool,
    pub count: String,
    pub size: String,
    pub area: String,
    pub room: String,
    pub refrigerant_type: String,
    pub refrigerant_pounds: String,
    pub refrigerant_class: Option<RefrigerantClass>,
    pub fire_extinguishing_equipment: bool,
}

impl AirConditioning {
    pub fn class_1_or_2(&self) -> bool {
        self.refrigerant_class.is_some()
    }
}

/// Room and refrigerant prefer the area's own ODS table, then the
/// consolidated table; explicit refrigerant answers override both.
pub fn air_conditioning(areas: &[Area], ods: &OdsData) -> AirConditioning {
    let fire_extinguishing_equipment = areas
        .iter()
        .any(|a| a.survey.fire_extinguishing_equipment.is_yes());

    let Some(first) = areas.iter().find(|a| a.survey.has_air_conditioning.is_yes()) else {
        return AirConditioning {
            fire_extinguishing_equipment,
            ..Default::default()
        };
    };
    let s = &first.survey;

    let mut room = String::new();
    let mut refrigerant = String::new();
    if let Some(equip) = s.ods_gws_assessment_table.iter().next() {
        room = equip.table_location.to_string();
        refrigerant = equip.table_refrigerant_type_quantity.to_string();
    }
    if room.is_empty() {
        if let Some(row) = ods.ods_gws_assessment_table.first() {
            room = row.location.clone();
            if refrigerant.is_empty() {
                refrigerant = row.refrigerant_type.clone();
            }
        }
    }
    if let Some(explicit) = s.refrigerant_type.as_deref() {
        refrigerant = explicit.to_string();
    }

    AirConditioning {
        units_present: true,
        count: s.ac_unit_count.to_string(),
        size: s.ac_unit_size.to_string(),
        area: first.listing_name().to_string(),
        room,
        refrigerant_class: refrigerant_class(&refrigerant),
        refrigerant_type: refrigerant,
        refrigerant_pounds: s.refrigerant_pounds.to_string(),
        fire_extinguishing_equipment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::area;
    use serde_json::json;

    #[test]
    fn test_pcb_rows_need_data() {
        let areas = vec![area(json!({
            "pcbObserved": "Yes",
            "pcbElectricalEquipmentTable": [
                {"tableLocation": ""},
                {"tableLocation": "Electrical Room", "tableManufacturer": "GE"}
            ]
        }))];
        let pcb = collect_pcb(&areas);
        assert!(pcb.pcb_observed);
        assert_eq!(pcb.pcb_electrical_equipment_table.len(), 1);
        assert_eq!(pcb.pcb_electrical_equipment_table[0].manufacturer, "GE");
    }

    #[test]
    fn test_lighting_defaults() {
        let l = lighting(&[area(json!({"name": "Hall"}))]);
        assert!(!l.fluorescent_fixtures);
        assert_eq!(l.fixture_type, "N/A");
        assert_eq!(l.transformer_location, "the project areas");
        assert_eq!(l.capacitor_verified_not_pcb_text, "one (1)");
        assert_eq!(l.hid_lights_count, HidCount::Counted(0));
        assert_eq!(l.emergency_lighting_location, "");
    }

    #[test]
    fn test_lighting_folds_across_areas() {
        let areas = vec![
            area(json!({"name": "A", "hidLightsPresent": "Yes", "hidLightsCount": "4",
                "fluorescentFixtures": "Yes", "fixtureSize": "4 ft",
                "isThereEmergencyLighting": "Yes"})),
            area(json!({"name": "B", "hidLightsPresent": "Yes", "hidLightsCount": 3,
                "fluorescentFixtures": "Yes", "fixtureType": "T8", "fixtureSize": "2 ft",
                "isThereEmergencyLighting": "Yes", "specificLocation": "Stairwell 2"})),
        ];
        let l = lighting(&areas);
        assert_eq!(l.hid_lights_count, HidCount::Counted(7));
        assert_eq!(l.fixture_type, "T8");
        assert_eq!(l.fixture_size, "4 ft");
        assert_eq!(l.emergency_lighting_location, "Stairwell 2");
    }

    #[test]
    fn test_hid_flag_without_count_is_unknown() {
        let l = lighting(&[area(json!({"hidLightsPresent": "Yes"}))]);
        assert_eq!(l.hid_lights_count, HidCount::Unknown);
        assert_eq!(serde_json::to_value(l.hid_lights_count).unwrap(), json!("N/A"));
    }

    #[test]
    fn test_hid_total_saturates() {
        let max = u64::MAX.to_string();
        let areas = vec![
            area(json!({"name": "A", "hidLightsPresent": "Yes", "hidLightsCount": max})),
            area(json!({"name": "B", "hidLightsPresent": "Yes", "hidLightsCount": max})),
        ];
        assert_eq!(lighting(&areas).hid_lights_count, HidCount::Counted(u64::MAX));
    }

    #[test]
    fn test_oversized_count_saturates() {
        assert_eq!(leading_count("123456789012345678901234 lamps"), Some(u64::MAX));
        assert_eq!(leading_count(" 12 fixtures"), Some(12));
        assert_eq!(leading_count("several"), None);

        let l = lighting(&[area(json!({
            "hidLightsPresent": "Yes",
            "hidLightsCount": "999999999999999999999999"
        }))]);
        assert_eq!(l.hid_lights_count, HidCount::Counted(u64::MAX));
    }

    #[test]
    fn test_emergency_lighting_generic_location() {
        let l = lighting(&[area(json!({"isThereEmergencyLighting": "Yes"}))]);
        assert_eq!(l.emergency_lighting_location, "throughout the project areas");
    }

    #[test]
    fn test_air_conditioning_prefers_area_table_then_answers() {
        let areas = vec![
            area(json!({"name": "Roof", "odsGwsAssessmentTable": [
                {"tableLocation": "Roof deck", "tableRefrigerantTypeQuantity": "R-22"}
            ]})),
            area(json!({"name": "Office", "hasAirConditioning": "Yes", "acUnitCount": 2,
                "refrigerantType": "HCFC-22", "refrigerantPounds": "12"})),
        ];
        let ods = collect_ods(&areas);
        let ac = air_conditioning(&areas, &ods);
        assert!(ac.units_present);
        assert_eq!(ac.area, "Office");
        assert_eq!(ac.room, "Roof deck");
        assert_eq!(ac.count, "2");
        assert_eq!(ac.refrigerant_type, "HCFC-22");
        assert_eq!(ac.refrigerant_class, Some(RefrigerantClass::Class2));
        assert!(ac.class_1_or_2());
    }

    #[test]
    fn test_no_air_conditioning() {
        let areas = vec![area(json!({"fireExtinguishingEquipment": "Yes"}))];
        let ac = air_conditioning(&areas, &collect_ods(&areas));
        assert!(!ac.units_present);
        assert!(ac.fire_extinguishing_equipment);
        assert!(ac.refrigerant_class.is_none());
    }
}

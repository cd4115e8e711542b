use crate::classify::AsbestosClass;
use crate::model::{Area, AsbestosMaterial};
use serde::Serialize;
use std::collections::HashMap;

/// Unit codes for estimated quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUnit {
    SquareFeet,
    LinearFeet,
    Each,
}

impl QuantityUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityUnit::SquareFeet => "SF",
            QuantityUnit::LinearFeet => "LF",
            QuantityUnit::Each => "EA",
        }
    }

    /// Map a free-form quantity type ("Square Feet", "linear ft", "Each").
    pub fn from_quantity_type(raw: &str) -> Option<Self> {
        let lower = raw.to_lowercase();
        if lower.contains("square") {
            Some(QuantityUnit::SquareFeet)
        } else if lower.contains("linear") {
            Some(QuantityUnit::LinearFeet)
        } else if lower.contains("each") {
            Some(QuantityUnit::Each)
        } else {
            None
        }
    }

    /// Explicit quantity type first; a square footage answer implies SF.
    pub fn for_material(material: &AsbestosMaterial) -> Option<Self> {
        material
            .quantity_type
            .as_deref()
            .and_then(Self::from_quantity_type)
            .or_else(|| {
                material
                    .square_footage
                    .is_present()
                    .then_some(QuantityUnit::SquareFeet)
            })
    }
}

/// Appendix A row: one asbestos material occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceRow {
    pub floor: String,
    pub location: String,
    pub system: String,
    pub material: String,
    pub description: String,
    pub classification: AsbestosClass,
    pub friability: String,
    pub condition: String,
    pub est_quantity: String,
    pub unit: String,
}

impl OccurrenceRow {
    fn new(area: &Area, material: &AsbestosMaterial) -> Self {
        let base = &material.base;
        OccurrenceRow {
            floor: area.survey.floor.to_string(),
            location: area.listing_name().to_string(),
            system: base.location.to_string(),
            material: base.name().unwrap_or("").to_string(),
            description: base.description.to_string(),
            classification: material.classification(),
            friability: material.friability.to_string(),
            condition: base.condition.to_string(),
            est_quantity: material
                .quantity
                .as_deref()
                .or_else(|| material.square_footage.as_deref())
                .unwrap_or("")
                .to_string(),
            unit: QuantityUnit::for_material(material)
                .map(|u| u.as_str())
                .unwrap_or("")
                .to_string(),
        }
    }
}

/// Summary of ACM occurrences, grouped by floor and location.
///
/// Groups appear in the order their first row was seen; rows keep report order
/// within a group.
pub fn occurrence_summary(areas: &[Area]) -> Vec<OccurrenceRow> {
    let mut groups: Vec<Vec<OccurrenceRow>> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for area in areas {
        for material in &area.survey.asbestos_materials {
            let row = OccurrenceRow::new(area, material);
            let key = (row.floor.clone(), row.location.clone());
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(row);
        }
    }

    groups.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::area_at;
    use serde_json::json;

    #[test]
    fn test_unit_mapping() {
        assert_eq!(
            QuantityUnit::from_quantity_type("Square Feet"),
            Some(QuantityUnit::SquareFeet)
        );
        assert_eq!(
            QuantityUnit::from_quantity_type("LINEAR ft"),
            Some(QuantityUnit::LinearFeet)
        );
        assert_eq!(QuantityUnit::from_quantity_type("each"), Some(QuantityUnit::Each));
        assert_eq!(QuantityUnit::from_quantity_type("cubic yards"), None);
    }

    #[test]
    fn test_square_footage_implies_sf() {
        let areas = vec![area_at(1, json!({
            "name": "Boiler Room",
            "floor": "B1",
            "asbestosMaterials": [
                {"materialType": "Pipe Insulation", "location": "Heating", "squareFootage": "30"},
                {"materialType": "Tank Wrap", "quantity": "2", "quantityType": "Each", "squareFootage": "9"},
                {"materialType": "Gasket", "quantity": "4"}
            ]
        }))];
        let rows = occurrence_summary(&areas);
        assert_eq!(rows[0].unit, "SF");
        assert_eq!(rows[0].est_quantity, "30");
        assert_eq!(rows[0].system, "Heating");
        assert_eq!(rows[1].unit, "EA");
        assert_eq!(rows[1].est_quantity, "2");
        assert_eq!(rows[2].unit, "");
    }

    #[test]
    fn test_rows_grouped_by_floor_and_location() {
        let areas = vec![
            area_at(1, json!({"name": "Hall", "floor": "1", "asbestosMaterials": [{"materialType": "Plaster"}]})),
            area_at(2, json!({"name": "Office", "floor": "1", "asbestosMaterials": [{"materialType": "Tile"}]})),
            area_at(3, json!({"name": "Hall", "floor": "1", "asbestosMaterials": [{"materialType": "Mastic", "percentageAsbestos": "3"}]})),
        ];
        let rows = occurrence_summary(&areas);
        let materials: Vec<&str> = rows.iter().map(|r| r.material.as_str()).collect();
        assert_eq!(materials, vec!["Plaster", "Mastic", "Tile"]);
        assert_eq!(rows[1].classification, AsbestosClass::Acm);
    }
}

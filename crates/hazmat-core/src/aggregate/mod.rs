//! Cross-area aggregation.
//!
//! Every builder here is a fold over the normalized area sequence. Areas are
//! visited in report order and list outputs preserve first-seen order, so the
//! same input always yields the same output.

pub mod equipment;
pub mod flags;
pub mod lists;
pub mod pest;

use crate::model::{
    Area, AsbestosMaterial, LeadMaterial, MaterialObservation, MercuryMaterial, MouldMaterial,
    SilicaMaterial,
};
use serde::Serialize;
use std::collections::HashMap;
use std::marker::PhantomData;

pub use equipment::{AirConditioning, Lighting, OdsData, OdsRow, PcbData, PcbRow};
pub use flags::{AsbestosMaterialFlags, SiteFlags};
pub use lists::{MaterialLists, Occurrences};
pub use pest::{PestStatement, PestSummary};

/// Area display for a row found in more than one area.
pub const SEE_APPENDIX: &str = "See Appendix";

/// One material across all areas of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedRow {
    pub material: String,
    /// The single area name, or [`SEE_APPENDIX`] when several areas share the material.
    pub areas: String,
    /// Distinct non-empty locations, first-seen order.
    pub locations: Vec<String>,
    /// Distinct non-empty descriptions, first-seen order.
    pub descriptions: Vec<String>,
    /// First photograph encountered for this material.
    pub photo: Option<String>,
}

#[derive(Debug)]
struct RowAccumulator {
    material: String,
    areas: Vec<String>,
    locations: Vec<String>,
    descriptions: Vec<String>,
    photo: Option<String>,
}

fn insert_unique(set: &mut Vec<String>, value: &str) {
    if !set.iter().any(|v| v == value) {
        set.push(value.to_string());
    }
}

/// Fold of one hazard's material observations into consolidated rows.
///
/// Scanning the same area twice leaves the rows unchanged.
#[derive(Debug)]
pub struct Consolidator<M> {
    index: HashMap<String, usize>,
    rows: Vec<RowAccumulator>,
    _hazard: PhantomData<M>,
}

impl<M: MaterialObservation> Default for Consolidator<M> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            rows: Vec::new(),
            _hazard: PhantomData,
        }
    }
}

impl<M: MaterialObservation> Consolidator<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan(&mut self, area: &Area) {
        let area_name = area.name();
        for material in M::in_area(&area.survey) {
            let base = material.base();
            let label = base.label();
            let slot = match self.index.get(label) {
                Some(&slot) => slot,
                None => {
                    self.rows.push(RowAccumulator {
                        material: label.to_string(),
                        areas: Vec::new(),
                        locations: Vec::new(),
                        descriptions: Vec::new(),
                        photo: None,
                    });
                    self.index.insert(label.to_string(), self.rows.len() - 1);
                    self.rows.len() - 1
                }
            };

            let row = &mut self.rows[slot];
            insert_unique(&mut row.areas, area_name);
            if let Some(location) = base.location.as_deref() {
                insert_unique(&mut row.locations, location);
            }
            if let Some(description) = base.description.as_deref() {
                insert_unique(&mut row.descriptions, description);
            }
            if row.photo.is_none() {
                row.photo = base.first_photo().map(str::to_string);
            }
        }
    }

    pub fn finish(self) -> Vec<ConsolidatedRow> {
        self.rows
            .into_iter()
            .map(|row| ConsolidatedRow {
                areas: match row.areas.as_slice() {
                    [only] => only.clone(),
                    [] => String::new(),
                    _ => SEE_APPENDIX.to_string(),
                },
                material: row.material,
                locations: row.locations,
                descriptions: row.descriptions,
                photo: row.photo,
            })
            .collect()
    }
}

/// Consolidated rows for one hazard across `areas`.
pub fn consolidate<M: MaterialObservation>(areas: &[Area]) -> Vec<ConsolidatedRow> {
    let mut consolidator = Consolidator::<M>::new();
    for area in areas {
        consolidator.scan(area);
    }
    let rows = consolidator.finish();
    tracing::debug!(hazard = %M::HAZARD, rows = rows.len(), "consolidated materials");
    rows
}

/// Everything the narrative composer and assembler need from the areas.
#[derive(Debug, Clone)]
pub struct Aggregates {
    pub asbestos_rows: Vec<ConsolidatedRow>,
    pub lead_rows: Vec<ConsolidatedRow>,
    pub mercury_rows: Vec<ConsolidatedRow>,
    pub silica_rows: Vec<ConsolidatedRow>,
    pub mould_rows: Vec<ConsolidatedRow>,
    pub lists: MaterialLists,
    pub pcb: PcbData,
    pub ods: OdsData,
    pub lighting: Lighting,
    pub air_conditioning: AirConditioning,
    pub pest: PestSummary,
    pub flags: SiteFlags,
}

impl Aggregates {
    pub fn asbestos_found(&self) -> bool {
        !self.lists.asbestos.all.is_empty() || !self.lists.asbestos.suspected.is_empty()
    }

    pub fn lead_found(&self) -> bool {
        !self.lists.lead.all.is_empty() || !self.lists.lead.suspected.is_empty()
    }

    pub fn mercury_found(&self) -> bool {
        !self.lists.mercury.all.is_empty() || !self.lists.mercury.suspected.is_empty()
    }

    pub fn silica_found(&self) -> bool {
        !self.lists.silica.all.is_empty() || !self.lists.silica.suspected.is_empty()
    }

    pub fn mould_found(&self) -> bool {
        !self.mould_rows.is_empty()
    }
}

/// Run every cross-area fold.
///
/// `project_type` is the project record's type, used for the renovation and
/// demolition flags.
pub fn aggregate(areas: &[Area], project_type: Option<&str>) -> Aggregates {
    let ods = equipment::collect_ods(areas);
    let air_conditioning = equipment::air_conditioning(areas, &ods);
    Aggregates {
        asbestos_rows: consolidate::<AsbestosMaterial>(areas),
        lead_rows: consolidate::<LeadMaterial>(areas),
        mercury_rows: consolidate::<MercuryMaterial>(areas),
        silica_rows: consolidate::<SilicaMaterial>(areas),
        mould_rows: consolidate::<MouldMaterial>(areas),
        lists: MaterialLists::collect(areas),
        pcb: equipment::collect_pcb(areas),
        ods,
        lighting: equipment::lighting(areas),
        air_conditioning,
        pest: pest::summarize(areas),
        flags: SiteFlags::collect(areas, project_type),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::Area;
    use serde_json::Value;

    pub fn area(value: Value) -> Area {
        area_at(1, value)
    }

    pub fn area_at(sequence: usize, value: Value) -> Area {
        match value {
            Value::Object(map) => Area::from_fields(sequence, map),
            _ => panic!("area fixture must be an object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::area;
    use super::*;
    use serde_json::json;

    fn drywall(location: &str, description: &str) -> serde_json::Value {
        json!({
            "materialType": "Drywall Joint Compound",
            "location": location,
            "description": description,
            "photos": []
        })
    }

    #[test]
    fn test_same_area_twice_is_idempotent() {
        let room = area(json!({
            "name": "Room 101",
            "asbestosMaterials": [drywall("North wall", "Painted")]
        }));
        let mut c = Consolidator::<AsbestosMaterial>::new();
        c.scan(&room);
        c.scan(&room);
        let rows = c.finish();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].areas, "Room 101");
        assert_eq!(rows[0].locations, vec!["North wall"]);
        assert_eq!(rows[0].descriptions, vec!["Painted"]);
    }

    #[test]
    fn test_multiple_areas_show_placeholder() {
        let areas = vec![
            area(json!({"name": "Room 101", "asbestosMaterials": [drywall("North wall", "")]})),
            area(json!({"name": "Room 102", "asbestosMaterials": [drywall("South wall", "")]})),
        ];
        let rows = consolidate::<AsbestosMaterial>(&areas);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].areas, SEE_APPENDIX);
        assert_eq!(rows[0].locations, vec!["North wall", "South wall"]);
        assert!(rows[0].descriptions.is_empty());
    }

    #[test]
    fn test_first_photo_is_kept() {
        let areas = vec![area(json!({
            "name": "Lobby",
            "leadMaterials": [
                {"materialType": "White Paint"},
                {"materialType": "White Paint", "photos": ["a.jpg", "b.jpg"]},
                {"materialType": "White Paint", "photos": ["c.jpg"]}
            ]
        }))];
        let rows = consolidate::<LeadMaterial>(&areas);
        assert_eq!(rows[0].photo.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn test_labels_are_case_sensitive_and_ordered() {
        let areas = vec![area(json!({
            "name": "Lobby",
            "mouldMaterials": [
                {"materialType": "Drywall"},
                {"materialType": "drywall"},
                {"customMaterialName": "Ceiling Tile"},
                {}
            ]
        }))];
        let rows = consolidate::<MouldMaterial>(&areas);
        let labels: Vec<&str> = rows.iter().map(|r| r.material.as_str()).collect();
        assert_eq!(labels, vec!["Drywall", "drywall", "Ceiling Tile", "Unknown Material"]);
    }

    #[test]
    fn test_found_flags() {
        let areas = vec![area(json!({
            "name": "Lobby",
            "suspectedAsbestosMaterials": [{"materialType": "Pipe Wrap"}],
            "mouldMaterials": [{"materialType": "Drywall"}]
        }))];
        let agg = aggregate(&areas, None);
        assert!(agg.asbestos_found());
        assert!(agg.asbestos_rows.is_empty());
        assert!(!agg.lead_found());
        assert!(agg.mould_found());
    }
}

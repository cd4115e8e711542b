use crate::model::{
    Area, AsbestosMaterial, LeadMaterial, MaterialObservation, MercuryMaterial, SilicaMaterial,
};
use serde::Serialize;

/// "Material (Area)" occurrence lists for one hazard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrences {
    /// First occurrence of each label, for the summary table.
    pub first_seen: Vec<String>,
    /// Suspected occurrences, one per label.
    pub suspected: Vec<String>,
    /// Every occurrence, repeats included.
    pub all: Vec<String>,
}

/// Keeps one entry per material label, remembering labels already taken.
#[derive(Debug, Default)]
struct LabelledList {
    labels: Vec<String>,
    entries: Vec<String>,
}

impl LabelledList {
    fn push_once(&mut self, label: &str, entry: String) {
        if !self.labels.iter().any(|l| l == label) {
            self.labels.push(label.to_string());
            self.entries.push(entry);
        }
    }
}

fn with_area(label: &str, area: &Area) -> String {
    format!("{label} ({})", area.name())
}

impl Occurrences {
    fn collect<M: MaterialObservation>(areas: &[Area]) -> Self {
        let mut first_seen = LabelledList::default();
        let mut suspected = LabelledList::default();
        let mut all = Vec::new();

        for area in areas {
            for material in M::in_area(&area.survey) {
                let label = material.base().label();
                let entry = with_area(label, area);
                first_seen.push_once(label, entry.clone());
                if material.is_suspected() {
                    suspected.push_once(label, entry.clone());
                }
                all.push(entry);
            }
        }

        Occurrences {
            first_seen: first_seen.entries,
            suspected: suspected.entries,
            all,
        }
    }

    /// Asbestos also counts each area's separately recorded suspected materials.
    fn collect_asbestos(areas: &[Area]) -> Self {
        let mut first_seen = LabelledList::default();
        let mut suspected = LabelledList::default();
        let mut all = Vec::new();

        for area in areas {
            for material in AsbestosMaterial::in_area(&area.survey) {
                let label = material.base.label();
                let entry = with_area(label, area);
                first_seen.push_once(label, entry.clone());
                if material.is_suspected() {
                    suspected.push_once(label, entry.clone());
                }
                all.push(entry);
            }
            for material in &area.survey.suspected_asbestos_materials {
                let label = material.base.label();
                suspected.push_once(label, with_area(label, area));
            }
        }

        Occurrences {
            first_seen: first_seen.entries,
            suspected: suspected.entries,
            all,
        }
    }
}

/// Occurrence lists per hazard plus the label-only summary lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLists {
    pub asbestos: Occurrences,
    pub lead: Occurrences,
    pub mercury: Occurrences,
    pub silica: Occurrences,
    /// Material types of suspected lead materials, unique.
    pub suspect_lead_types: Vec<String>,
    /// Mercury material labels, unique.
    pub mercury_labels: Vec<String>,
    /// Silica material labels, unique.
    pub silica_labels: Vec<String>,
}

impl MaterialLists {
    pub fn collect(areas: &[Area]) -> Self {
        let mut suspect_lead_types = Vec::new();
        for area in areas {
            for material in area.survey.lead_materials.iter().filter(|m| m.is_suspected()) {
                if let Some(kind) = material.base.material_type.as_deref() {
                    super::insert_unique(&mut suspect_lead_types, kind);
                }
            }
        }

        MaterialLists {
            asbestos: Occurrences::collect_asbestos(areas),
            lead: Occurrences::collect::<LeadMaterial>(areas),
            mercury: Occurrences::collect::<MercuryMaterial>(areas),
            silica: Occurrences::collect::<SilicaMaterial>(areas),
            suspect_lead_types,
            mercury_labels: unique_names::<MercuryMaterial>(areas),
            silica_labels: unique_names::<SilicaMaterial>(areas),
        }
    }
}

/// Named materials only; the "Unknown Material" fallback is not listed.
fn unique_names<M: MaterialObservation>(areas: &[Area]) -> Vec<String> {
    let mut names = Vec::new();
    for area in areas {
        for material in M::in_area(&area.survey) {
            if let Some(name) = material.base().name().filter(|n| !n.trim().is_empty()) {
                super::insert_unique(&mut names, name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::area;
    use serde_json::json;

    #[test]
    fn test_first_seen_and_all_occurrences() {
        let areas = vec![
            area(json!({"name": "Room 1", "leadMaterials": [
                {"materialType": "White Paint"},
                {"materialType": "Grey Paint", "suspectedLead": "Yes"}
            ]})),
            area(json!({"name": "Room 2", "leadMaterials": [
                {"materialType": "White Paint", "suspectedLead": "Yes"}
            ]})),
        ];
        let lists = MaterialLists::collect(&areas);
        assert_eq!(
            lists.lead.first_seen,
            vec!["White Paint (Room 1)", "Grey Paint (Room 1)"]
        );
        assert_eq!(lists.lead.all.len(), 3);
        assert_eq!(
            lists.lead.suspected,
            vec!["Grey Paint (Room 1)", "White Paint (Room 2)"]
        );
        assert_eq!(lists.suspect_lead_types, vec!["Grey Paint", "White Paint"]);
    }

    #[test]
    fn test_dedup_is_by_exact_label() {
        let areas = vec![area(json!({"name": "Lobby", "silicaMaterials": [
            {"materialType": "Concrete Block"},
            {"materialType": "Concrete"}
        ]}))];
        let lists = MaterialLists::collect(&areas);
        assert_eq!(lists.silica.first_seen.len(), 2);
        assert_eq!(lists.silica_labels, vec!["Concrete Block", "Concrete"]);
    }

    #[test]
    fn test_asbestos_suspected_includes_separate_list() {
        let areas = vec![area(json!({
            "name": "Boiler Room",
            "asbestosMaterials": [{"materialType": "Pipe Wrap", "suspectedAcm": "Yes"}],
            "suspectedAsbestosMaterials": [
                {"materialType": "Pipe Wrap"},
                {"materialType": "Tank Insulation"}
            ]
        }))];
        let lists = MaterialLists::collect(&areas);
        assert_eq!(
            lists.asbestos.suspected,
            vec!["Pipe Wrap (Boiler Room)", "Tank Insulation (Boiler Room)"]
        );
        assert_eq!(lists.asbestos.all, vec!["Pipe Wrap (Boiler Room)"]);
    }

    #[test]
    fn test_unnamed_materials_skip_label_lists() {
        let areas = vec![area(json!({"mercuryMaterials": [{"location": "Hall"}]}))];
        let lists = MaterialLists::collect(&areas);
        assert!(lists.mercury_labels.is_empty());
        assert_eq!(lists.mercury.all, vec!["Unknown Material (Unknown Area)"]);
    }
}

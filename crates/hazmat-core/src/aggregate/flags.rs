use crate::classify::asbestos::{is_friable, is_non_friable};
use crate::model::{Area, AsbestosMaterial, LeadMaterial};
use serde::Serialize;

/// Section 3.1.1 switches derived from asbestos material names, found or suspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsbestosMaterialFlags {
    /// Texture, stucco or plaster finishes.
    pub texture_coat: bool,
    pub sprayed_fireproofing: bool,
    pub ceiling_tiles: bool,
    pub drywall_joint_compound: bool,
    pub refractory_sampled: bool,
    pub refractory_not_sampled: bool,
}

impl AsbestosMaterialFlags {
    fn observe(&mut self, material: &AsbestosMaterial, from_suspected_list: bool) {
        let Some(name) = material.base.name() else {
            return;
        };
        let lower = name.trim().to_lowercase();
        if lower.is_empty() {
            return;
        }
        let has = |needle: &str| lower.contains(needle);

        if has("texture") || has("stucco") || has("plaster") {
            self.texture_coat = true;
        }
        if has("fireproofing") {
            self.sprayed_fireproofing = true;
        }
        if has("ceiling tile") {
            self.ceiling_tiles = true;
        }
        if has("joint compound") || has("drywall joint") || has("taping compound") {
            self.drywall_joint_compound = true;
        }
        if has("refractory") {
            if refractory_was_sampled(material, from_suspected_list) {
                self.refractory_sampled = true;
            } else {
                self.refractory_not_sampled = true;
            }
        }
    }
}

/// Explicit sample answers win; otherwise a found material with a sample
/// number or a result counts as sampled.
fn refractory_was_sampled(material: &AsbestosMaterial, from_suspected_list: bool) -> bool {
    let collected = &material.base.sample_collected;
    if collected.is_affirmative() {
        return true;
    }
    let has_sample_evidence = material.base.sample_no.is_present()
        || material.sample_id.is_present()
        || material.percentage_asbestos.is_present();
    !from_suspected_list && !collected.is_negative() && has_sample_evidence
}

/// Some lead material is explicitly unsampled and none is sampled or suspected.
fn lead_unknown_disturbance(areas: &[Area]) -> bool {
    let mut sampled_or_suspected = false;
    let mut unsampled_not_suspected = false;
    for material in areas.iter().flat_map(|a| a.survey.lead_materials.iter()) {
        if material.base.is_sampled() || suspected_loosely(material) {
            sampled_or_suspected = true;
        } else if material.base.sample_collected.is_negative() {
            unsampled_not_suspected = true;
        }
    }
    unsampled_not_suspected && !sampled_or_suspected
}

fn suspected_loosely(material: &LeadMaterial) -> bool {
    material
        .suspected_lead
        .trimmed()
        .is_some_and(|s| s.eq_ignore_ascii_case("yes"))
}

/// Report-wide switches the narrative and template branch on.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteFlags {
    pub mould_growth_observed: bool,
    /// Areas with the growth flag and at least one mould row, comma-joined.
    pub mould_areas: String,
    pub mould_contamination: bool,
    pub mould_locations: Vec<String>,
    pub is_after_1980_building: bool,
    pub lead_unknown_disturbance: bool,
    pub is_renovation: bool,
    pub is_demolition: bool,
    pub asbestos_materials: AsbestosMaterialFlags,
    /// Friable asbestos material labels, comma-joined; absent when none.
    pub friable_materials: Option<String>,
    pub non_friable_materials: Option<String>,
}

impl SiteFlags {
    pub fn collect(areas: &[Area], project_type: Option<&str>) -> Self {
        let mouldy: Vec<&Area> = areas
            .iter()
            .filter(|a| a.survey.mold_growth.is_yes() && !a.survey.mould_materials.is_empty())
            .collect();
        let mould_locations = mouldy
            .iter()
            .flat_map(|a| a.survey.mould_materials.iter())
            .filter_map(|m| m.base.location.trimmed())
            .map(str::to_string)
            .collect();

        let mut asbestos_materials = AsbestosMaterialFlags::default();
        for area in areas {
            for material in &area.survey.asbestos_materials {
                asbestos_materials.observe(material, false);
            }
            for material in &area.survey.suspected_asbestos_materials {
                asbestos_materials.observe(material, true);
            }
        }

        let project_type = project_type.unwrap_or("").trim().to_lowercase();

        SiteFlags {
            mould_growth_observed: areas.iter().any(|a| a.survey.mold_growth.is_yes()),
            mould_areas: mouldy
                .iter()
                .map(|a| a.section_name())
                .collect::<Vec<_>>()
                .join(", "),
            mould_contamination: !mouldy.is_empty(),
            mould_locations,
            is_after_1980_building: areas
                .iter()
                .any(|a| a.survey.building_construction_year.as_deref() == Some("After 1980")),
            lead_unknown_disturbance: lead_unknown_disturbance(areas),
            is_renovation: project_type == "renovations or building demolition",
            is_demolition: project_type == "demolition",
            asbestos_materials,
            friable_materials: asbestos_labels_where(areas, is_friable),
            non_friable_materials: asbestos_labels_where(areas, is_non_friable),
        }
    }
}

fn asbestos_labels_where(areas: &[Area], keep: fn(&str) -> bool) -> Option<String> {
    let mut labels = Vec::new();
    for area in areas {
        for material in &area.survey.asbestos_materials {
            if let Some(name) = material.base.name().filter(|n| keep(n)) {
                super::insert_unique(&mut labels, name);
            }
        }
    }
    if labels.is_empty() {
        None
    } else {
        Some(labels.join(", "))
    }
}

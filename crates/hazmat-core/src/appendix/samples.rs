use crate::classify::{classify_lead, lead_band, parse_concentration, AsbestosClass, LeadBand, LeadClass};
use crate::model::{Area, AsbestosMaterial, LeadMaterial};
use serde::Serialize;

const UNKNOWN_LOCATION: &str = "Unknown Location";
const UNKNOWN_SURFACE: &str = "Unknown Surface";
const UNKNOWN: &str = "Unknown";
const UNNAMED_AREA: &str = "Area";

/// Sample number, else a positional one (`A3`, `L1`) counted within the area.
fn sample_number(material_no: Option<&str>, prefix: char, index: usize) -> String {
    match material_no {
        Some(no) => no.to_string(),
        None => format!("{prefix}{}", index + 1),
    }
}

/// Table 2 row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsbestosSample {
    pub sample_no: String,
    pub area_name: String,
    pub material_description: String,
    pub sample_location: String,
    pub asbestos_content: String,
    pub material_classification: AsbestosClass,
}

/// `5` reads as `5%`; text results such as "None Detected" are kept as written.
fn asbestos_content(raw: Option<&str>) -> String {
    match raw {
        Some(v) if v.chars().any(|c| c.is_ascii_digit()) => format!("{v}%"),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Every asbestos material of every area, sampled or not.
pub fn asbestos_samples(areas: &[Area]) -> Vec<AsbestosSample> {
    let mut rows = Vec::new();
    for area in areas {
        let area_name = area.survey.name.or(UNNAMED_AREA);
        for (index, material) in area.survey.asbestos_materials.iter().enumerate() {
            let base = &material.base;
            rows.push(AsbestosSample {
                sample_no: sample_number(base.sample_no.as_deref(), 'A', index),
                area_name: area_name.to_string(),
                material_description: base.label().to_string(),
                sample_location: base.location.or(UNKNOWN_LOCATION).to_string(),
                asbestos_content: asbestos_content(material.percentage_asbestos.as_deref()),
                material_classification: material.classification(),
            });
        }
    }
    rows
}

/// Table 4 row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSample {
    pub sample_no: String,
    pub location: String,
    pub surface: String,
    pub paint_colour: String,
    pub condition: String,
    pub lead_concentration: String,
    pub material_classification: LeadClass,
}

/// Table 4 plus the low-level and high-level sample lists of Section 3.1.2.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSamples {
    pub lead_samples: Vec<LeadSample>,
    pub low_level_lead_samples: Vec<String>,
    pub high_level_lead_samples: Vec<String>,
}

impl LeadSample {
    fn from_material(material: &LeadMaterial, index: usize) -> Self {
        let base = &material.base;
        let concentration = parse_concentration(material.percentage_lead.or(""));
        LeadSample {
            sample_no: sample_number(base.sample_no.as_deref(), 'L', index),
            location: base.location.or(UNKNOWN_LOCATION).to_string(),
            surface: base.description.or(UNKNOWN_SURFACE).to_string(),
            paint_colour: base.material_type.or(UNKNOWN).to_string(),
            condition: base.condition.or(UNKNOWN).to_string(),
            lead_concentration: material
                .percentage_lead
                .as_deref()
                .map_or_else(|| "N/A".to_string(), |v| format!("{v}%")),
            material_classification: classify_lead(&concentration),
        }
    }

    /// One-line description used in the band lists.
    pub fn band_description(&self) -> String {
        format!(
            "Sample {} - {} - {} - {} - {}",
            self.sample_no, self.location, self.surface, self.paint_colour, self.lead_concentration
        )
    }
}

pub fn lead_samples(areas: &[Area]) -> LeadSamples {
    let mut out = LeadSamples::default();
    for area in areas {
        for (index, material) in area.survey.lead_materials.iter().enumerate() {
            let sample = LeadSample::from_material(material, index);
            let concentration = parse_concentration(material.percentage_lead.or(""));
            match lead_band(&concentration) {
                Some(LeadBand::Low) => out.low_level_lead_samples.push(sample.band_description()),
                Some(LeadBand::High) => out.high_level_lead_samples.push(sample.band_description()),
                None => {}
            }
            out.lead_samples.push(sample);
        }
    }
    tracing::debug!(
        samples = out.lead_samples.len(),
        low = out.low_level_lead_samples.len(),
        high = out.high_level_lead_samples.len(),
        "lead samples listed"
    );
    out
}

/// Appendix C row: one sampled asbestos material.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsbestosLabSample {
    pub sample_no: String,
    pub area_name: String,
    pub material_type: String,
    pub location: String,
    pub description: String,
    pub square_footage: String,
    pub percentage_asbestos: String,
    pub asbestos_type: String,
}

impl AsbestosLabSample {
    fn new(area_name: &str, material: &AsbestosMaterial, index: usize) -> Self {
        let base = &material.base;
        AsbestosLabSample {
            sample_no: format!(
                "{area_name}-{}",
                sample_number(base.sample_no.as_deref(), 'A', index)
            ),
            area_name: area_name.to_string(),
            material_type: base.name().unwrap_or("").to_string(),
            location: base.location.to_string(),
            description: base.description.to_string(),
            square_footage: material
                .square_footage
                .as_deref()
                .or_else(|| material.quantity.as_deref())
                .unwrap_or("")
                .to_string(),
            percentage_asbestos: material.percentage_asbestos.to_string(),
            asbestos_type: material.asbestos_type.to_string(),
        }
    }
}

/// Appendix D row: one sampled lead material.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadLabSample {
    pub sample_no: String,
    pub area_name: String,
    pub material_type: String,
    pub location: String,
    pub description: String,
    pub percentage_lead: String,
}

impl LeadLabSample {
    fn new(area_name: &str, material: &LeadMaterial, index: usize) -> Self {
        let base = &material.base;
        LeadLabSample {
            sample_no: format!(
                "{area_name}-{}",
                sample_number(base.sample_no.as_deref(), 'L', index)
            ),
            area_name: area_name.to_string(),
            material_type: base.name().unwrap_or("").to_string(),
            location: base.location.to_string(),
            description: base.description.to_string(),
            percentage_lead: material.percentage_lead.to_string(),
        }
    }
}

/// Appendix C. Positional numbers count every material of the area, sampled or not.
pub fn asbestos_lab_samples(areas: &[Area]) -> Vec<AsbestosLabSample> {
    areas
        .iter()
        .flat_map(|area| {
            area.survey
                .asbestos_materials
                .iter()
                .enumerate()
                .filter(|(_, m)| m.base.is_sampled())
                .map(move |(index, m)| AsbestosLabSample::new(area.listing_name(), m, index))
        })
        .collect()
}

/// Appendix D.
pub fn lead_lab_samples(areas: &[Area]) -> Vec<LeadLabSample> {
    areas
        .iter()
        .flat_map(|area| {
            area.survey
                .lead_materials
                .iter()
                .enumerate()
                .filter(|(_, m)| m.base.is_sampled())
                .map(move |(index, m)| LeadLabSample::new(area.listing_name(), m, index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::{area, area_at};
    use serde_json::json;

    #[test]
    fn test_asbestos_sample_defaults() {
        let areas = vec![area(json!({
            "asbestosMaterials": [
                {"materialType": "Vinyl Floor Tile", "percentageAsbestos": "5", "sampleNo": "S-01"},
                {"percentageAsbestos": "None Detected"}
            ]
        }))];
        let rows = asbestos_samples(&areas);
        assert_eq!(rows[0].sample_no, "S-01");
        assert_eq!(rows[0].area_name, "Area");
        assert_eq!(rows[0].asbestos_content, "5%");
        assert_eq!(rows[0].material_classification, AsbestosClass::Acm);
        assert_eq!(rows[1].sample_no, "A2");
        assert_eq!(rows[1].material_description, "Unknown Material");
        assert_eq!(rows[1].sample_location, "Unknown Location");
        assert_eq!(rows[1].asbestos_content, "None Detected");
        assert_eq!(rows[1].material_classification, AsbestosClass::NonAcm);
    }

    #[test]
    fn test_lead_samples_split_into_bands() {
        let areas = vec![area(json!({
            "name": "Stairwell",
            "leadMaterials": [
                {"materialType": "White", "location": "Handrail", "description": "Metal", "percentageLead": "<0.0080"},
                {"materialType": "Green", "location": "Door", "percentageLead": ">0.1"},
                {"percentageLead": "0.05", "sampleNo": "P-9"},
                {}
            ]
        }))];
        let out = lead_samples(&areas);
        assert_eq!(out.lead_samples.len(), 4);
        assert_eq!(out.lead_samples[0].material_classification, LeadClass::Lllp);
        assert_eq!(out.lead_samples[1].material_classification, LeadClass::Lcp);
        assert_eq!(out.lead_samples[2].material_classification, LeadClass::NonLcp);
        assert_eq!(out.lead_samples[3].lead_concentration, "N/A");
        assert_eq!(out.lead_samples[3].condition, "Unknown");

        assert_eq!(
            out.low_level_lead_samples,
            vec![
                "Sample L1 - Handrail - Metal - White - <0.0080%",
                "Sample P-9 - Unknown Location - Unknown Surface - Unknown - 0.05%",
            ]
        );
        assert_eq!(
            out.high_level_lead_samples,
            vec!["Sample L2 - Door - Unknown Surface - Green - >0.1%"]
        );
    }

    #[test]
    fn test_lab_listings_keep_only_sampled() {
        let areas = vec![
            area_at(1, json!({
                "name": "Lobby",
                "asbestosMaterials": [
                    {"materialType": "Plaster", "sampleCollected": "No"},
                    {"materialType": "Mastic", "sampleCollected": " YES ", "quantity": "40"}
                ],
                "leadMaterials": [{"customMaterialName": "Trim paint", "sampleCollected": true}]
            })),
            area_at(2, json!({
                "id": "B-2",
                "asbestosMaterials": [{"materialType": "Pipe Wrap", "sampleNo": "7", "sampleCollected": "true", "squareFootage": "12"}]
            })),
        ];
        let c = asbestos_lab_samples(&areas);
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].sample_no, "Lobby-A2");
        assert_eq!(c[0].square_footage, "40");
        assert_eq!(c[1].sample_no, "B-2-7");
        assert_eq!(c[1].area_name, "B-2");
        assert_eq!(c[1].square_footage, "12");

        let d = lead_lab_samples(&areas);
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].sample_no, "Lobby-L1");
        assert_eq!(d[0].material_type, "Trim paint");
        assert_eq!(d[0].percentage_lead, "");
    }
}

use super::{bullet_list, NarrativeBlock, NarrativeCategory, NO_ACTION_REQUIRED};
use crate::aggregate::{OdsData, OdsRow, PcbData, PcbRow};

pub const NO_PCB_FINDINGS: &str = "No equipment was observed that is suspected to contain PCBs.";
pub const NO_ODS_FINDINGS: &str =
    "No equipment was observed that is suspected to contain ozone depleting and/or global warming substances.";

const PCB_BALLASTS_ASSUMED: &str = "Fluorescent light ballasts are assumed to contain PCB's.";
const PCB_BALLAST_DISPOSAL: &str = "PCB-containing ballasts should be removed, separated from other waste and disposed of as PCB waste at an authorized destruction facility.";
const PCB_EQUIPMENT_HANDBOOK: &str = "At the time of decommissioning any suspect PCB-containing equipment should be verified by referring to the Environment Canada document entitled \"Handbook on PCB's in Electrical Equipment.\" Any PCB-containing equipment taken out of service should be properly handled and disposed of at an authorized destruction facility.";

const ODS_OBSERVED: &str = "Equipment containing ozone depleting substances (ODS) and/or global warming substances (GWS) was identified in the subject area.";
const ODS_PURGE: &str = "Purge unit(s) of remaining refrigerant prior to removal and disposal. This should be conducted by a certified person who holds a valid Ozone Depletion Prevention Certificate. Servicing and testing of refrigeration equipment should be conducted in accordance with Environment Canada's \"Environmental Code of Practice for Elimination of Fluorocarbon Emissions from Refrigeration and Air Conditioning Systems\".";

/// "Label: value" pairs for the non-empty values, comma-joined.
fn labelled(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn pcb_row_details(row: &PcbRow) -> String {
    labelled(&[
        ("Location", row.location.as_str()),
        ("PCB ID Info", row.pcb_id_info.as_str()),
        ("PCB Content", row.pcb_content.as_str()),
        ("Manufacturer", row.manufacturer.as_str()),
        ("Equipment", row.electrical_equipment.as_str()),
    ])
}

pub fn ods_row_details(row: &OdsRow) -> String {
    labelled(&[
        ("Location", row.location.as_str()),
        ("Classification", row.classification.as_str()),
        ("Refrigerant", row.refrigerant_type.as_str()),
        ("Equipment", row.equipment_type.as_str()),
    ])
}

/// Appends `next` to `text`, separated by a space when `text` already has content.
fn append(text: &mut String, next: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(next);
}

fn itemized<T>(heading: &str, rows: &[T], details: fn(&T) -> String) -> String {
    let items: Vec<String> = rows.iter().map(details).filter(|d| !d.is_empty()).collect();
    format!("{heading}{}", bullet_list(&items))
}

/// Assumed ballasts, then listed equipment; both tiers concatenate.
pub fn pcb(data: &PcbData) -> NarrativeBlock {
    let mut findings = String::new();
    let mut recommendations = String::new();

    if data.pcb_observed {
        findings.push_str(PCB_BALLASTS_ASSUMED);
        recommendations.push_str(PCB_BALLAST_DISPOSAL);
    }
    if !data.pcb_electrical_equipment_table.is_empty() {
        append(
            &mut findings,
            &itemized(
                "The following PCB-containing electrical equipment was identified:",
                &data.pcb_electrical_equipment_table,
                pcb_row_details,
            ),
        );
        append(&mut recommendations, PCB_EQUIPMENT_HANDBOOK);
    }

    if findings.is_empty() {
        return NarrativeBlock::new(NarrativeCategory::Pcb, NO_PCB_FINDINGS, NO_ACTION_REQUIRED);
    }
    NarrativeBlock::new(NarrativeCategory::Pcb, findings, recommendations)
}

pub fn ods(data: &OdsData) -> NarrativeBlock {
    let mut findings = String::new();

    if data.ods_observed {
        findings.push_str(ODS_OBSERVED);
    }
    if !data.ods_gws_assessment_table.is_empty() {
        append(
            &mut findings,
            &itemized(
                "The following ODS/GWS-containing equipment was identified:",
                &data.ods_gws_assessment_table,
                ods_row_details,
            ),
        );
    }

    if findings.is_empty() {
        return NarrativeBlock::new(NarrativeCategory::OdsGws, NO_ODS_FINDINGS, NO_ACTION_REQUIRED);
    }
    NarrativeBlock::new(NarrativeCategory::OdsGws, findings, ODS_PURGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcb_row(location: &str, manufacturer: &str) -> PcbRow {
        PcbRow {
            location: location.into(),
            manufacturer: manufacturer.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pcb_default_pair() {
        let block = pcb(&PcbData::default());
        assert_eq!(
            block.findings,
            "No equipment was observed that is suspected to contain PCBs."
        );
        assert_eq!(block.recommendations, "No Action Required");
        assert!(!block.requires_action());
    }

    #[test]
    fn test_pcb_flag_only() {
        let block = pcb(&PcbData {
            pcb_observed: true,
            pcb_electrical_equipment_table: vec![],
        });
        assert_eq!(block.findings, "Fluorescent light ballasts are assumed to contain PCB's.");
        assert!(block.recommendations.starts_with("PCB-containing ballasts should be removed"));
    }

    #[test]
    fn test_pcb_rows_itemized_and_tiers_concatenate() {
        let block = pcb(&PcbData {
            pcb_observed: true,
            pcb_electrical_equipment_table: vec![
                pcb_row("Electrical Room", "Westinghouse"),
                pcb_row("", ""),
            ],
        });
        assert_eq!(
            block.findings,
            "Fluorescent light ballasts are assumed to contain PCB's. The following PCB-containing electrical equipment was identified:<ul><li>Location: Electrical Room, Manufacturer: Westinghouse</li></ul>"
        );
        assert!(block
            .recommendations
            .contains("destruction facility. At the time of decommissioning"));
        assert!(block.recommendations.contains("Handbook on PCB's in Electrical Equipment."));
    }

    #[test]
    fn test_ods_tiers() {
        let none = ods(&OdsData::default());
        assert_eq!(
            none.findings,
            "No equipment was observed that is suspected to contain ozone depleting and/or global warming substances."
        );
        assert_eq!(none.recommendations, NO_ACTION_REQUIRED);

        let rows = ods(&OdsData {
            ods_observed: false,
            ods_gws_assessment_table: vec![OdsRow {
                location: "Roof".into(),
                refrigerant_type: "R-22".into(),
                ..Default::default()
            }],
        });
        assert_eq!(
            rows.findings,
            "The following ODS/GWS-containing equipment was identified:<ul><li>Location: Roof, Refrigerant: R-22</li></ul>"
        );
        assert!(rows.recommendations.starts_with("Purge unit(s) of remaining refrigerant"));
    }
}

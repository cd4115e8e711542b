//! Report data assembly.
//!
//! [`prepare_report_data`] runs the normalizer, aggregator, narrative
//! composer and appendix builders in order and is the only place the output
//! record is put together.

pub mod format;
pub mod output;

use crate::aggregate::{aggregate, Aggregates, AirConditioning};
use crate::appendix;
use crate::model::{Area, ReportInput};
use crate::narrative::{self, bullet_list, NarrativeContext};
use crate::options::EngineOptions;
use crate::parsing::{self, NormalizedAnswers};
use crate::schema::walk::table_rows;
use crate::schema::{FormSchema, SchemaTable};
use crate::trace::{TraceLog, TraceSource};
use format::{display_date, long_date, report_number, NOT_AVAILABLE, TO_BE_DETERMINED};

pub use output::{AirConditioningOutput, HazardLists, ReportOutput};

const DEFAULT_REPORT_NAME: &str =
    "Comprehensive Designated Substances and Hazardous Materials Assessment Report";
const DEFAULT_PROJECT_DESCRIPTION: &str =
    "Comprehensive environmental assessment and designated substances survey project";
const DEFAULT_ASSESSMENT_DUE_TO: &str = "Construction, renovation, and demolition activities";
const DEFAULT_PROJECT_TYPE: &str = "Project";

fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// The caller's "today", or "To Be Determined" when undated.
///
/// The engine never reads the clock; a dated report without a supplied date
/// is shown as undated and noted in `log`.
fn report_date(options: &EngineOptions, log: &mut TraceLog) -> String {
    if !options.use_current_date {
        return TO_BE_DETERMINED.to_string();
    }
    match options.report_date {
        Some(today) => long_date(today),
        None => {
            log.warn(
                TraceSource::Date,
                None,
                "no report date supplied, shown as To Be Determined",
            );
            TO_BE_DETERMINED.to_string()
        }
    }
}

fn hazard_lists(agg: &Aggregates) -> HazardLists {
    let lists = &agg.lists;
    HazardLists {
        asbestos_found: agg.asbestos_found(),
        asbestos_containing_materials: lists.asbestos.all.clone(),
        suspect_asbestos_materials: lists.asbestos.suspected.clone(),
        lead_found: agg.lead_found(),
        lead_containing_materials: lists.lead.all.clone(),
        suspect_lead_materials: lists.lead.suspected.clone(),
        suspect_lead_material_list: lists.suspect_lead_types.clone(),
        mercury_found: agg.mercury_found(),
        mercury_containing_materials: lists.mercury.all.clone(),
        suspect_mercury_materials: lists.mercury.suspected.clone(),
        mercury_material_list: lists.mercury_labels.clone(),
        silica_found: agg.silica_found(),
        silica_containing_materials: lists.silica.all.clone(),
        suspect_silica_materials: lists.silica.suspected.clone(),
        silica_material_list: lists.silica_labels.clone(),
        mould_found: agg.mould_found(),
    }
}

impl From<&AirConditioning> for AirConditioningOutput {
    fn from(ac: &AirConditioning) -> Self {
        AirConditioningOutput {
            air_conditioning_units: ac.units_present,
            air_conditioning_count: ac.count.clone(),
            air_conditioning_size: ac.size.clone(),
            air_conditioning_area: ac.area.clone(),
            air_conditioning_room: ac.room.clone(),
            refrigerant_type: ac.refrigerant_type.clone(),
            refrigerant_pounds: ac.refrigerant_pounds.clone(),
            refrigerant_class: ac
                .refrigerant_class
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            class_1_or_2_refrigerant: ac.class_1_or_2(),
            fire_extinguishing_equipment: ac.fire_extinguishing_equipment,
        }
    }
}

/// Client shown on the cover: the first area's answer wins over the customer record.
fn client_name(primary: Option<&Area>, input: &ReportInput) -> String {
    primary
        .and_then(|a| a.survey.client_company_name.as_deref())
        .or_else(|| input.customer.display_name())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Inspection date from the answers, else the report's assessment date.
fn assessment_date(primary: Option<&Area>, input: &ReportInput, log: &mut TraceLog) -> String {
    let raw = primary
        .and_then(|a| a.survey.inspection_date.as_deref())
        .or_else(|| input.report.date_of_assessment.as_deref());
    display_date(raw, log)
}

/// Build the renderer's record for one report.
///
/// Never fails: malformed or missing input is defaulted and listed in
/// `diagnostics`.
pub fn prepare_report_data(input: &ReportInput, options: &EngineOptions) -> ReportOutput {
    let mut log = TraceLog::new();
    let report = &input.report;
    let project = &input.project;

    let normalized: NormalizedAnswers = parsing::normalize(report, &mut log);
    let schema = input
        .form_schema
        .as_ref()
        .and_then(|raw| FormSchema::from_value(raw, &mut log));
    let areas = normalized.areas.as_slice();
    let primary = normalized.primary();
    let photos = normalized.all_photos();

    let aggregates = aggregate(areas, project.project_type.as_deref());
    let narrative_project_type = primary
        .and_then(|a| a.survey.project_type.as_deref())
        .unwrap_or(DEFAULT_PROJECT_TYPE);
    let ctx = NarrativeContext {
        areas,
        aggregates: &aggregates,
        organization: &options.organization,
        project_type: narrative_project_type,
        photo_count: photos.len(),
    };
    let narratives = narrative::compose(&ctx);
    let appendices = appendix::build(areas, schema.as_ref());

    let schema_table = |table: SchemaTable| match &schema {
        Some(schema) => table_rows(schema, table, areas),
        None => Vec::new(),
    };
    let asbestos_assessment = schema_table(SchemaTable::Asbestos);
    let lead_assessment = schema_table(SchemaTable::Lead);
    let pcb_assessment = schema_table(SchemaTable::Pcb);

    let report_date = report_date(options, &mut log);
    let assessment_date = assessment_date(primary, input, &mut log);
    let date_of_loss = report
        .date_of_loss
        .as_deref()
        .map(|raw| display_date(Some(raw), &mut log));

    let pest = &aggregates.pest;
    let output = ReportOutput {
        report_name: report.name.or(DEFAULT_REPORT_NAME).to_string(),
        report_number: report_number(report.id.as_deref()),
        report_date,
        pm_feedback: report.pm_feedback.as_deref().map(str::to_string),

        project_name: or_na(project.name.as_deref()),
        project_number: or_na(project.project_no.as_deref()),
        project_contact_name: or_na(project.site_contact_name.as_deref()),
        project_contact_title: or_na(project.site_contact_title.as_deref()),
        project_location: project
            .location
            .one_line()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        project_description: project.description.or(DEFAULT_PROJECT_DESCRIPTION).to_string(),
        client_name: client_name(primary, input),
        customer_head_office_address: or_na(
            primary.and_then(|a| a.survey.client_address.as_deref()),
        ),

        assessment_date,
        assessment_due_to: report.assessment_due_to.or(DEFAULT_ASSESSMENT_DUE_TO).to_string(),
        date_of_loss,
        areas_assessed: format!(
            "{} area(s) were comprehensively assessed for designated substances and hazardous materials in accordance with regulatory requirements.",
            areas.len()
        ),
        documents_used_list: normalized.documents_used_list(),

        logo_url: options.logo_url.clone(),
        logo: options.logo_asset(),
        technician_name: project
            .technician
            .full_name()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        technician_signature: or_na(project.technician.technician_signature.as_deref()),
        pm_name: project
            .pm
            .full_name()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        pm_signature: or_na(project.pm.technician_signature.as_deref()),

        photos,
        project_drawings: project.drawings(),
        area_details: areas.to_vec(),

        narratives,
        appendices,

        asbestos_assessment,
        lead_assessment,
        pcb_assessment,

        asbestos_assessment_table: aggregates.asbestos_rows.clone(),
        lead_assessment_table: aggregates.lead_rows.clone(),
        mercury_assessment_table: aggregates.mercury_rows.clone(),
        silica_assessment_table: aggregates.silica_rows.clone(),
        mould_assessment_table: aggregates.mould_rows.clone(),

        hazards: hazard_lists(&aggregates),

        mould_locations_html: if aggregates.flags.mould_locations.is_empty() {
            String::new()
        } else {
            bullet_list(&aggregates.flags.mould_locations)
        },
        site: aggregates.flags.clone(),

        pest_infestation_data: pest.statements.clone(),
        is_pest_infestation_observed: areas
            .iter()
            .any(|a| a.survey.pest_infestation_observed.is_yes()),
        pest_infestation: pest.pest_infestation,
        mouse_infestation: pest.mouse_infestation,
        pest_type: pest.pest_type.clone(),
        pest_location: pest.pest_location.clone(),

        pcb_observed: aggregates.pcb.pcb_observed,
        pcb_data: aggregates.pcb.clone(),
        ods_observed: aggregates.ods.ods_observed,
        ods_data: aggregates.ods.clone(),
        lighting: aggregates.lighting.clone(),
        air_conditioning: AirConditioningOutput::from(&aggregates.air_conditioning),

        diagnostics: log.into_warnings(),
    };

    tracing::debug!(
        report = %output.report_number,
        areas = areas.len(),
        diagnostics = output.diagnostics.len(),
        "report data prepared"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::NarrativeCategory;
    use chrono::NaiveDate;
    use serde_json::json;

    fn input(value: serde_json::Value) -> ReportInput {
        serde_json::from_value(value).unwrap()
    }

    fn options() -> EngineOptions {
        EngineOptions::default().with_report_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_empty_report_is_fully_defaulted() {
        let out = prepare_report_data(&input(json!({"report": {"id": 7}})), &options());
        assert_eq!(out.report_number, "RPT-000007");
        assert_eq!(out.report_date, "June 1, 2025");
        assert_eq!(out.report_name, DEFAULT_REPORT_NAME);
        assert_eq!(out.project_name, "N/A");
        assert_eq!(out.project_location, "N/A");
        assert_eq!(out.client_name, "N/A");
        assert_eq!(out.technician_name, "N/A");
        assert_eq!(out.assessment_date, "N/A");
        assert!(out.date_of_loss.is_none());
        assert_eq!(out.narratives.summary_table.len(), 10);
        assert!(out.appendices.area_sections.is_empty());
        assert!(out.diagnostics.is_empty());
        assert!(out.areas_assessed.starts_with("0 area(s) were"));
    }

    #[test]
    fn test_undated_report() {
        let mut opts = options();
        opts.use_current_date = false;
        let out = prepare_report_data(&input(json!({"report": {"id": 1}})), &opts);
        assert_eq!(out.report_date, "To Be Determined");
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_report_date_is_not_taken_from_the_clock() {
        let opts = EngineOptions::default();
        assert!(opts.use_current_date);
        assert!(opts.report_date.is_none());

        let bundle = input(json!({"report": {"id": 1}}));
        let first = prepare_report_data(&bundle, &opts);
        let second = prepare_report_data(&bundle, &opts);
        assert_eq!(first.report_date, "To Be Determined");
        assert_eq!(first.report_date, second.report_date);
        assert_eq!(first.diagnostics.len(), 1);
        assert_eq!(first.diagnostics[0].source, TraceSource::Date);
    }

    #[test]
    fn test_metadata_from_records_and_first_area() {
        let out = prepare_report_data(
            &input(json!({
                "report": {
                    "id": "15",
                    "name": "Level 2 Survey",
                    "date_of_assessment": "2025-02-10",
                    "date_of_loss": "sometime in May",
                    "answers": {"areaDetails": [
                        {"name": "Suite 200", "clientCompanyName": "Harbour Holdings", "inspectionDate": "2025-02-12"},
                        {"name": "Suite 210"}
                    ]}
                },
                "project": {
                    "name": "Harbour Tower",
                    "location": {"address_line_1": "1 Bay St", "city": "Toronto"},
                    "technician": {"first_name": "Sam", "last_name": "Rivera"}
                },
                "customer": {"name": "Ignored Corp"}
            })),
            &options(),
        );
        assert_eq!(out.report_name, "Level 2 Survey");
        assert_eq!(out.client_name, "Harbour Holdings");
        assert_eq!(out.project_location, "1 Bay St Toronto");
        assert_eq!(out.technician_name, "Sam Rivera");
        assert_eq!(out.assessment_date, "February 12, 2025");
        assert_eq!(out.date_of_loss.as_deref(), Some("sometime in May"));
        assert_eq!(out.diagnostics.len(), 1);
        assert!(out.areas_assessed.starts_with("2 area(s) were"));
    }

    #[test]
    fn test_schema_tables_only_with_schema() {
        let base = json!({
            "report": {"id": 3, "answers": {"areaDetails": [{"name": "Lab", "hasTiles": "Yes", "tilesLoc": "Bench"}]}},
        });
        let out = prepare_report_data(&input(base.clone()), &options());
        assert!(out.asbestos_assessment.is_empty());

        let mut with_schema = base;
        with_schema["formSchema"] = json!({"sections": [{"title": "Asbestos", "fields": [
            {"id": "g", "fields": [
                {"id": "hasTiles", "type": "radio", "label": "Floor Tiles"},
                {"id": "tilesLoc", "type": "text", "label": "Location", "condition": "hasTiles"}
            ]}
        ]}]});
        let out = prepare_report_data(&input(with_schema), &options());
        assert_eq!(out.asbestos_assessment.len(), 1);
        assert_eq!(out.asbestos_assessment[0].location_and_description, "Bench");
        assert_eq!(out.appendices.area_sections.len(), 1);
    }

    #[test]
    fn test_broken_schema_is_a_diagnostic() {
        let out = prepare_report_data(
            &input(json!({"report": {"id": 3}, "formSchema": "{nope"})),
            &options(),
        );
        assert!(out.appendices.area_sections.is_empty());
        assert_eq!(out.diagnostics.len(), 1);
    }

    #[test]
    fn test_output_is_camel_case_and_flat() {
        let out = prepare_report_data(
            &input(json!({"report": {"id": 9, "answers": {"areaDetails": [{
                "name": "Garage",
                "hasAirConditioning": "Yes",
                "refrigerantType": "HCFC-22",
                "hidLightsPresent": "Yes"
            }]}}})),
            &options(),
        );
        assert!(out.narratives.block(NarrativeCategory::Pcb).is_some());
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["reportNumber"], "RPT-000009");
        assert_eq!(json["refrigerantClass"], "2");
        assert_eq!(json["class1or2Refrigerant"], true);
        assert_eq!(json["hidLightsPresent"], true);
        assert_eq!(json["summaryTable"].as_array().unwrap().len(), 10);
        assert!(json["keyFindings"].is_array());
        assert!(json["appendixASummaryTable"].is_array());
        assert_eq!(json["logo"]["kind"], "linked");
        assert_eq!(json["areaDetails"][0]["name"], "Garage");
    }
}

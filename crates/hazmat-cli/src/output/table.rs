use hazmat_core::aggregate::ConsolidatedRow;
use hazmat_core::classify::{Concentration, LeadBand, LeadClass};
use hazmat_core::ReportOutput;

/// One classified lead value, as printed by `hazmat classify lead`.
pub struct LeadLine {
    pub raw: String,
    pub concentration: Concentration,
    pub class: LeadClass,
    pub band: Option<LeadBand>,
}

pub fn print_lead(rows: &[LeadLine]) {
    let width = rows.iter().map(|r| r.raw.len()).max().unwrap_or(5).max(5);
    println!("  {:<width$}  {:<10}  {:<8}  Band", "Value", "Parsed", "Class");
    println!("  {}", "-".repeat(width + 30));
    for row in rows {
        let parsed = match row.concentration.operator {
            Some(op) => format!("{op}{}", row.concentration.magnitude),
            None => row.concentration.magnitude.to_string(),
        };
        let band = match row.band {
            Some(LeadBand::Low) => "low-level",
            Some(LeadBand::High) => "high-level",
            None => "-",
        };
        println!(
            "  {:<width$}  {:<10}  {:<8}  {}",
            row.raw, parsed, row.class, band
        );
    }
}

/// Row count and material names of a consolidated table.
fn table_line(name: &str, rows: &[ConsolidatedRow]) {
    if rows.is_empty() {
        println!("  {:<10} none", name);
        return;
    }
    let materials: Vec<&str> = rows.iter().map(|r| r.material.as_str()).collect();
    println!("  {:<10} {} ({})", name, rows.len(), materials.join(", "));
}

pub fn print_report(record: &ReportOutput) {
    println!("=== {} ===\n", record.report_name);
    println!("  Report:     {} ({})", record.report_number, record.report_date);
    println!("  Project:    {} [{}]", record.project_name, record.project_number);
    println!("  Client:     {}", record.client_name);
    println!("  Location:   {}", record.project_location);
    println!("  Assessed:   {}", record.assessment_date);
    println!("  Areas:      {}", record.area_details.len());
    println!("  Photos:     {}", record.photos.len());
    println!();

    println!("Summary:\n");
    let width = record
        .narratives
        .summary_table
        .iter()
        .map(|b| b.substance.len())
        .max()
        .unwrap_or(20);
    for block in &record.narratives.summary_table {
        let status = if block.requires_action() {
            "ACTION"
        } else {
            "no action"
        };
        println!("  {:<width$}  {}", block.substance, status);
    }
    println!();

    println!("Materials:\n");
    table_line("Asbestos", &record.asbestos_assessment_table);
    table_line("Lead", &record.lead_assessment_table);
    table_line("Mercury", &record.mercury_assessment_table);
    table_line("Silica", &record.silica_assessment_table);
    table_line("Mould", &record.mould_assessment_table);
    println!();

    if !record.diagnostics.is_empty() {
        println!("Warnings:");
        for d in &record.diagnostics {
            match &d.area {
                Some(area) => println!("  - [{area}] {}", d.message),
                None => println!("  - {}", d.message),
            }
        }
        println!();
    }
}

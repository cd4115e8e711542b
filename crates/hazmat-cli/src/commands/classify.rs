use hazmat_core::classify::{classify_asbestos, classify_lead, lead_band, parse_concentration};
use hazmat_core::error::HazmatError;
use serde_json::json;

use crate::output;

pub fn lead(values: &[String], output_format: &str) -> Result<(), HazmatError> {
    let rows: Vec<output::table::LeadLine> = values
        .iter()
        .map(|raw| {
            let concentration = parse_concentration(raw);
            output::table::LeadLine {
                raw: raw.clone(),
                concentration,
                class: classify_lead(&concentration),
                band: lead_band(&concentration),
            }
        })
        .collect();

    match output_format {
        "json" => {
            let json: Vec<_> = rows
                .iter()
                .map(|r| {
                    json!({
                        "value": r.raw,
                        "concentration": r.concentration,
                        "classification": r.class,
                        "band": r.band,
                    })
                })
                .collect();
            output::json::print(&serde_json::Value::Array(json))?
        }
        _ => output::table::print_lead(&rows),
    }
    Ok(())
}

pub fn asbestos(
    percentage: Option<&str>,
    suspected: Option<&str>,
    output_format: &str,
) -> Result<(), HazmatError> {
    let class = classify_asbestos(percentage, suspected);
    match output_format {
        "json" => output::json::print(&json!({
            "percentage": percentage,
            "suspected": suspected,
            "classification": class,
        }))?,
        _ => println!("{class}"),
    }
    Ok(())
}

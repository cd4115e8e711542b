use chrono::Local;
use hazmat_core::error::HazmatError;
use hazmat_core::logo::LogoAsset;
use hazmat_core::options::{load_options, validate_options};
use hazmat_core::{load_input, prepare_report_data, EngineOptions};

use crate::output;
use crate::PrepareArgs;

fn engine_options(args: &PrepareArgs) -> Result<EngineOptions, HazmatError> {
    let mut options = match &args.options {
        Some(path) => load_options(path)?,
        None => EngineOptions::default(),
    };

    if let Some(org) = &args.organization {
        options.organization = org.clone();
    }
    if args.undated {
        options.use_current_date = false;
    }
    // Today, unless a flag or the options file pins the date.
    let date = args
        .date
        .or(options.report_date)
        .unwrap_or_else(|| Local::now().date_naive());
    options.report_date = Some(date);
    validate_options(&options)?;

    let logo_path = args.logo.clone().or_else(|| options.logo_path.clone());
    let logo = LogoAsset::resolve(logo_path.as_deref(), &options.logo_fallback);
    Ok(options.with_logo(logo))
}

pub fn run(args: PrepareArgs) -> Result<(), HazmatError> {
    let options = engine_options(&args)?;
    let input = load_input(&args.bundle)?;
    tracing::debug!(bundle = %args.bundle.display(), logo_embedded = options.logo_asset().is_embedded(), "bundle loaded");
    let record = prepare_report_data(&input, &options);

    match &args.out {
        Some(path) => {
            let json = serde_json::to_string_pretty(&record)?;
            std::fs::write(path, json)?;
            eprintln!(
                "Prepared {} ({} area(s)), written to {}",
                record.report_number,
                record.area_details.len(),
                path.display()
            );
            for d in &record.diagnostics {
                eprintln!("  warning: {}", d.message);
            }
        }
        None => match args.output.as_str() {
            "json" => output::json::print(&serde_json::to_value(&record)?)?,
            _ => output::table::print_report(&record),
        },
    }

    Ok(())
}

pub mod aggregate;
pub mod appendix;
pub mod assemble;
pub mod classify;
pub mod error;
pub mod logo;
pub mod model;
pub mod narrative;
pub mod options;
pub mod parsing;
pub mod schema;
pub mod trace;

use error::HazmatError;
use model::ReportInput;
use std::path::Path;

pub use assemble::{prepare_report_data, ReportOutput};
pub use options::EngineOptions;

/// Load an input bundle (report, project, customer, optional form schema) from a JSON file.
pub fn load_input(path: &Path) -> Result<ReportInput, HazmatError> {
    let content = std::fs::read_to_string(path).map_err(|e| HazmatError::BundleLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_input(&content, path)
}

/// Parse an input bundle from a JSON string.
pub fn parse_input(json: &str, source: &Path) -> Result<ReportInput, HazmatError> {
    serde_json::from_str(json).map_err(|e| HazmatError::BundleLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })
}

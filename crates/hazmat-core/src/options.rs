use crate::error::HazmatError;
use crate::logo::LogoAsset;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_ORGANIZATION: &str = "Safetech";
pub const DEFAULT_LOGO_URL: &str =
    "https://safetech-dev-images.s3.ca-central-1.amazonaws.com/profiles/image.png";
pub const DEFAULT_LOGO_FALLBACK: &str = "/coloredsafetech.png";

/// Knobs for one report generation.
///
/// Every field has a default, so `{}` is a valid options file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    /// The day treated as "today" for the report date. Supplied by the caller;
    /// without it a dated report reads "To Be Determined".
    pub report_date: Option<NaiveDate>,
    /// When false the report date reads "To Be Determined".
    pub use_current_date: bool,
    pub organization: String,
    pub logo_url: String,
    pub logo_path: Option<PathBuf>,
    /// Link used when the logo file cannot be embedded.
    pub logo_fallback: String,
    /// Logo resolved by the caller; the engine itself never touches the filesystem.
    #[serde(skip)]
    pub logo: Option<LogoAsset>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            report_date: None,
            use_current_date: true,
            organization: DEFAULT_ORGANIZATION.to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            logo_path: None,
            logo_fallback: DEFAULT_LOGO_FALLBACK.to_string(),
            logo: None,
        }
    }
}

impl EngineOptions {
    pub fn with_report_date(mut self, date: NaiveDate) -> Self {
        self.report_date = Some(date);
        self
    }

    pub fn with_logo(mut self, logo: LogoAsset) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Logo to hand to the renderer: the resolved asset, else a link to the fallback.
    pub fn logo_asset(&self) -> LogoAsset {
        self.logo
            .clone()
            .unwrap_or_else(|| LogoAsset::linked(&self.logo_fallback))
    }
}

/// Load options from a JSON file.
pub fn load_options(path: &Path) -> Result<EngineOptions, HazmatError> {
    let content = std::fs::read_to_string(path).map_err(|e| HazmatError::OptionsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_options(&content, path)
}

/// Parse options from a JSON string.
pub fn parse_options(json: &str, source: &Path) -> Result<EngineOptions, HazmatError> {
    let options: EngineOptions = serde_json::from_str(json).map_err(|e| HazmatError::OptionsLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_options(&options)?;
    Ok(options)
}

pub fn validate_options(options: &EngineOptions) -> Result<(), HazmatError> {
    if options.organization.trim().is_empty() {
        return Err(HazmatError::OptionsInvalid(
            "organization must not be blank".into(),
        ));
    }
    if options.logo_fallback.trim().is_empty() {
        return Err(HazmatError::OptionsInvalid(
            "logoFallback must not be blank".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_gives_defaults() {
        let options = parse_options("{}", Path::new("opts.json")).unwrap();
        assert!(options.use_current_date);
        assert_eq!(options.organization, "Safetech");
        assert_eq!(options.logo_fallback, "/coloredsafetech.png");
        assert!(options.report_date.is_none());
        assert_eq!(options.logo_asset(), LogoAsset::linked("/coloredsafetech.png"));
    }

    #[test]
    fn test_fields_are_camel_case() {
        let options = parse_options(
            r#"{"reportDate": "2025-03-04", "useCurrentDate": false, "organization": "Acme Env"}"#,
            Path::new("opts.json"),
        )
        .unwrap();
        assert_eq!(options.report_date, NaiveDate::from_ymd_opt(2025, 3, 4));
        assert!(!options.use_current_date);
        assert_eq!(options.organization, "Acme Env");
    }

    #[test]
    fn test_blank_organization_rejected() {
        let err = parse_options(r#"{"organization": "  "}"#, Path::new("opts.json")).unwrap_err();
        assert!(matches!(err, HazmatError::OptionsInvalid(_)));
    }

    #[test]
    fn test_load_errors_carry_path() {
        let err = load_options(Path::new("/nonexistent/opts.json")).unwrap_err();
        assert!(matches!(err, HazmatError::OptionsLoad { .. }));
        assert!(err.to_string().contains("/nonexistent/opts.json"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"reportDate\": \"March\"}}").unwrap();
        let err = load_options(file.path()).unwrap_err();
        assert!(matches!(err, HazmatError::OptionsLoad { .. }));
    }
}

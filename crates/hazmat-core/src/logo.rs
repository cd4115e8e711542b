use crate::error::HazmatError;
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use std::path::Path;

/// The organisation logo as the renderer should reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LogoAsset {
    /// File contents inlined as a `data:` URI.
    Embedded { mime: String, src: String },
    /// Plain link, used when the file is unavailable.
    Linked { src: String },
}

/// PNG for `.png`, JPEG for everything else.
fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        _ => "image/jpeg",
    }
}

impl LogoAsset {
    pub fn linked(src: &str) -> Self {
        LogoAsset::Linked {
            src: src.to_string(),
        }
    }

    /// Read the logo file once and inline it.
    pub fn load(path: &Path) -> Result<Self, HazmatError> {
        let bytes = std::fs::read(path).map_err(|e| HazmatError::Logo {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if bytes.is_empty() {
            return Err(HazmatError::Logo {
                path: path.to_path_buf(),
                reason: "file is empty".into(),
            });
        }
        let mime = mime_for(path);
        let encoded = general_purpose::STANDARD.encode(&bytes);
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "logo embedded");
        Ok(LogoAsset::Embedded {
            mime: mime.to_string(),
            src: format!("data:{mime};base64,{encoded}"),
        })
    }

    /// Embedded logo when `path` is readable, else a link to `fallback`.
    pub fn resolve(path: Option<&Path>, fallback: &str) -> Self {
        let Some(path) = path else {
            return LogoAsset::linked(fallback);
        };
        match LogoAsset::load(path) {
            Ok(asset) => asset,
            Err(e) => {
                tracing::warn!("{e}; linking {fallback} instead");
                LogoAsset::linked(fallback)
            }
        }
    }

    pub fn src(&self) -> &str {
        match self {
            LogoAsset::Embedded { src, .. } | LogoAsset::Linked { src } => src,
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, LogoAsset::Embedded { .. })
    }
}

/// Health check for the logo resource. Returns its size in bytes.
pub fn check_logo(path: &Path) -> Result<usize, HazmatError> {
    let asset = LogoAsset::load(path)?;
    let size = std::fs::metadata(path)?.len() as usize;
    tracing::debug!(encoded = asset.src().len(), size, "logo check passed");
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn logo_file(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_png_is_embedded_as_data_uri() {
        let file = logo_file(".png", b"\x89PNG");
        let asset = LogoAsset::load(file.path()).unwrap();
        assert!(asset.is_embedded());
        assert_eq!(asset.src(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_other_extensions_are_jpeg() {
        let file = logo_file(".JPG", b"abc");
        match LogoAsset::load(file.path()).unwrap() {
            LogoAsset::Embedded { mime, src } => {
                assert_eq!(mime, "image/jpeg");
                assert_eq!(src, "data:image/jpeg;base64,YWJj");
            }
            other => panic!("expected embedded logo, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_falls_back_to_link() {
        let asset = LogoAsset::resolve(Some(Path::new("/nonexistent/logo.png")), "/fallback.png");
        assert_eq!(asset, LogoAsset::linked("/fallback.png"));
        assert_eq!(LogoAsset::resolve(None, "/f.png").src(), "/f.png");
    }

    #[test]
    fn test_check_logo() {
        let file = logo_file(".png", &[1, 2, 3, 4, 5]);
        assert_eq!(check_logo(file.path()).unwrap(), 5);

        let empty = logo_file(".png", b"");
        let err = check_logo(empty.path()).unwrap_err();
        assert!(err.to_string().contains("file is empty"));
        assert!(matches!(
            check_logo(Path::new("/nonexistent/logo.png")),
            Err(HazmatError::Logo { .. })
        ));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(LogoAsset::linked("/x.png")).unwrap();
        assert_eq!(json["kind"], "linked");
        assert_eq!(json["src"], "/x.png");
    }
}

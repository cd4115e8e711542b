use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HazmatError {
    #[error("failed to load input bundle from {path}: {reason}")]
    BundleLoad { path: PathBuf, reason: String },

    #[error("failed to load engine options from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("invalid engine options: {0}")]
    OptionsInvalid(String),

    #[error("logo resource {path} is not usable: {reason}")]
    Logo { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

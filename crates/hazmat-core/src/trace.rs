use serde::{Deserialize, Serialize};

/// Where a defaulted value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSource {
    AnswersPayload,
    PhotosPayload,
    AreaEntry,
    MaterialEntry,
    FormSchema,
    Date,
}

/// One "unparseable input, defaulted" event.
///
/// The engine never fails on malformed input; it substitutes a safe default
/// and records what it did here so the caller can log or display it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceWarning {
    pub source: TraceSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    pub message: String,
}

/// Output name for a recorded warning.
pub type Diagnostic = TraceWarning;

/// Collector threaded through the normalizer and assembler.
#[derive(Debug, Default)]
pub struct TraceLog {
    warnings: Vec<TraceWarning>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, source: TraceSource, area: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(?source, area = area.unwrap_or(""), "{message}");
        self.warnings.push(TraceWarning {
            source,
            area: area.map(str::to_string),
            message,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<TraceWarning> {
        self.warnings
    }
}

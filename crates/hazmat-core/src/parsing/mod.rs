pub mod documents;
pub mod payload;
pub mod values;

use crate::model::material::skipped_entries;
use crate::model::{Area, ReportRecord};
use crate::trace::{TraceLog, TraceSource};
use documents::parse_documents_used;
use serde::Serialize;
use serde_json::{Map, Value};

/// A photograph with its display caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    pub url: String,
    pub caption: String,
}

/// Output of the answer graph normalizer.
#[derive(Debug, Clone, Default)]
pub struct NormalizedAnswers {
    pub areas: Vec<Area>,
    /// Report-level photographs, captioned.
    pub report_photos: Vec<Photo>,
    /// Root-level `documentsUsed` text, if the answer document carries one.
    pub documents_used: Option<String>,
}

impl NormalizedAnswers {
    /// First area, used for report-wide metadata answers.
    pub fn primary(&self) -> Option<&Area> {
        self.areas.first()
    }

    /// Report photos followed by every area's photos.
    pub fn all_photos(&self) -> Vec<Photo> {
        let mut photos = self.report_photos.clone();
        for area in &self.areas {
            let name = area.survey.name.as_deref().unwrap_or(UNNAMED_AREA_CAPTION);
            for (i, url) in area.survey.area_photo.iter().enumerate() {
                photos.push(Photo {
                    url: url.clone(),
                    caption: format!("{name} - Photo {}", i + 1),
                });
            }
        }
        photos
    }

    /// Documents consulted for the survey, one entry per document.
    pub fn documents_used_list(&self) -> Vec<String> {
        let raw = self.documents_used.as_deref().or_else(|| {
            self.primary()
                .and_then(|area| area.survey.documents_used.as_deref())
        });
        raw.map(parse_documents_used).unwrap_or_default()
    }
}

const UNNAMED_AREA_CAPTION: &str = "Area";

/// Flatten a report's raw answer document into areas and captioned photos.
///
/// Never fails: malformed payloads and entries are replaced with empty
/// structures and recorded in `log`.
pub fn normalize(report: &ReportRecord, log: &mut TraceLog) -> NormalizedAnswers {
    let answers = payload::decode(&report.answers, TraceSource::AnswersPayload, log);
    let areas = extract_areas(&answers, log);

    let documents_used = answers
        .get("documentsUsed")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let report_photos = extract_report_photos(&report.photos, log);

    tracing::debug!(
        areas = areas.len(),
        photos = report_photos.len(),
        "normalized answer document"
    );

    NormalizedAnswers {
        areas,
        report_photos,
        documents_used,
    }
}

/// Build the ordered area sequence from `areaDetails`.
///
/// Each area's `assessments` block is merged into its own field namespace
/// (assessment values win on key collisions) and then dropped.
fn extract_areas(answers: &Value, log: &mut TraceLog) -> Vec<Area> {
    let Some(details) = answers.get("areaDetails") else {
        return Vec::new();
    };
    let Value::Array(entries) = details else {
        log.warn(
            TraceSource::AnswersPayload,
            None,
            "areaDetails is not a list, treating as empty",
        );
        return Vec::new();
    };

    let mut areas = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Value::Object(fields) = entry else {
            log.warn(
                TraceSource::AreaEntry,
                None,
                format!("area entry {} is not an object, skipped", index + 1),
            );
            continue;
        };

        let area = Area::from_fields(areas.len() + 1, merge_assessments(fields));
        let skipped = skipped_entries(&area.survey);
        if skipped > 0 {
            log.warn(
                TraceSource::MaterialEntry,
                Some(area.name()),
                format!("{skipped} malformed list entries skipped"),
            );
        }
        areas.push(area);
    }
    areas
}

fn merge_assessments(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = fields.clone();
    if let Some(Value::Object(assessments)) = merged.remove("assessments") {
        for (key, value) in assessments {
            merged.insert(key, value);
        }
    }
    merged
}

fn extract_report_photos(raw: &Value, log: &mut TraceLog) -> Vec<Photo> {
    match payload::decode(raw, TraceSource::PhotosPayload, log) {
        Value::Array(urls) => urls
            .iter()
            .enumerate()
            .filter_map(|(i, url)| {
                crate::model::answer::text_of(url).map(|url| Photo {
                    url,
                    caption: format!("Photo {} - General Assessment Area", i + 1),
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}

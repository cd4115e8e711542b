//! Typed view of the dynamic form definition.
//!
//! Only the parts the report tables need are modelled: sections with a title,
//! and a tree of fields carrying a kind, a label and the conditional
//! visibility links (`condition` / `showWhen`) that tie follow-up fields to a
//! yes/no question.

pub mod walk;

use crate::model::answer::text_of;
use crate::trace::{TraceLog, TraceSource};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use walk::{AssessmentRow, SchemaTable, NONE_IDENTIFIED};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Radio,
    Text,
    File,
    Repeater,
    #[default]
    #[serde(other)]
    Other,
}

/// Ids and labels may be stored as numbers; read them as text.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(text_of(&Value::deserialize(deserializer)?))
}

fn id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Field {
    #[serde(deserialize_with = "id_text")]
    pub id: String,
    #[serde(deserialize_with = "scalar_text")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Id of the field this one depends on.
    #[serde(deserialize_with = "scalar_text")]
    pub condition: Option<String>,
    /// `"{fieldId}={value}"` visibility rule.
    #[serde(deserialize_with = "scalar_text")]
    pub show_when: Option<String>,
    pub fields: Vec<Field>,
}

impl Field {
    /// Label, else id.
    pub fn title(&self) -> &str {
        self.label
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.id)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.label.as_deref() == Some(label)
    }

    /// Whether visibility of this field hangs off `question_id`.
    pub fn is_gated_by(&self, question_id: &str) -> bool {
        if self.condition.as_deref() == Some(question_id) {
            return true;
        }
        self.show_when.as_deref().is_some_and(|rule| {
            rule.strip_prefix(question_id)
                .is_some_and(|rest| rest.starts_with('='))
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Section {
    pub title: Option<String>,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormSchema {
    pub sections: Vec<Section>,
}

impl FormSchema {
    /// Reads a schema document, or a JSON string holding one.
    ///
    /// Anything unreadable is treated as no schema and noted in `log`.
    pub fn from_value(raw: &Value, log: &mut TraceLog) -> Option<FormSchema> {
        let parsed = match raw {
            Value::Null => return None,
            Value::String(text) => serde_json::from_str::<FormSchema>(text),
            other => FormSchema::deserialize(other),
        };
        match parsed {
            Ok(schema) => Some(schema),
            Err(e) => {
                log.warn(
                    TraceSource::FormSchema,
                    None,
                    format!("form schema ignored: {e}"),
                );
                None
            }
        }
    }

    /// First section whose title contains `keyword`, ignoring case.
    pub fn section_matching(&self, keyword: &str) -> Option<&Section> {
        let keyword = keyword.to_lowercase();
        self.sections.iter().find(|s| {
            s.title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&keyword))
        })
    }
}

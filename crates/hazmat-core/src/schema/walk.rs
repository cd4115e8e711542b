use super::{Field, FieldKind, FormSchema};
use crate::model::answer::text_of;
use crate::model::Area;
use serde::Serialize;
use serde_json::Value;

pub const NONE_IDENTIFIED: &str = "None identified in subject building.";

/// One row of a schema-driven assessment table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRow {
    pub id: String,
    pub location_and_description: String,
    pub photo: String,
}

/// The assessment tables built from the form schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaTable {
    Asbestos,
    Lead,
    Pcb,
}

impl SchemaTable {
    /// Section title keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            SchemaTable::Asbestos => "asbestos",
            SchemaTable::Lead => "lead",
            SchemaTable::Pcb => "pcb",
        }
    }

    /// Only the asbestos table expands repeater entries.
    fn reads_repeaters(&self) -> bool {
        matches!(self, SchemaTable::Asbestos)
    }
}

/// Field values of either an area or one repeater entry.
trait AnswerSource {
    fn value(&self, id: &str) -> Option<&Value>;
}

impl AnswerSource for Area {
    fn value(&self, id: &str) -> Option<&Value> {
        self.field(id)
    }
}

impl AnswerSource for Value {
    fn value(&self, id: &str) -> Option<&Value> {
        self.get(id)
    }
}

/// Text of a location or description answer. Arrays are comma-joined.
fn text_value(source: &dyn AnswerSource, field: Option<&Field>) -> String {
    match field.and_then(|f| source.value(&f.id)) {
        Some(Value::Array(items)) => items.iter().filter_map(text_of).collect::<Vec<_>>().join(","),
        Some(other) => text_of(other).unwrap_or_default(),
        None => String::new(),
    }
}

/// A file answer may hold one reference or a list; the first one is shown.
fn photo_value(source: &dyn AnswerSource, field: Option<&Field>) -> String {
    match field.and_then(|f| source.value(&f.id)) {
        Some(Value::Array(items)) => items.iter().find_map(text_of).unwrap_or_default(),
        Some(other) => text_of(other).unwrap_or_default(),
        None => String::new(),
    }
}

fn location_and_description(location: String, description: String) -> String {
    [location, description]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}

/// Follow-up fields of one yes/no question inside a group.
struct FollowUps<'a> {
    location: Option<&'a Field>,
    description: Option<&'a Field>,
    photo: Option<&'a Field>,
}

impl<'a> FollowUps<'a> {
    /// Siblings gated by `question`.
    fn gated(group: &'a [Field], question: &Field) -> Self {
        let gated = |f: &&Field| f.is_gated_by(&question.id);
        Self {
            location: group
                .iter()
                .filter(gated)
                .find(|f| f.kind == FieldKind::Text && f.has_label("Location")),
            description: group
                .iter()
                .filter(gated)
                .find(|f| f.kind == FieldKind::Text && f.has_label("Description")),
            photo: group.iter().filter(gated).find(|f| f.kind == FieldKind::File),
        }
    }

    /// Children of a repeater, matched by label only.
    fn in_repeater(repeater: &'a Field) -> Self {
        let children = &repeater.fields;
        Self {
            location: children
                .iter()
                .find(|f| f.kind == FieldKind::Text && f.has_label("Location")),
            description: children
                .iter()
                .find(|f| f.kind == FieldKind::Text && f.has_label("Description")),
            photo: children
                .iter()
                .find(|f| f.kind == FieldKind::File && f.has_label("Photo")),
        }
    }

    fn row(&self, id: String, source: &dyn AnswerSource) -> AssessmentRow {
        AssessmentRow {
            id,
            location_and_description: location_and_description(
                text_value(source, self.location),
                text_value(source, self.description),
            ),
            photo: photo_value(source, self.photo),
        }
    }
}

fn question_rows(table: SchemaTable, group: &[Field], question: &Field, area: &Area) -> Vec<AssessmentRow> {
    let title = question.title().to_string();
    let answered_yes = area.field(&question.id).and_then(text_of).as_deref() == Some("Yes");
    if !answered_yes {
        return vec![AssessmentRow {
            id: title,
            location_and_description: NONE_IDENTIFIED.to_string(),
            photo: String::new(),
        }];
    }

    if table.reads_repeaters() {
        let repeater = group
            .iter()
            .find(|f| f.kind == FieldKind::Repeater && f.is_gated_by(&question.id));
        if let Some(repeater) = repeater {
            let entries = match area.field(&repeater.id) {
                Some(Value::Array(entries)) => entries.as_slice(),
                _ => &[],
            };
            if !entries.is_empty() {
                let follow_ups = FollowUps::in_repeater(repeater);
                return entries
                    .iter()
                    .enumerate()
                    .map(|(n, entry)| follow_ups.row(format!("{title} {}", n + 1), entry))
                    .collect();
            }
        }
    }

    vec![FollowUps::gated(group, question).row(title, area)]
}

/// Rows one area contributes to `table`. Empty when the schema has no matching section.
pub fn rows_for_area(schema: &FormSchema, table: SchemaTable, area: &Area) -> Vec<AssessmentRow> {
    let Some(section) = schema.section_matching(table.keyword()) else {
        return Vec::new();
    };
    let mut rows = Vec::new();
    for group in &section.fields {
        for question in group.fields.iter().filter(|f| f.kind == FieldKind::Radio) {
            rows.extend(question_rows(table, &group.fields, question, area));
        }
    }
    rows
}

/// The whole table, area by area.
pub fn table_rows(schema: &FormSchema, table: SchemaTable, areas: &[Area]) -> Vec<AssessmentRow> {
    let rows: Vec<AssessmentRow> = areas
        .iter()
        .flat_map(|area| rows_for_area(schema, table, area))
        .collect();
    tracing::debug!(table = table.keyword(), rows = rows.len(), "schema table built");
    rows
}

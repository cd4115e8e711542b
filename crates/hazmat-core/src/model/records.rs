use super::answer::{is_truthy, Answer, Entries};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The report as loaded by the persistence layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportRecord {
    pub id: Answer,
    pub name: Answer,
    /// Raw answer document: serialized JSON text or an already structured object.
    pub answers: Value,
    /// Raw photograph list: serialized JSON text or an array of URLs.
    pub photos: Value,
    pub assessment_due_to: Answer,
    pub date_of_loss: Answer,
    pub date_of_assessment: Answer,
    pub pm_feedback: Answer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteLocation {
    pub address_line_1: Answer,
    pub address_line_2: Answer,
    pub city: Answer,
    pub province: Answer,
    pub postal_code: Answer,
}

impl SiteLocation {
    /// Non-empty address parts joined with spaces.
    pub fn one_line(&self) -> Option<String> {
        let parts: Vec<&str> = [
            &self.address_line_1,
            &self.address_line_2,
            &self.city,
            &self.province,
            &self.postal_code,
        ]
        .iter()
        .filter_map(|a| a.trimmed())
        .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Technician or project manager attached to a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Person {
    pub first_name: Answer,
    pub last_name: Answer,
    pub technician_signature: Answer,
}

impl Person {
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|a| a.trimmed())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Site drawing attached to a project (Appendix B).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Drawing {
    pub id: Value,
    pub project_id: Value,
    pub file_name: Answer,
    pub file_url: Answer,
    #[serde(deserialize_with = "truthy")]
    pub is_marked: bool,
    #[serde(skip_serializing)]
    #[serde(rename = "createdAt")]
    pub created_at_camel: Answer,
    pub created_at: Answer,
}

impl Drawing {
    pub(crate) fn settle(mut self) -> Self {
        if !self.created_at.is_present() {
            self.created_at = std::mem::take(&mut self.created_at_camel);
        }
        self
    }
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

/// A `null` record reads like a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub name: Answer,
    pub project_no: Answer,
    pub site_contact_name: Answer,
    pub site_contact_title: Answer,
    pub description: Answer,
    pub project_type: Answer,
    #[serde(deserialize_with = "null_as_default")]
    pub location: SiteLocation,
    #[serde(deserialize_with = "null_as_default")]
    pub technician: Person,
    #[serde(deserialize_with = "null_as_default")]
    pub pm: Person,
    #[serde(rename = "ProjectDrawings")]
    pub project_drawings_assoc: Entries<Drawing>,
    pub project_drawings: Entries<Drawing>,
    pub drawings: Entries<Drawing>,
}

impl ProjectRecord {
    /// Drawings from the first populated association.
    pub fn drawings(&self) -> Vec<Drawing> {
        [
            &self.project_drawings_assoc,
            &self.project_drawings,
            &self.drawings,
        ]
        .into_iter()
        .find(|d| !d.is_empty())
        .map(|d| d.iter().cloned().map(Drawing::settle).collect())
        .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomerRecord {
    pub name: Answer,
    pub company_name: Answer,
}

impl CustomerRecord {
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or_else(|| self.company_name.as_deref())
    }
}

/// Everything one report generation consumes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportInput {
    #[serde(deserialize_with = "null_as_default")]
    pub report: ReportRecord,
    #[serde(deserialize_with = "null_as_default")]
    pub project: ProjectRecord,
    #[serde(deserialize_with = "null_as_default")]
    pub customer: CustomerRecord,
    /// Raw form schema; parsed leniently during assembly.
    pub form_schema: Option<Value>,
}

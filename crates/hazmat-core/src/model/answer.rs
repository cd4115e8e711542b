//! Lenient building blocks for survey answers.
//!
//! Answer documents come from a dynamic form, so any field may hold a string,
//! a number, a boolean, an array or nothing at all. These types absorb that
//! variability at deserialization time so the rest of the engine works with
//! plain `Option<&str>` and slices.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Text form of a scalar JSON value. Empty strings count as absent.
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// JavaScript-style truthiness, used for a few legacy boolean columns.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A single free-form answer (radio value, text input, number).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answer(Option<String>);

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Answer(None)
        } else {
            Answer(Some(text))
        }
    }

    pub fn none() -> Self {
        Answer(None)
    }

    pub fn from_value(value: &Value) -> Self {
        Answer(text_of(value))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Exact radio match against "Yes".
    pub fn is_yes(&self) -> bool {
        self.0.as_deref() == Some("Yes")
    }

    /// "yes"/"true" after trimming, any case.
    pub fn is_affirmative(&self) -> bool {
        matches!(self.normalized().as_str(), "yes" | "true")
    }

    /// "no"/"false" after trimming, any case.
    pub fn is_negative(&self) -> bool {
        matches!(self.normalized().as_str(), "no" | "false")
    }

    pub fn or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.0.as_deref().unwrap_or(fallback)
    }

    /// Present and not whitespace-only, trimmed.
    pub fn trimmed(&self) -> Option<&str> {
        self.0.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn normalized(&self) -> String {
        self.0
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_deref().unwrap_or(""))
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Answer::from_value(&value))
    }
}

/// Array of scalars. Anything that is not an array reads as empty.
pub fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(text_of).collect(),
        _ => Vec::new(),
    })
}

/// Array of scalars, or a single scalar read as a one-element list.
pub fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(text_of).collect(),
        other => text_of(&other).into_iter().collect(),
    })
}

/// Array of scalars, or a string split on newlines and commas.
pub fn split_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(text_of).collect(),
        Value::String(s) => s
            .split(['\n', ','])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

/// A repeated group of answer objects (material rows, equipment rows).
///
/// Entries that are not objects, or that fail to deserialize, are counted in
/// `skipped` instead of failing the whole list.
#[derive(Debug, Clone)]
pub struct Entries<T> {
    items: Vec<T>,
    skipped: usize,
}

impl<T> Entries<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
        }
    }
}

impl<T> From<Vec<T>> for Entries<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items, skipped: 0 }
    }
}

impl<'a, T> IntoIterator for &'a Entries<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = Entries::default();
        if let Value::Array(values) = Value::deserialize(deserializer)? {
            for value in values {
                if !value.is_object() {
                    entries.skipped += 1;
                    continue;
                }
                match serde_json::from_value(value) {
                    Ok(item) => entries.items.push(item),
                    Err(_) => entries.skipped += 1,
                }
            }
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        answer: Answer,
        #[serde(default, deserialize_with = "text_list")]
        list: Vec<String>,
        #[serde(default, deserialize_with = "split_list")]
        split: Vec<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        many: Vec<String>,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_answer_accepts_numbers_and_bools() {
        assert_eq!(probe(json!({"answer": 2.5})).answer.as_deref(), Some("2.5"));
        assert_eq!(probe(json!({"answer": true})).answer.as_deref(), Some("true"));
    }

    #[test]
    fn test_empty_string_is_absent() {
        assert!(!probe(json!({"answer": ""})).answer.is_present());
        assert!(!probe(json!({"answer": null})).answer.is_present());
        assert!(!probe(json!({})).answer.is_present());
    }

    #[test]
    fn test_yes_is_exact() {
        assert!(Answer::new("Yes").is_yes());
        assert!(!Answer::new("yes").is_yes());
        assert!(Answer::new(" yes ").is_affirmative());
        assert!(Answer::new("TRUE").is_affirmative());
        assert!(Answer::new("false").is_negative());
    }

    #[test]
    fn test_text_list_ignores_non_arrays() {
        assert!(probe(json!({"list": "a,b"})).list.is_empty());
        assert_eq!(probe(json!({"list": ["a", 1, null]})).list, vec!["a", "1"]);
    }

    #[test]
    fn test_split_list_splits_strings() {
        assert_eq!(
            probe(json!({"split": "Paint\n Caulking, ,Tile"})).split,
            vec!["Paint", "Caulking", "Tile"]
        );
    }

    #[test]
    fn test_one_or_many_wraps_scalar() {
        assert_eq!(probe(json!({"many": "Other"})).many, vec!["Other"]);
    }

    #[test]
    fn test_entries_skip_non_objects() {
        #[derive(Debug, Deserialize)]
        struct Row {
            #[serde(default)]
            name: Answer,
        }
        let entries: Entries<Row> =
            serde_json::from_value(json!([{"name": "a"}, "junk", 3, {"name": "b"}])).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.skipped(), 2);
        assert_eq!(entries.as_slice()[1].name.as_deref(), Some("b"));
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(1)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("false")));
    }
}

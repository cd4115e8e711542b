use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Montreal Protocol class 1 substances (CFCs, halons and friends).
const CLASS_1: &[&str] = &[
    "CFC-11",
    "CFC-12",
    "CFC-13",
    "CFC-111",
    "CFC-112",
    "CFC-113",
    "CFC-114",
    "CFC-115",
    "CFC-211",
    "CFC-212",
    "CFC-213",
    "CFC-214",
    "CFC-215",
    "CFC-216",
    "CFC-217",
    "HALON-1011",
    "HALON-1211",
    "HALON-1301",
    "HALON-2402",
    "CARBON TETRACHLORIDE",
    "METHYL CHLOROFORM",
];

/// Class 2 substances (HCFCs).
const CLASS_2: &[&str] = &[
    "HCFC-21", "HCFC-22", "HCFC-31", "HCFC-121", "HCFC-122", "HCFC-123", "HCFC-124",
    "HCFC-131", "HCFC-132", "HCFC-133", "HCFC-141", "HCFC-142", "HCFC-151", "HCFC-221",
    "HCFC-222", "HCFC-223", "HCFC-224", "HCFC-225", "HCFC-226", "HCFC-231", "HCFC-232",
    "HCFC-233", "HCFC-234", "HCFC-235", "HCFC-241", "HCFC-242", "HCFC-243", "HCFC-244",
    "HCFC-251", "HCFC-252", "HCFC-253", "HCFC-261", "HCFC-262", "HCFC-271",
];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static TOKEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\s]").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefrigerantClass {
    #[serde(rename = "1")]
    Class1,
    #[serde(rename = "2")]
    Class2,
}

impl RefrigerantClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefrigerantClass::Class1 => "1",
            RefrigerantClass::Class2 => "2",
        }
    }
}

/// Canonical form of a refrigerant name: "Halon 1301, 4 lbs" -> "HALON-1301".
///
/// Whitespace runs become hyphens before the leading token is cut, so a
/// trailing quantity separated by a comma or semicolon is dropped.
pub fn normalize_refrigerant(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let upper = WHITESPACE_RUN
        .replace_all(&trimmed.to_uppercase(), "-")
        .into_owned();
    TOKEN_BREAK
        .split(&upper)
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Class of a refrigerant, if it is a listed ozone-depleting substance.
///
/// Two-word names ("Carbon Tetrachloride") are also matched on their
/// space-separated spelling, which the hyphenating normalization loses.
pub fn refrigerant_class(raw: &str) -> Option<RefrigerantClass> {
    let norm = normalize_refrigerant(raw);
    if norm.is_empty() {
        return None;
    }
    let spaced = WHITESPACE_RUN
        .replace_all(&raw.trim().to_uppercase(), " ")
        .into_owned();
    let listed = |list: &[&str]| list.iter().any(|&name| name == norm || name == spaced);
    if listed(CLASS_1) {
        Some(RefrigerantClass::Class1)
    } else if listed(CLASS_2) {
        Some(RefrigerantClass::Class2)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_variants() {
        assert_eq!(normalize_refrigerant("Halon 1301"), "HALON-1301");
        assert_eq!(normalize_refrigerant(" hcfc-22;  12 lbs"), "HCFC-22");
        assert_eq!(normalize_refrigerant("R-410A, 4 lbs"), "R-410A");
        assert_eq!(normalize_refrigerant("   "), "");
    }

    #[test]
    fn test_class_lookup() {
        assert_eq!(refrigerant_class("CFC-12"), Some(RefrigerantClass::Class1));
        assert_eq!(refrigerant_class("hcfc 22"), Some(RefrigerantClass::Class2));
        assert_eq!(refrigerant_class("R-410A"), None);
        assert_eq!(refrigerant_class(""), None);
    }

    #[test]
    fn test_multi_word_names() {
        assert_eq!(normalize_refrigerant("Carbon Tetrachloride"), "CARBON-TETRACHLORIDE");
        assert_eq!(
            refrigerant_class("carbon  tetrachloride"),
            Some(RefrigerantClass::Class1)
        );
        assert_eq!(refrigerant_class("Methyl Chloroform, 2 kg"), None);
    }
}

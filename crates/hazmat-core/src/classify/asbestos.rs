use super::outcome::AsbestosClass;
use crate::model::AsbestosMaterial;
use crate::parsing::values::leading_decimal;
use rust_decimal::Decimal;

/// Material keywords typical of friable asbestos applications.
pub const FRIABLE_KEYWORDS: &[&str] = &[
    "sprayed",
    "fireproofing",
    "insulation",
    "texture",
    "stucco",
    "acoustic",
    "ceiling",
    "plaster",
    "joint compound",
    "mastic",
    "caulking",
];

/// Material keywords typical of non-friable asbestos products.
pub const NON_FRIABLE_KEYWORDS: &[&str] = &[
    "vinyl",
    "floor tile",
    "roofing",
    "siding",
    "wallboard",
    "cement",
    "pipe",
    "duct",
    "transite",
    "drywall",
    "sheet",
    "panel",
];

/// Decide ACM / Non-ACM from the lab result and the surveyor's suspicion.
///
/// A material is ACM when any of these hold:
/// - the percentage starts with a number greater than zero
/// - the percentage mentions "positive" without "not positive" or "negative"
/// - the suspected flag is exactly "Yes"
pub fn classify_asbestos(percentage: Option<&str>, suspected: Option<&str>) -> AsbestosClass {
    if suspected == Some("Yes") {
        return AsbestosClass::Acm;
    }
    let Some(pct) = percentage else {
        return AsbestosClass::NonAcm;
    };
    if leading_decimal(pct).is_some_and(|v| v > Decimal::ZERO) || reads_positive(pct) {
        AsbestosClass::Acm
    } else {
        AsbestosClass::NonAcm
    }
}

fn reads_positive(pct: &str) -> bool {
    let lower = pct.to_lowercase();
    lower.contains("positive") && !lower.contains("not positive") && !lower.contains("negative")
}

pub fn is_friable(label: &str) -> bool {
    contains_any(label, FRIABLE_KEYWORDS)
}

pub fn is_non_friable(label: &str) -> bool {
    contains_any(label, NON_FRIABLE_KEYWORDS)
}

fn contains_any(label: &str, keywords: &[&str]) -> bool {
    let lower = label.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

impl AsbestosMaterial {
    pub fn classification(&self) -> AsbestosClass {
        classify_asbestos(
            self.percentage_asbestos.as_deref(),
            self.suspected_acm.as_deref(),
        )
    }
}

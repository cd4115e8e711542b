use serde::{Deserialize, Serialize};
use std::fmt;

/// Asbestos classification of a single material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsbestosClass {
    #[serde(rename = "ACM")]
    Acm,
    #[serde(rename = "Non-ACM")]
    NonAcm,
}

impl AsbestosClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AsbestosClass::Acm => "ACM",
            AsbestosClass::NonAcm => "Non-ACM",
        }
    }
}

impl fmt::Display for AsbestosClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lead classification of a paint or coating sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadClass {
    /// Lead-containing paint, above 0.1 %.
    #[serde(rename = "LCP")]
    Lcp,
    /// Low-level lead paint, at or below 0.1 %.
    #[serde(rename = "LLLP")]
    Lllp,
    #[serde(rename = "Non-LCP")]
    NonLcp,
}

impl LeadClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadClass::Lcp => "LCP",
            LeadClass::Lllp => "LLLP",
            LeadClass::NonLcp => "Non-LCP",
        }
    }
}

impl fmt::Display for LeadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which lead sample list (Section 3.1.2) a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadBand {
    Low,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_report_labels() {
        assert_eq!(AsbestosClass::NonAcm.to_string(), "Non-ACM");
        assert_eq!(LeadClass::Lllp.to_string(), "LLLP");
        assert_eq!(LeadClass::NonLcp.to_string(), "Non-LCP");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&LeadClass::NonLcp).unwrap();
        assert_eq!(json, "\"Non-LCP\"");
        let back: AsbestosClass = serde_json::from_str("\"ACM\"").unwrap();
        assert_eq!(back, AsbestosClass::Acm);
    }
}

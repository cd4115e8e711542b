use super::outcome::{LeadBand, LeadClass};
use crate::parsing::values::leading_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lead content at which paint is considered lead-containing (% by weight).
pub const LEAD_THRESHOLD_PCT: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Comparison operator a lab result may be reported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl Comparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed lead result such as `<0.0080` or `0.15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concentration {
    pub magnitude: Decimal,
    pub operator: Option<Comparison>,
}

impl Concentration {
    pub const ZERO: Concentration = Concentration {
        magnitude: Decimal::ZERO,
        operator: None,
    };
}

/// Two-character operators come first so `<=` is never read as `<`.
const OPERATORS: [(&str, Comparison); 4] = [
    ("<=", Comparison::Le),
    (">=", Comparison::Ge),
    ("<", Comparison::Lt),
    (">", Comparison::Gt),
];

/// Parse a raw lead result into magnitude and operator.
///
/// Total: a magnitude that does not parse yields zero with no operator.
pub fn parse_concentration(raw: &str) -> Concentration {
    let trimmed = raw.trim();
    let (operator, rest) = OPERATORS
        .iter()
        .find_map(|(prefix, op)| trimmed.strip_prefix(prefix).map(|rest| (Some(*op), rest)))
        .unwrap_or((None, trimmed));

    match leading_decimal(rest) {
        Some(magnitude) => Concentration {
            magnitude,
            operator,
        },
        None => Concentration::ZERO,
    }
}

/// Classify a lead result against the 0.1 % threshold.
///
/// | operator    | magnitude      | class    |
/// |-------------|----------------|----------|
/// | `<`, `<=`   | <= 0.1         | LLLP     |
/// | `>`         | >= 0.1         | LCP      |
/// | `>=`        | > 0.1          | LCP      |
/// | `>=`        | == 0.1         | LLLP     |
/// | none        | > 0.1          | LCP      |
/// | none        | == 0.1         | LLLP     |
/// | otherwise   |                | Non-LCP  |
pub fn classify_lead(c: &Concentration) -> LeadClass {
    let t = LEAD_THRESHOLD_PCT;
    let m = c.magnitude;
    match c.operator {
        Some(Comparison::Lt | Comparison::Le) if m <= t => LeadClass::Lllp,
        // ">0.1" already means "above the threshold"
        Some(Comparison::Gt) if m >= t => LeadClass::Lcp,
        Some(Comparison::Ge) | None if m > t => LeadClass::Lcp,
        Some(Comparison::Ge) | None if m == t => LeadClass::Lllp,
        _ => LeadClass::NonLcp,
    }
}

/// Which of the low-level / high-level sample lists a result belongs to.
///
/// Differs from [`classify_lead`] only for unqualified values: any positive
/// value up to 0.1 % is listed as low-level even though it classifies as
/// Non-LCP.
pub fn lead_band(c: &Concentration) -> Option<LeadBand> {
    let t = LEAD_THRESHOLD_PCT;
    let m = c.magnitude;
    match c.operator {
        Some(Comparison::Lt | Comparison::Le) if m <= t => Some(LeadBand::Low),
        Some(Comparison::Gt) if m >= t => Some(LeadBand::High),
        Some(Comparison::Ge) | None if m > t => Some(LeadBand::High),
        Some(Comparison::Ge) if m == t => Some(LeadBand::Low),
        None if m > Decimal::ZERO && m <= t => Some(LeadBand::Low),
        _ => None,
    }
}

use crate::trace::{TraceLog, TraceSource};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const NOT_AVAILABLE: &str = "N/A";
pub const TO_BE_DETERMINED: &str = "To Be Determined";

/// Calendar-date formats accepted from records and answers, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"];
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Read the calendar date out of a stored date or timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// `March 4, 2025`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Display form of an optional stored date.
///
/// Missing dates read "N/A". A date that cannot be read is shown as written
/// and noted in `log`.
pub fn display_date(raw: Option<&str>, log: &mut TraceLog) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    match parse_date(raw) {
        Some(date) => long_date(date),
        None => {
            log.warn(
                TraceSource::Date,
                None,
                format!("unrecognised date '{raw}', shown as written"),
            );
            raw.to_string()
        }
    }
}

/// `RPT-000042` for report 42.
pub fn report_number(id: Option<&str>) -> String {
    format!("RPT-{:0>6}", id.unwrap_or(""))
}

use crate::trace::{TraceLog, TraceSource};
use serde_json::{Map, Value};

/// Decode a payload that may arrive serialized or already structured.
///
/// - a string is parsed as JSON; on failure an empty object is substituted
/// - null becomes an empty object
/// - anything else is returned unchanged
pub fn decode(raw: &Value, source: TraceSource, log: &mut TraceLog) -> Value {
    match raw {
        Value::String(text) => match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                log.warn(source, None, format!("unparseable payload, using empty: {e}"));
                Value::Object(Map::new())
            }
        },
        Value::Null => Value::Object(Map::new()),
        other => other.clone(),
    }
}

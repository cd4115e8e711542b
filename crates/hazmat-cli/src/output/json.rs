use hazmat_core::error::HazmatError;
use serde_json::Value;

pub fn print(value: &Value) -> Result<(), HazmatError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

use hazmat_core::error::HazmatError;
use hazmat_core::logo::check_logo;
use std::path::Path;

pub fn check(path: &Path) -> Result<(), HazmatError> {
    let size = check_logo(path)?;
    println!("Logo '{}' is usable ({size} bytes).", path.display());
    Ok(())
}

//! JSON persistence for [`Rally`] documents.

use std::fs;
use std::path::Path;

use crate::errors::StoreError;
use crate::model::Rally;

/// Serializes the rally as pretty JSON to `path`, creating missing parent
/// directories first.
pub fn save_rally(rally: &Rally, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(rally)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads a rally back from the JSON written by [`save_rally`].
pub fn load_rally(path: &Path) -> Result<Rally, StoreError> {
    let json = fs::read_to_string(path)?;
    let rally = serde_json::from_str(&json)?;
    Ok(rally)
}

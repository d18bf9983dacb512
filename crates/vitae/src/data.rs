//! Resume record loading.
//!
//! The record is a YAML mapping whose shape is owned by the templates, not
//! by this crate: apart from the top-level `name` (which drives output
//! filenames), fields are passed through to the engine untouched and
//! unvalidated.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Loads the resume record from a YAML file.
///
/// The top-level document must be a mapping so its keys can become
/// template-visible names. Anything else is a parse error.
pub fn load(path: &Path) -> Result<serde_yaml::Value> {
    let raw = fs::read_to_string(path).map_err(|source| Error::DataFileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_yaml::Value = serde_yaml::from_str(&raw).map_err(|err| Error::DataParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    if !value.is_mapping() {
        return Err(Error::DataParse {
            path: path.to_path_buf(),
            message: "top-level document is not a mapping".to_string(),
        });
    }
    Ok(value)
}

/// The record's top-level `name` string, or `""` when absent or not a
/// string (slug derivation then falls back to its default).
pub fn display_name(record: &serde_yaml::Value) -> &str {
    record
        .get("name")
        .and_then(serde_yaml::Value::as_str)
        .unwrap_or("")
}

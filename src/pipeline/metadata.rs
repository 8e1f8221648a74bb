//! Set-level `metadata.json`.
//!
//! Each set directory carries a small metadata object that the language
//! index is built from. It is checked with the same field reader as the
//! records but is not one of the record kinds.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::error::Violation;
use crate::validation::reader::FieldReader;

/// File name of the metadata object inside a set directory.
pub const METADATA_FILE: &str = "metadata.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMetadata {
    pub title: String,
    /// Practice mode the app opens the set in, e.g. `practice-mode-eyes-and-ears`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_mode: Option<String>,
}

/// Check a decoded `metadata.json`, collecting every violation.
pub fn check_metadata(value: &Value) -> Result<SetMetadata, Vec<Violation>> {
    let obj = value
        .as_object()
        .ok_or_else(|| vec![Violation::type_mismatch("$root", "object", value)])?;

    let mut violations = Vec::new();
    let mut reader = FieldReader::new(obj, &mut violations);
    let metadata = SetMetadata {
        title: reader.required_string("title"),
        preferred_mode: reader.optional_string("preferredMode"),
    };

    if violations.is_empty() {
        Ok(metadata)
    } else {
        Err(violations)
    }
}

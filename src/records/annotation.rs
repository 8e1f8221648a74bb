//! Notes, translations and attribution links.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::validation::reader::FieldReader;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: String,
    /// Show the note before the exercise instead of after it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_before_exercice: Option<bool>,
    /// Free-form classification, e.g. `pinyin`, `radical`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,
}

impl Note {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            id: r.optional_string("id"),
            content: r.required_string("content"),
            show_before_exercice: r.optional_bool("showBeforeExercice"),
            note_type: r.optional_string("noteType"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Number>,
}

impl Translation {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            id: r.optional_string("id"),
            content: r.required_string("content"),
            notes: r.optional_strings("notes"),
            priority: r.optional_number("priority"),
        }
    }
}

/// External resource with optional attribution metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Link {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            id: r.optional_string("id"),
            label: r.required_string("label"),
            url: r.required_string("url"),
            owner: r.optional_string("owner"),
            owner_link: r.optional_string("ownerLink"),
            license: r.optional_string("license"),
        }
    }
}

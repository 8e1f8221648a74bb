//! Immersion content and resources.
//!
//! `link` on both kinds is a free string. Authoring scripts usually store a
//! Link id there, but raw URLs occur too, so it is never resolved.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::validation::reader::FieldReader;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmersionContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub language: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needed_vocab: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

impl ImmersionContent {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            id: r.optional_string("id"),
            language: r.required_string("language"),
            title: r.required_string("title"),
            content: r.optional_string("content"),
            priority: r.optional_number("priority"),
            link: r.optional_string("link"),
            needed_vocab: r.optional_strings("neededVocab"),
            notes: r.optional_strings("notes"),
        }
    }
}

/// Plain content or immersion content under one shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_immersion_content: Option<bool>,
    pub language: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocab: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fact_cards: Option<Vec<String>>,
}

impl Resource {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            id: r.optional_string("id"),
            is_immersion_content: r.optional_bool("isImmersionContent"),
            language: r.required_string("language"),
            title: r.required_string("title"),
            content: r.optional_string("content"),
            priority: r.optional_number("priority"),
            link: r.optional_string("link"),
            notes: r.optional_strings("notes"),
            vocab: r.optional_strings("vocab"),
            fact_cards: r.optional_strings("factCards"),
        }
    }
}

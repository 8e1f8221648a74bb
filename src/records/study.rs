//! Study structure: goals and fact cards.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::validation::reader::FieldReader;

/// A learning objective built from sub-goals and study material.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub language: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_goals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocab: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fact_cards: Option<Vec<String>>,
    /// Free text, not note ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

impl Goal {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            id: r.optional_string("id"),
            language: r.required_string("language"),
            title: r.required_string("title"),
            priority: r.optional_number("priority"),
            sub_goals: r.optional_strings("subGoals"),
            vocab: r.optional_strings("vocab"),
            fact_cards: r.optional_strings("factCards"),
            notes: r.optional_strings("notes"),
        }
    }
}

/// Flashcard-style fact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FactCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub language: String,
    pub front: String,
    pub back: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Number>,
}

impl FactCard {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            id: r.optional_string("id"),
            language: r.required_string("language"),
            front: r.required_string("front"),
            back: r.required_string("back"),
            notes: r.optional_strings("notes"),
            priority: r.optional_number("priority"),
        }
    }
}

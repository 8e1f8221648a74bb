//! Vocabulary entries and their media attachments.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::validation::reader::FieldReader;

/// A single term: character, word or sentence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocab {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub language: String,
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub considered_character: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub considered_sentence: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub considered_word: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Number>,

    // Id lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcriptions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_vocab: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_related_vocab: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_sounding_but_not_the_same: Option<Vec<String>>,

    // Media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_picturable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sounds: Option<Vec<Sound>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_interested_in_pronunciation_or_already_added: Option<bool>,
}

impl Vocab {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            id: r.optional_string("id"),
            language: r.required_string("language"),
            content: r.required_string("content"),
            considered_character: r.optional_bool("consideredCharacter"),
            considered_sentence: r.optional_bool("consideredSentence"),
            considered_word: r.optional_bool("consideredWord"),
            priority: r.optional_number("priority"),
            notes: r.optional_strings("notes"),
            transcriptions: r.optional_strings("transcriptions"),
            translations: r.optional_strings("translations"),
            links: r.optional_strings("links"),
            related_vocab: r.optional_strings("relatedVocab"),
            not_related_vocab: r.optional_strings("notRelatedVocab"),
            contains: r.optional_strings("contains"),
            similar_sounding_but_not_the_same: r
                .optional_strings("similarSoundingButNotTheSame"),
            is_picturable: r.optional_bool("isPicturable"),
            images: r.optional_objects("images", "image", Image::read),
            sounds: r.optional_objects("sounds", "sound", Sound::read),
            not_interested_in_pronunciation_or_already_added: r
                .optional_bool("notInterestedInPronunciationOrAlreadyAdded"),
        }
    }
}

/// Picture attached to a vocab entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Image {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            filename: r.required_string("filename"),
            alt: r.optional_string("alt"),
            tags: r.optional_strings("tags"),
        }
    }
}

/// Audio clip attached to a vocab entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sound {
    pub filename: String,
}

impl Sound {
    pub(crate) fn read(r: &mut FieldReader<'_>) -> Self {
        Self {
            filename: r.required_string("filename"),
        }
    }
}

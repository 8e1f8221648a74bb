//! The closed set of record kinds.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::Serialize;

use super::error::ValidationError;

/// One of the eight record shapes a content set may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RecordKind {
    Vocab,
    Goal,
    FactCard,
    Note,
    Translation,
    Link,
    ImmersionContent,
    Resource,
}

lazy_static! {
    static ref KINDS_BY_NAME: HashMap<&'static str, RecordKind> =
        RecordKind::ALL.iter().map(|k| (k.as_str(), *k)).collect();
    static ref KINDS_BY_STEM: HashMap<&'static str, RecordKind> =
        RecordKind::ALL.iter().map(|k| (k.file_stem(), *k)).collect();
}

impl RecordKind {
    pub const ALL: [RecordKind; 8] = [
        RecordKind::Vocab,
        RecordKind::Goal,
        RecordKind::FactCard,
        RecordKind::Note,
        RecordKind::Translation,
        RecordKind::Link,
        RecordKind::ImmersionContent,
        RecordKind::Resource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Vocab => "Vocab",
            RecordKind::Goal => "Goal",
            RecordKind::FactCard => "FactCard",
            RecordKind::Note => "Note",
            RecordKind::Translation => "Translation",
            RecordKind::Link => "Link",
            RecordKind::ImmersionContent => "ImmersionContent",
            RecordKind::Resource => "Resource",
        }
    }

    /// Name of the JSONL file (without extension) holding this kind in a set.
    pub fn file_stem(&self) -> &'static str {
        match self {
            RecordKind::Vocab => "vocab",
            RecordKind::Goal => "goals",
            RecordKind::FactCard => "fact_cards",
            RecordKind::Note => "notes",
            RecordKind::Translation => "translations",
            RecordKind::Link => "links",
            RecordKind::ImmersionContent => "immersion_content",
            RecordKind::Resource => "resources",
        }
    }

    pub fn from_file_stem(stem: &str) -> Option<RecordKind> {
        KINDS_BY_STEM.get(stem).copied()
    }
}

impl FromStr for RecordKind {
    type Err = ValidationError;

    /// Kind names are case-sensitive, matching the wire field names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KINDS_BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| ValidationError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_kind_name() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.as_str().parse::<RecordKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "vocab".parse::<RecordKind>(),
            Err(ValidationError::UnknownKind("vocab".to_string()))
        );
        assert!("Lesson".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_file_stems() {
        assert_eq!(RecordKind::from_file_stem("vocab"), Some(RecordKind::Vocab));
        assert_eq!(
            RecordKind::from_file_stem("immersion_content"),
            Some(RecordKind::ImmersionContent)
        );
        assert_eq!(RecordKind::from_file_stem("fact_cards"), Some(RecordKind::FactCard));
        assert_eq!(RecordKind::from_file_stem("cmn_characters"), None);

        for kind in RecordKind::ALL {
            assert_eq!(RecordKind::from_file_stem(kind.file_stem()), Some(kind));
        }
    }
}

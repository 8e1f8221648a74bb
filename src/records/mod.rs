//! Typed record models.
//!
//! One serde model per record kind, using the camelCase wire names. These
//! are what a successful validation hands back; unknown input fields do not
//! survive into them.

pub mod annotation;
pub mod content;
pub mod study;
pub mod vocab;

pub use annotation::*;
pub use content::*;
pub use study::*;
pub use vocab::*;

use serde::Serialize;

use crate::validation::kind::RecordKind;

/// A record that passed validation, tagged by kind.
///
/// Serializes untagged, so the output has the same shape as the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidatedRecord {
    Vocab(Vocab),
    Goal(Goal),
    FactCard(FactCard),
    Note(Note),
    Translation(Translation),
    Link(Link),
    ImmersionContent(ImmersionContent),
    Resource(Resource),
}

/// An id-list field and the kind its entries point at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceField<'a> {
    pub field: &'static str,
    pub target: RecordKind,
    pub ids: &'a [String],
}

impl ValidatedRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            ValidatedRecord::Vocab(_) => RecordKind::Vocab,
            ValidatedRecord::Goal(_) => RecordKind::Goal,
            ValidatedRecord::FactCard(_) => RecordKind::FactCard,
            ValidatedRecord::Note(_) => RecordKind::Note,
            ValidatedRecord::Translation(_) => RecordKind::Translation,
            ValidatedRecord::Link(_) => RecordKind::Link,
            ValidatedRecord::ImmersionContent(_) => RecordKind::ImmersionContent,
            ValidatedRecord::Resource(_) => RecordKind::Resource,
        }
    }

    pub fn id(&self) -> Option<&str> {
        let id = match self {
            ValidatedRecord::Vocab(r) => &r.id,
            ValidatedRecord::Goal(r) => &r.id,
            ValidatedRecord::FactCard(r) => &r.id,
            ValidatedRecord::Note(r) => &r.id,
            ValidatedRecord::Translation(r) => &r.id,
            ValidatedRecord::Link(r) => &r.id,
            ValidatedRecord::ImmersionContent(r) => &r.id,
            ValidatedRecord::Resource(r) => &r.id,
        };
        id.as_deref()
    }

    /// Id-list fields that point at other records.
    ///
    /// Free-text lists (`Goal.notes`), `Vocab.transcriptions` and the string
    /// `link` fields are not included. Absent lists are skipped.
    pub fn references(&self) -> Vec<ReferenceField<'_>> {
        let candidates: Vec<(&'static str, RecordKind, &Option<Vec<String>>)> = match self {
            ValidatedRecord::Vocab(r) => vec![
                ("notes", RecordKind::Note, &r.notes),
                ("translations", RecordKind::Translation, &r.translations),
                ("links", RecordKind::Link, &r.links),
                ("relatedVocab", RecordKind::Vocab, &r.related_vocab),
                ("notRelatedVocab", RecordKind::Vocab, &r.not_related_vocab),
                ("contains", RecordKind::Vocab, &r.contains),
                (
                    "similarSoundingButNotTheSame",
                    RecordKind::Vocab,
                    &r.similar_sounding_but_not_the_same,
                ),
            ],
            ValidatedRecord::Goal(r) => vec![
                ("subGoals", RecordKind::Goal, &r.sub_goals),
                ("vocab", RecordKind::Vocab, &r.vocab),
                ("factCards", RecordKind::FactCard, &r.fact_cards),
            ],
            ValidatedRecord::FactCard(r) => vec![("notes", RecordKind::Note, &r.notes)],
            ValidatedRecord::Note(_) | ValidatedRecord::Link(_) => Vec::new(),
            ValidatedRecord::Translation(r) => vec![("notes", RecordKind::Note, &r.notes)],
            ValidatedRecord::ImmersionContent(r) => vec![
                ("neededVocab", RecordKind::Vocab, &r.needed_vocab),
                ("notes", RecordKind::Note, &r.notes),
            ],
            ValidatedRecord::Resource(r) => vec![
                ("vocab", RecordKind::Vocab, &r.vocab),
                ("factCards", RecordKind::FactCard, &r.fact_cards),
                ("notes", RecordKind::Note, &r.notes),
            ],
        };

        candidates
            .into_iter()
            .filter_map(|(field, target, ids)| {
                ids.as_deref().map(|ids| ReferenceField { field, target, ids })
            })
            .collect()
    }
}

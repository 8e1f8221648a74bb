//! Dangling reference detection.
//!
//! Runs over records that already passed validation. A reference dangles
//! when its id does not belong to any record of the target kind in the
//! same set. Findings are reported, never turned into validation failures.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::logging::structured::LogContext;
use crate::records::ValidatedRecord;
use crate::validation::kind::RecordKind;

/// An id-list entry whose target record is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub source_kind: RecordKind,
    pub source_id: Option<String>,
    pub field: &'static str,
    pub target_kind: RecordKind,
    pub missing_id: String,
}

/// Ids known per record kind.
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    ids: HashMap<RecordKind, HashSet<String>>,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ValidatedRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            if let Some(id) = record.id() {
                index.insert(record.kind(), id);
            }
        }
        index
    }

    pub fn insert(&mut self, kind: RecordKind, id: &str) {
        self.ids.entry(kind).or_default().insert(id.to_string());
    }

    pub fn contains(&self, kind: RecordKind, id: &str) -> bool {
        self.ids.get(&kind).is_some_and(|ids| ids.contains(id))
    }

    pub fn count(&self, kind: RecordKind) -> usize {
        self.ids.get(&kind).map_or(0, |ids| ids.len())
    }
}

/// Report every reference in `records` that points outside the set.
pub fn find_dangling_references(
    records: &[ValidatedRecord],
    ctx: &LogContext,
) -> Vec<DanglingReference> {
    let index = ReferenceIndex::from_records(records);

    log::debug!(
        "{} REFERENCE_INDEX_BUILT counts={:?}",
        ctx,
        RecordKind::ALL
            .iter()
            .map(|k| (k.as_str(), index.count(*k)))
            .collect::<Vec<_>>()
    );

    let mut dangling = Vec::new();
    for record in records {
        for reference in record.references() {
            for id in reference.ids {
                if !index.contains(reference.target, id) {
                    dangling.push(DanglingReference {
                        source_kind: record.kind(),
                        source_id: record.id().map(|s| s.to_string()),
                        field: reference.field,
                        target_kind: reference.target,
                        missing_id: id.clone(),
                    });
                }
            }
        }
    }

    if dangling.is_empty() {
        log::debug!("{} REFERENCES_RESOLVED records={}", ctx, records.len());
    } else {
        log::warn!(
            "{} REFERENCES_DANGLING count={} first={:?}",
            ctx,
            dangling.len(),
            dangling.first()
        );
    }

    dangling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{FactCard, Goal, Note, Vocab};

    fn note(id: &str) -> ValidatedRecord {
        ValidatedRecord::Note(Note {
            id: Some(id.to_string()),
            content: format!("note {}", id),
            ..Default::default()
        })
    }

    #[test]
    fn test_resolved_references() {
        let ctx = LogContext::new("test-run");
        let records = vec![
            note("1"),
            ValidatedRecord::Vocab(Vocab {
                id: Some("1".to_string()),
                language: "cmn".to_string(),
                content: "好".to_string(),
                notes: Some(vec!["1".to_string()]),
                related_vocab: Some(vec!["1".to_string()]),
                ..Default::default()
            }),
        ];
        assert!(find_dangling_references(&records, &ctx).is_empty());
    }

    #[test]
    fn test_ids_are_scoped_by_kind() {
        let ctx = LogContext::new("test-run");
        // Note "5" exists but the goal asks for fact card "5".
        let records = vec![
            note("5"),
            ValidatedRecord::Goal(Goal {
                id: Some("g1".to_string()),
                language: "it".to_string(),
                title: "Basics".to_string(),
                fact_cards: Some(vec!["5".to_string()]),
                notes: Some(vec!["not an id".to_string()]),
                ..Default::default()
            }),
        ];

        let dangling = find_dangling_references(&records, &ctx);
        assert_eq!(
            dangling,
            vec![DanglingReference {
                source_kind: RecordKind::Goal,
                source_id: Some("g1".to_string()),
                field: "factCards",
                target_kind: RecordKind::FactCard,
                missing_id: "5".to_string(),
            }]
        );
    }

    #[test]
    fn test_records_without_id_are_not_targets() {
        let ctx = LogContext::new("test-run");
        let records = vec![
            ValidatedRecord::FactCard(FactCard {
                language: "it".to_string(),
                front: "a".to_string(),
                back: "b".to_string(),
                notes: Some(vec!["9".to_string()]),
                ..Default::default()
            }),
            ValidatedRecord::Note(Note {
                content: "id-less".to_string(),
                ..Default::default()
            }),
        ];

        let dangling = find_dangling_references(&records, &ctx);
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].source_id, None);
        assert_eq!(dangling[0].missing_id, "9");
    }

    #[test]
    fn test_index_counts() {
        let index = ReferenceIndex::from_records(&[note("1"), note("2"), note("2")]);
        assert_eq!(index.count(RecordKind::Note), 2);
        assert_eq!(index.count(RecordKind::Vocab), 0);
        assert!(index.contains(RecordKind::Note, "2"));
        assert!(!index.contains(RecordKind::Vocab, "2"));
    }
}

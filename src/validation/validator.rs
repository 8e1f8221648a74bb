//! Record shape validation.
//!
//! Validation semantics:
//! - Required fields must be present, non-null strings
//! - Optional fields may be omitted; when present they must have their
//!   declared type (`null` included, which is a mismatch)
//! - List elements are checked one by one, with the index in the path
//! - Every violation in a record is reported, not only the first
//! - Unknown fields are not type-checked and are stripped from the output
//!
//! Validation is pure. It never mutates the candidate and keeps no state
//! between calls.

use serde_json::Value;

use crate::records::{
    FactCard, Goal, ImmersionContent, Link, Note, Resource, Translation, ValidatedRecord, Vocab,
};

use super::error::{ValidationError, Violation};
use super::kind::RecordKind;
use super::reader::FieldReader;

/// Validate a candidate against the record kind named `kind`.
///
/// An unknown kind name fails immediately with `UnknownKind`; no field
/// checks run.
pub fn validate(kind: &str, candidate: &Value) -> Result<ValidatedRecord, ValidationError> {
    let kind: RecordKind = kind.parse()?;
    validate_kind(kind, candidate)
}

/// Validate a candidate against a known record kind.
pub fn validate_kind(
    kind: RecordKind,
    candidate: &Value,
) -> Result<ValidatedRecord, ValidationError> {
    let obj = candidate.as_object().ok_or_else(|| ValidationError::Invalid {
        kind,
        violations: vec![Violation::type_mismatch("$root", "object", candidate)],
    })?;

    let mut violations = Vec::new();
    let mut reader = FieldReader::new(obj, &mut violations);

    let record = match kind {
        RecordKind::Vocab => ValidatedRecord::Vocab(Vocab::read(&mut reader)),
        RecordKind::Goal => ValidatedRecord::Goal(Goal::read(&mut reader)),
        RecordKind::FactCard => ValidatedRecord::FactCard(FactCard::read(&mut reader)),
        RecordKind::Note => ValidatedRecord::Note(Note::read(&mut reader)),
        RecordKind::Translation => ValidatedRecord::Translation(Translation::read(&mut reader)),
        RecordKind::Link => ValidatedRecord::Link(Link::read(&mut reader)),
        RecordKind::ImmersionContent => {
            ValidatedRecord::ImmersionContent(ImmersionContent::read(&mut reader))
        }
        RecordKind::Resource => ValidatedRecord::Resource(Resource::read(&mut reader)),
    };
    let unknown = reader.unknown_fields();

    if !violations.is_empty() {
        log::debug!(
            "RECORD_INVALID kind={} violations={}",
            kind,
            violations.len()
        );
        return Err(ValidationError::Invalid { kind, violations });
    }

    if !unknown.is_empty() {
        log::debug!(
            "RECORD_FIELDS_STRIPPED kind={} id={:?} fields={:?}",
            kind,
            record.id(),
            unknown
        );
    }

    Ok(record)
}

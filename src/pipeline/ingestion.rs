//! Set ingestion pipeline.
//!
//! Coordinates validation of one content set:
//! 1. Read and check `metadata.json`
//! 2. For each record kind, read `<stem>.jsonl`
//! 3. Per line: UTF-8 decode, size check, JSON parse, shape validation
//! 4. Dangling reference pass over accepted records
//! 5. Return accepted records and rejection details
//!
//! Nothing is written or published here; callers decide what to do with
//! rejected lines.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::logging::structured::LogContext;
use crate::records::ValidatedRecord;
use crate::references::resolver::{find_dangling_references, DanglingReference};
use crate::validation::error::Violation;
use crate::validation::kind::RecordKind;
use crate::validation::validator::validate_kind;
use crate::{log_debug, log_info, log_warn};

use super::context::{PipelineConfig, RecordContext, RunContext};
use super::metadata::{check_metadata, SetMetadata, METADATA_FILE};

/// Failure to read a set at all. Invalid records are not errors.
#[derive(Debug, Error)]
pub enum SetError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result of processing a single line.
#[derive(Debug, Clone, Serialize)]
pub struct RecordOutcome {
    /// 1-based line number in the source file.
    pub line: usize,
    pub record_id: Option<String>,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ValidatedRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// SHA-256 of the raw line, set on rejected lines only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

impl RecordOutcome {
    fn accepted(line: usize, record: ValidatedRecord) -> Self {
        Self {
            line,
            record_id: record.id().map(|s| s.to_string()),
            accepted: true,
            record: Some(record),
            violations: Vec::new(),
            rejection_reason: None,
            content_hash: None,
        }
    }

    fn rejected(
        line: usize,
        raw: &[u8],
        record_id: Option<String>,
        reason: String,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            line,
            record_id,
            accepted: false,
            record: None,
            violations,
            rejection_reason: Some(reason),
            content_hash: Some(content_hash(raw)),
        }
    }
}

/// Result of processing one JSONL file.
#[derive(Debug, Clone, Serialize)]
pub struct SetFileResult {
    pub kind: RecordKind,
    pub received_count: usize,
    pub accepted_count: usize,
    pub rejected_count: usize,
    pub outcomes: Vec<RecordOutcome>,
}

impl SetFileResult {
    pub fn accepted_records(&self) -> impl Iterator<Item = &ValidatedRecord> {
        self.outcomes.iter().filter_map(|o| o.record.as_ref())
    }

    pub fn rejected(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.outcomes.iter().filter(|o| !o.accepted)
    }
}

/// Result of processing a whole set directory.
#[derive(Debug, Clone, Serialize)]
pub struct SetReport {
    pub run_id: String,
    pub set_name: String,
    pub started_at: String,
    pub metadata: Option<SetMetadata>,
    pub metadata_violations: Vec<Violation>,
    pub files: Vec<SetFileResult>,
    /// `.jsonl` files whose name matches no record kind.
    pub unrecognized_files: Vec<String>,
    pub dangling_references: Vec<DanglingReference>,
}

impl SetReport {
    pub fn accepted_count(&self) -> usize {
        self.files.iter().map(|f| f.accepted_count).sum()
    }

    pub fn rejected_count(&self) -> usize {
        self.files.iter().map(|f| f.rejected_count).sum()
    }

    /// True when every line validated and the metadata is sound.
    pub fn is_clean(&self) -> bool {
        self.rejected_count() == 0 && self.metadata_violations.is_empty()
    }
}

/// Process the lines of one JSONL file holding records of `kind`.
///
/// Blank lines are skipped but still counted for line numbering.
pub fn process_jsonl(
    ctx: &RunContext,
    kind: RecordKind,
    text: &str,
    config: &PipelineConfig,
) -> SetFileResult {
    process_jsonl_bytes(ctx, kind, text.as_bytes(), config)
}

/// Same as [`process_jsonl`] for raw file contents.
///
/// A line that is not valid UTF-8 is rejected on its own; the other lines
/// of the file are still processed.
pub fn process_jsonl_bytes(
    ctx: &RunContext,
    kind: RecordKind,
    bytes: &[u8],
    config: &PipelineConfig,
) -> SetFileResult {
    let file_name = format!("{}.jsonl", kind.file_stem());
    let mut outcomes = Vec::new();

    for (i, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let record_ctx = ctx.record_context(&file_name, i + 1);
        let text = match std::str::from_utf8(raw) {
            Ok(text) => text,
            Err(e) => {
                log_warn!(
                    record_ctx.log_context(),
                    "LINE_DECODE_FAILED",
                    valid_up_to = e.valid_up_to(),
                );
                outcomes.push(RecordOutcome::rejected(
                    i + 1,
                    raw,
                    None,
                    format!("invalid UTF-8: {}", e),
                    Vec::new(),
                ));
                continue;
            }
        };
        if text.trim().is_empty() {
            continue;
        }
        outcomes.push(process_line(&record_ctx, kind, text, config));
    }

    let accepted = outcomes.iter().filter(|o| o.accepted).count();
    let rejected = outcomes.len() - accepted;

    log_info!(
        ctx.log_context(),
        "FILE_COMPLETE",
        file = file_name,
        received = outcomes.len(),
        accepted = accepted,
        rejected = rejected,
    );

    SetFileResult {
        kind,
        received_count: outcomes.len(),
        accepted_count: accepted,
        rejected_count: rejected,
        outcomes,
    }
}

fn process_line(
    record_ctx: &RecordContext,
    kind: RecordKind,
    raw: &str,
    config: &PipelineConfig,
) -> RecordOutcome {
    let log_ctx = record_ctx.log_context();
    let line = record_ctx.line;

    if raw.len() > config.max_line_bytes {
        log_warn!(
            log_ctx,
            "SIZE_LIMIT_EXCEEDED",
            size = raw.len(),
            limit = config.max_line_bytes,
        );
        return RecordOutcome::rejected(
            line,
            raw.as_bytes(),
            None,
            format!(
                "line is {} bytes, limit is {}",
                raw.len(),
                config.max_line_bytes
            ),
            Vec::new(),
        );
    }

    let candidate: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            log_warn!(log_ctx, "LINE_PARSE_FAILED", error = e.to_string());
            return RecordOutcome::rejected(
                line,
                raw.as_bytes(),
                None,
                format!("JSON parse error: {}", e),
                Vec::new(),
            );
        }
    };

    match validate_kind(kind, &candidate) {
        Ok(record) => {
            log_debug!(log_ctx, "RECORD_ACCEPTED", kind = kind.as_str(), id = record.id());
            RecordOutcome::accepted(line, record)
        }
        Err(e) => {
            // Best effort: the id may itself be the broken field.
            let record_id = candidate
                .get("id")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string());
            log_warn!(
                log_ctx,
                "RECORD_REJECTED",
                kind = kind.as_str(),
                id = record_id,
                violations = e.violations().len(),
            );
            let reason = e.to_string();
            let violations = e.violations().to_vec();
            RecordOutcome::rejected(line, raw.as_bytes(), record_id, reason, violations)
        }
    }
}

/// Validate every record file of the set stored in `dir`.
pub fn process_set_dir(dir: &Path, config: &PipelineConfig) -> Result<SetReport, SetError> {
    if !dir.is_dir() {
        return Err(SetError::NotADirectory(dir.to_path_buf()));
    }

    let set_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let ctx = RunContext::new(&set_name);
    let log_ctx = ctx.log_context();

    log_info!(log_ctx, "SET_START", set = set_name, path = dir.display().to_string());

    let (metadata, metadata_violations) = read_metadata(dir, &log_ctx)?;

    let mut files = Vec::new();
    for kind in RecordKind::ALL {
        let path = dir.join(format!("{}.jsonl", kind.file_stem()));
        if !path.is_file() {
            continue;
        }
        let bytes = fs::read(&path).map_err(|source| SetError::Io {
            path: path.clone(),
            source,
        })?;
        files.push(process_jsonl_bytes(&ctx, kind, &bytes, config));
    }

    let unrecognized_files = unrecognized_jsonl_files(dir)?;
    if !unrecognized_files.is_empty() {
        log_warn!(log_ctx, "FILES_UNRECOGNIZED", files = unrecognized_files);
    }

    let dangling_references = if config.check_references {
        let accepted: Vec<ValidatedRecord> = files
            .iter()
            .flat_map(|f| f.accepted_records().cloned())
            .collect();
        find_dangling_references(&accepted, &log_ctx)
    } else {
        Vec::new()
    };

    let report = SetReport {
        run_id: ctx.run_id.clone(),
        set_name,
        started_at: ctx.started_at.to_rfc3339(),
        metadata,
        metadata_violations,
        files,
        unrecognized_files,
        dangling_references,
    };

    log_info!(
        log_ctx,
        "SET_COMPLETE",
        accepted = report.accepted_count(),
        rejected = report.rejected_count(),
        dangling = report.dangling_references.len(),
    );

    Ok(report)
}

/// A missing `metadata.json` is allowed; a malformed one is reported.
fn read_metadata(
    dir: &Path,
    ctx: &LogContext,
) -> Result<(Option<SetMetadata>, Vec<Violation>), SetError> {
    let path = dir.join(METADATA_FILE);
    if !path.is_file() {
        log::debug!("{} METADATA_ABSENT", ctx);
        return Ok((None, Vec::new()));
    }

    let text = read_to_string(&path)?;
    let value: Value = serde_json::from_str(&text).map_err(|source| SetError::MetadataParse {
        path: path.clone(),
        source,
    })?;

    match check_metadata(&value) {
        Ok(metadata) => Ok((Some(metadata), Vec::new())),
        Err(violations) => {
            log::warn!(
                "{} METADATA_INVALID violations={}",
                ctx,
                violations.len()
            );
            Ok((None, violations))
        }
    }
}

fn unrecognized_jsonl_files(dir: &Path) -> Result<Vec<String>, SetError> {
    let entries = fs::read_dir(dir).map_err(|source| SetError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("jsonl") {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if RecordKind::from_file_stem(stem).is_none() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn read_to_string(path: &Path) -> Result<String, SetError> {
    fs::read_to_string(path).map_err(|source| SetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// SHA-256 hex digest of a raw line.
fn content_hash(raw: &[u8]) -> String {
    hex::encode(Sha256::digest(raw))
}

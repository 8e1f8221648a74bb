//! Pipeline context management.
//!
//! Provides run and record context for logging, plus the knobs a caller
//! can turn for one run.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Lines larger than this are rejected without being parsed.
pub const DEFAULT_MAX_LINE_BYTES: usize = 1_000_000; // 1MB per record

/// Settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub max_line_bytes: usize,
    /// Run the dangling-reference pass after validation.
    pub check_references: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            check_references: true,
        }
    }
}

/// Context for one validation run over a set.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub set_name: String,
}

impl RunContext {
    pub fn new(set_name: &str) -> Self {
        let run_id = format!("run-{}", &Uuid::new_v4().to_string()[..8]);

        Self {
            run_id,
            started_at: Utc::now(),
            set_name: set_name.to_string(),
        }
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.run_id)
    }

    /// Create a context for one line of a set file.
    pub fn record_context(&self, file_name: &str, line: usize) -> RecordContext {
        RecordContext {
            run_id: self.run_id.clone(),
            file_name: file_name.to_string(),
            line,
        }
    }
}

/// Context for a single line within a set file.
#[derive(Debug, Clone)]
pub struct RecordContext {
    pub run_id: String,
    pub file_name: String,
    pub line: usize,
}

impl RecordContext {
    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.run_id).with_record(&format!("{}:{}", self.file_name, self.line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_shape() {
        let ctx = RunContext::new("basic-vocab");
        assert!(ctx.run_id.starts_with("run-"));
        assert_eq!(ctx.run_id.len(), 12);
        assert_eq!(ctx.set_name, "basic-vocab");
    }

    #[test]
    fn test_record_log_context() {
        let ctx = RunContext::new("basic-vocab");
        let record = ctx.record_context("vocab.jsonl", 7);
        assert_eq!(
            record.log_context().to_string(),
            format!("[run={}] [record=vocab.jsonl:7]", ctx.run_id)
        );
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_line_bytes, DEFAULT_MAX_LINE_BYTES);
        assert!(config.check_references);
    }
}

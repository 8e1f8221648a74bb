//! Run-scoped log lines for set validation.
//!
//! Every line starts with the run id and, once a file line is being
//! checked, its `<file>:<line>` location, followed by an upper-case event
//! name (`SET_START`, `RECORD_REJECTED`, `LINE_DECODE_FAILED`, ...) and
//! `key=value` pairs:
//!
//! ```text
//! [run=run-1a2b3c4d] [record=vocab.jsonl:3] RECORD_REJECTED kind="Vocab" id=Some("3") violations=1
//! ```

use std::fmt;

/// Prefix shared by the log lines of one set run.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub run_id: String,
    pub record: Option<String>,
}

impl LogContext {
    pub fn new(run_id: &str) -> Self {
        Self {
            run_id: run_id.to_string(),
            record: None,
        }
    }

    /// Narrow the context to a single record, e.g. `vocab.jsonl:12`.
    pub fn with_record(&self, record: &str) -> Self {
        Self {
            run_id: self.run_id.clone(),
            record: Some(record.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record {
            Some(record) => write!(f, "[run={}] [record={}]", self.run_id, record),
            None => write!(f, "[run={}]", self.run_id),
        }
    }
}

/// Initialize the process-wide logger.
///
/// Defaults to info level; `RUST_LOG` overrides it. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}

/// Set and file milestones: `SET_START`, `FILE_COMPLETE`, `SET_COMPLETE`.
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::info!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*) $(, $value)*)
        );
    };
}

/// Rejected or undecodable lines and unrecognized files.
#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::warn!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*) $(, $value)*)
        );
    };
}

/// Per-record acceptance, too chatty for a normal run.
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::debug!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*) $(, $value)*)
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new("run-1234abcd");
        assert_eq!(format!("{}", ctx), "[run=run-1234abcd]");

        let ctx_with_record = ctx.with_record("vocab.jsonl:3");
        assert_eq!(
            format!("{}", ctx_with_record),
            "[run=run-1234abcd] [record=vocab.jsonl:3]"
        );
    }

    #[test]
    fn test_macros_accept_zero_and_many_keys() {
        let ctx = LogContext::new("run-test");
        crate::log_info!(ctx, "RUN_START");
        crate::log_warn!(ctx, "LINE_REJECTED", line = 4, reason = "bad");
        crate::log_debug!(ctx, "FIELD_STRIPPED", field = "extra",);
    }
}

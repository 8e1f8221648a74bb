//! Linguaset Core - record shape validation for language-learning content
//!
//! This crate checks the JSON records of a content set (vocabulary, goals,
//! fact cards, notes, translations, links, immersion content, resources)
//! before they are published. With the `python` feature it is exposed to
//! the publishing scripts via PyO3. The implementation prioritizes:
//!
//! 1. **Complete diagnostics** - every violation in a record is reported
//! 2. **Logging** - every decision point logged with run context
//! 3. **Purity** - validation never mutates input or touches storage
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `validation` - Record kinds and the shape validator
//! - `records` - Typed models handed back by successful validation
//! - `pipeline` - Whole-set validation over JSONL files
//! - `references` - Dangling id reference detection
//! - `logging` - Structured logging with run context

pub mod logging;
pub mod pipeline;
pub mod records;
pub mod references;
pub mod validation;

pub use logging::structured::init_logger;
pub use records::ValidatedRecord;
pub use validation::{validate, validate_kind, RecordKind, ValidationError, Violation};

#[cfg(feature = "python")]
mod python {
    use std::path::Path;

    use pyo3::exceptions::{PyIOError, PyValueError};
    use pyo3::prelude::*;
    use pyo3::types::{PyDict, PyList};

    use crate::init_logger;
    use crate::pipeline::context::PipelineConfig;
    use crate::pipeline::ingestion::{process_set_dir, SetError};
    use crate::validation::error::{ValidationError, Violation};
    use crate::validation::kind::RecordKind;
    use crate::validation::validator::validate;

    fn violations_to_py<'py>(py: Python<'py>, violations: &[Violation]) -> PyResult<&'py PyList> {
        let list = PyList::empty(py);
        for v in violations {
            let item = PyDict::new(py);
            item.set_item("path", &v.path)?;
            item.set_item("kind", v.kind.as_str())?;
            item.set_item("expected", &v.expected)?;
            item.set_item("found", &v.found)?;
            list.append(item)?;
        }
        Ok(list)
    }

    /// Validate one record.
    ///
    /// # Arguments
    /// * `kind` - Record kind name, e.g. "Vocab" or "FactCard"
    /// * `record_json` - The candidate record (JSON serialized)
    ///
    /// # Returns
    /// Dict with `valid`, `kind`, `id`, `record` (cleaned JSON, when valid)
    /// and `violations`. Raises ValueError for unknown kinds or bad JSON.
    #[pyfunction]
    fn validate_record(py: Python<'_>, kind: String, record_json: String) -> PyResult<Py<PyAny>> {
        init_logger();

        let candidate: serde_json::Value = serde_json::from_str(&record_json)
            .map_err(|e| PyValueError::new_err(format!("JSON parse error: {}", e)))?;

        let result = PyDict::new(py);
        result.set_item("kind", &kind)?;

        match validate(&kind, &candidate) {
            Ok(record) => {
                let cleaned = serde_json::to_string(&record)
                    .map_err(|e| PyValueError::new_err(e.to_string()))?;
                result.set_item("valid", true)?;
                result.set_item("id", record.id())?;
                result.set_item("record", cleaned)?;
                result.set_item("violations", PyList::empty(py))?;
            }
            Err(e @ ValidationError::UnknownKind(_)) => {
                return Err(PyValueError::new_err(e.to_string()));
            }
            Err(e) => {
                let id = candidate.get("id").and_then(|v| v.as_str());
                result.set_item("valid", false)?;
                result.set_item("id", id)?;
                result.set_item("violations", violations_to_py(py, e.violations())?)?;
            }
        }

        Ok(result.into())
    }

    /// Validate every record file of a set directory.
    ///
    /// # Returns
    /// The full set report as a JSON string, plus summary counts.
    #[pyfunction]
    #[pyo3(signature = (path, check_references=true))]
    fn validate_set(py: Python<'_>, path: String, check_references: bool) -> PyResult<Py<PyAny>> {
        init_logger();

        let config = PipelineConfig {
            check_references,
            ..Default::default()
        };
        let report = process_set_dir(Path::new(&path), &config).map_err(|e| match e {
            SetError::Io { .. } => PyIOError::new_err(e.to_string()),
            _ => PyValueError::new_err(e.to_string()),
        })?;

        let report_json =
            serde_json::to_string(&report).map_err(|e| PyValueError::new_err(e.to_string()))?;

        let result = PyDict::new(py);
        result.set_item("run_id", &report.run_id)?;
        result.set_item("accepted_count", report.accepted_count())?;
        result.set_item("rejected_count", report.rejected_count())?;
        result.set_item("dangling_count", report.dangling_references.len())?;
        result.set_item("clean", report.is_clean())?;
        result.set_item("report", report_json)?;

        Ok(result.into())
    }

    /// Get the names of all record kinds.
    #[pyfunction]
    fn record_kinds() -> PyResult<Vec<String>> {
        Ok(RecordKind::ALL
            .iter()
            .map(|k| k.as_str().to_string())
            .collect())
    }

    /// Python module definition
    #[pymodule]
    fn linguaset_core(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(validate_record, m)?)?;
        m.add_function(wrap_pyfunction!(validate_set, m)?)?;
        m.add_function(wrap_pyfunction!(record_kinds, m)?)?;
        Ok(())
    }
}

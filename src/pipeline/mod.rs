//! Pipeline orchestration module.
//!
//! Validation of whole content sets that coordinates:
//! - Set metadata checks
//! - Per-line parsing and shape validation
//! - Dangling reference detection

pub mod context;
pub mod ingestion;
pub mod metadata;

pub use context::*;
pub use ingestion::*;
pub use metadata::*;

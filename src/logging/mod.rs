//! Structured logging with run context.
//!
//! Provides logging macros and utilities that include the run id and the
//! record under inspection in every log message for easy correlation.

pub mod structured;

pub use structured::*;

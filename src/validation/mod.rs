//! Record shape validation module.
//!
//! Validates decoded JSON records against the eight record kinds:
//! - Kind lookup over a closed enum
//! - Field-level checks that collect every violation
//! - Typed output records with unknown fields stripped

pub mod error;
pub mod kind;
pub mod reader;
pub mod validator;

pub use error::*;
pub use kind::*;
pub use validator::*;

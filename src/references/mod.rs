//! Reference resolution module.
//!
//! Optional pass over validated records of one set that reports id
//! references whose target record is absent. Validation itself never
//! looks at references.

pub mod resolver;

pub use resolver::*;

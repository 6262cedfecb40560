//! Compile-time portfolio content.
//!
//! The section registry and the project catalog are process-wide read-only
//! configuration: defined here, never mutated at runtime.

pub mod profile;
pub mod projects;
pub mod sections;

//! The shared library for Mergington, the activity sign-up service of the
//! Mergington High School club portal.
//!
//! This library provides the pieces the backend is built from: data
//! structures, email validation, error types and logging.

pub mod data;
pub mod email;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;

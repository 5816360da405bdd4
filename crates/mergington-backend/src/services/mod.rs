//! Backend services for activity and participant management.
//!
//! This module provides the service layer abstraction over the activity
//! catalog, together with the in-memory implementation the server runs on.

pub mod activities;

pub use activities::*;

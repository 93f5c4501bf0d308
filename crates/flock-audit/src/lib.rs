//! flock-audit
//!
//! Structured audit events for assessment-pipeline actions.

pub mod events;

//! flock-storage
//!
//! S3 persistence for the assessment pipeline. Thin wrapper around the AWS
//! S3 SDK, plus the domain-level store operations for response sets,
//! results, and contacts.

pub mod client;
pub mod error;
pub mod json;
pub mod objects;
pub mod responses;
pub mod retry;

//! flock-auth
//!
//! Cognito JWT validation and viewer-tier mapping. Account management
//! lives in the hosted Cognito UI; this crate only verifies what it issued.

pub mod error;
pub mod jwt;

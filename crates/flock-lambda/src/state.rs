use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use jsonwebtoken::DecodingKey;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub cognito_user_pool_id: String,
    pub cognito_region: String,
    /// Public key for Cognito JWT validation; `None` until the JWKS
    /// material is configured, in which case bearer tokens are rejected.
    pub decoding_key: Option<Arc<DecodingKey>>,
}

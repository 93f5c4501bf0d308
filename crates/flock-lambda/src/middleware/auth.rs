use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use flock_core::models::respondent::ViewerTier;

use crate::error::ApiError;
use crate::state::AppState;

/// Viewer-tier middleware.
///
/// Requests without an `Authorization` header proceed as
/// `ViewerTier::Anonymous` — most respondents never sign in. A presented
/// bearer token must validate against the Cognito user pool; a bad or
/// unverifiable token is a 401, never a silent downgrade to the anonymous
/// view.
pub async fn attach_viewer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let tier = match bearer_token(&req) {
        None => ViewerTier::Anonymous,
        Some(token) => {
            let key = state.decoding_key.as_deref().ok_or_else(|| {
                ApiError::Unauthorized("token validation is not configured".to_string())
            })?;
            let claims = flock_auth::jwt::validate_token(
                token,
                key,
                &state.cognito_user_pool_id,
                &state.cognito_region,
            )?;
            claims.viewer_tier()
        }
    };

    req.extensions_mut().insert(tier);

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

use std::env;
use std::sync::Arc;

use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use axum::Router;
use jsonwebtoken::DecodingKey;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // JSON logs for CloudWatch; RUST_LOG drives the filter.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("FLOCK_BUCKET").unwrap_or_else(|_| "flock".to_string());
    let cognito_user_pool_id =
        env::var("COGNITO_USER_POOL_ID").unwrap_or_else(|_| "us-east-1_unset".to_string());
    let cognito_region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

    // RSA components of the user pool's JWKS signing key, injected at
    // deploy time. Without them, bearer tokens are rejected rather than
    // trusted.
    let decoding_key = match (env::var("COGNITO_JWK_N"), env::var("COGNITO_JWK_E")) {
        (Ok(n), Ok(e)) => Some(Arc::new(
            DecodingKey::from_rsa_components(&n, &e).map_err(|err| eyre::eyre!(err))?,
        )),
        _ => {
            tracing::warn!("COGNITO_JWK_N/COGNITO_JWK_E not set; bearer tokens will be rejected");
            None
        }
    };

    let s3 = flock_storage::client::build_client().await;

    let state = AppState {
        s3,
        bucket,
        cognito_user_pool_id,
        cognito_region,
        decoding_key,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Liveness
        .route("/health", get(routes::health::health_check))
        // Assessment banks — public schema data
        .route("/assessments", get(routes::assessments::list_assessments))
        .route(
            "/assessments/{id}",
            get(routes::assessments::get_assessment_detail),
        )
        // Response collection
        .route(
            "/assessments/{id}/progress",
            get(routes::responses::get_progress),
        )
        .route(
            "/assessments/{id}/progress",
            put(routes::responses::save_progress),
        )
        .route("/assessments/{id}/submit", post(routes::responses::submit))
        // Results
        .route("/assessments/{id}/result", get(routes::results::get_result))
        // Lead capture
        .route("/contacts", post(routes::contacts::create_contact))
        .route("/contacts", get(routes::contacts::list_contacts))
        .layer(axum_mw::from_fn(middleware::log::request_log))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::attach_viewer,
        ))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|err| eyre::eyre!(err))
}

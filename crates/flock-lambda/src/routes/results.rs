use axum::extract::{Path, Query, State};
use axum::{Extension, Json};

use flock_assessments::render::{render, ResultView};
use flock_audit::events::AuditEvent;
use flock_core::models::respondent::{RespondentId, ViewerTier};
use flock_storage::responses as store;

use crate::error::ApiError;
use crate::routes::responses::RespondentQuery;
use crate::state::AppState;

/// Redisplay a stored result, gated by the caller's viewer tier. The
/// snapshot is served as-is; responses are only re-scored on submission.
pub async fn get_result(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
    Query(query): Query<RespondentQuery>,
    Extension(tier): Extension<ViewerTier>,
) -> Result<Json<ResultView>, ApiError> {
    let respondent = RespondentId::parse_token(&query.respondent)?;
    let stored = store::load_result(&state.s3, &state.bucket, &assessment_id, &respondent).await?;

    AuditEvent::new("result_viewed", respondent.storage_key())
        .with_assessment(&assessment_id)
        .emit();

    Ok(Json(render(&stored.result, tier)))
}

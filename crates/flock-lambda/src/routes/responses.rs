use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use flock_assessments::get_assessment;
use flock_assessments::narrative::NarrativeTable;
use flock_assessments::render::{render, ResultView};
use flock_assessments::scoring::score;
use flock_audit::events::AuditEvent;
use flock_core::models::respondent::{RespondentId, ViewerTier};
use flock_core::models::response_set::ResponseSet;
use flock_core::models::result::StoredResult;
use flock_storage::responses as store;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RespondentQuery {
    /// Respondent token: `anon:<uuid>`, `email:<address>`, or
    /// `account:<uuid>`.
    pub respondent: String,
}

pub async fn get_progress(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
    Query(query): Query<RespondentQuery>,
) -> Result<Json<ResponseSet>, ApiError> {
    let respondent = RespondentId::parse_token(&query.respondent)?;
    let responses =
        store::load_progress(&state.s3, &state.bucket, &assessment_id, &respondent).await?;
    Ok(Json(responses))
}

#[derive(Serialize)]
pub struct SaveAck {
    pub answered: usize,
}

pub async fn save_progress(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
    Json(mut responses): Json<ResponseSet>,
) -> Result<Json<SaveAck>, ApiError> {
    responses.assessment_id = assessment_id;
    if responses.is_complete() {
        return Err(ApiError::BadRequest(
            "response set is already complete; use submit".to_string(),
        ));
    }
    validate_answers(&responses)?;

    store::save_progress(&state.s3, &state.bucket, &responses).await?;

    AuditEvent::new("progress_saved", responses.respondent.storage_key())
        .with_assessment(&responses.assessment_id)
        .with_details(serde_json::json!({ "answered": responses.answered() }))
        .emit();

    Ok(Json(SaveAck {
        answered: responses.answered(),
    }))
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub responses: ResponseSet,
    /// Identity whose partial row this submission supersedes. Set when
    /// the email gate rekeyed an anonymous respondent mid-assessment.
    #[serde(default)]
    pub superseded: Option<RespondentId>,
}

pub async fn submit(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
    Extension(tier): Extension<ViewerTier>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<ResultView>, ApiError> {
    let mut responses = request.responses;
    responses.assessment_id = assessment_id;
    validate_answers(&responses)?;

    let assessment = get_assessment(&responses.assessment_id)
        .ok_or_else(|| ApiError::NotFound(format!("assessment not found: {}", responses.assessment_id)))?;
    let narratives = NarrativeTable::builtin();
    let result = score(assessment.as_ref(), &responses, &narratives)?;

    if !responses.is_complete() {
        responses.mark_complete();
    }
    let stored = StoredResult::new(result);
    store::save_completion(&state.s3, &state.bucket, &responses, &stored).await?;

    // Best effort: the superseded anonymous row only wastes space.
    if let Some(old) = request.superseded
        && old.storage_key() != responses.respondent.storage_key()
    {
        if let Err(err) =
            store::delete_progress(&state.s3, &state.bucket, &responses.assessment_id, &old).await
        {
            tracing::warn!(error = %err, "failed to delete superseded progress row");
        }
    }

    AuditEvent::new("assessment_completed", responses.respondent.storage_key())
        .with_assessment(&responses.assessment_id)
        .with_details(serde_json::json!({ "result_id": stored.id }))
        .emit();

    Ok(Json(render(&stored.result, tier)))
}

fn validate_answers(responses: &ResponseSet) -> Result<(), ApiError> {
    let assessment = get_assessment(&responses.assessment_id).ok_or_else(|| {
        ApiError::NotFound(format!("assessment not found: {}", responses.assessment_id))
    })?;
    for (&question_id, &value) in &responses.answers {
        assessment.validate_answer(question_id, value)?;
    }
    Ok(())
}

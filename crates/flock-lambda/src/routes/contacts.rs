use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;

use flock_audit::events::AuditEvent;
use flock_core::models::contact::{Contact, ContactSource};
use flock_core::models::respondent::ViewerTier;
use flock_storage::responses as store;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateContact {
    pub email: String,
    pub source: ContactSource,
}

pub async fn create_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContact>,
) -> Result<Json<Contact>, ApiError> {
    if !request.email.contains('@') {
        return Err(ApiError::BadRequest(format!(
            "invalid email: {}",
            request.email
        )));
    }

    let contact = Contact::new(&request.email, request.source);
    store::save_contact(&state.s3, &state.bucket, &contact).await?;

    let event = AuditEvent::new("contact_captured", format!("email/{}", contact.email));
    match &contact.source {
        ContactSource::AssessmentGate { assessment_id } => {
            event.with_assessment(assessment_id).emit()
        }
        ContactSource::Form { .. } => event.emit(),
    }

    Ok(Json(contact))
}

/// Captured leads, for CRM export. Staff only.
pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(tier): Extension<ViewerTier>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    if !tier.is_authenticated() {
        return Err(ApiError::Unauthorized(
            "sign in to view captured contacts".to_string(),
        ));
    }

    let contacts = store::list_contacts(&state.s3, &state.bucket).await?;
    Ok(Json(contacts))
}

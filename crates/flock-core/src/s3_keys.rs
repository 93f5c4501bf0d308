//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of assessment objects in the Flock S3 bucket.

use crate::models::respondent::{normalize_email, RespondentId};

pub fn response_set(assessment_id: &str, respondent: &RespondentId) -> String {
    format!("responses/{assessment_id}/{}.json", respondent.storage_key())
}

pub fn result(assessment_id: &str, respondent: &RespondentId) -> String {
    format!("results/{assessment_id}/{}.json", respondent.storage_key())
}

pub fn contact(email: &str) -> String {
    format!("contacts/{}.json", normalize_email(email))
}

pub const CONTACTS_PREFIX: &str = "contacts/";

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::respondent::normalize_email;

/// A lead captured for ministry follow-up.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contact {
    pub id: Uuid,
    pub email: String,
    pub source: ContactSource,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind")]
#[ts(export)]
pub enum ContactSource {
    /// Captured by the mid-assessment email gate.
    AssessmentGate { assessment_id: String },
    /// Submitted through a site form.
    Form { form_id: String },
}

impl Contact {
    pub fn new(email: &str, source: ContactSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            source,
            created_at: jiff::Timestamp::now(),
        }
    }
}

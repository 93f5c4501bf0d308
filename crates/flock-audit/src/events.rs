use serde::Serialize;
use tracing::info;

/// A structured audit event for logging pipeline actions.
///
/// Events are logged via `tracing` so they appear in CloudWatch Logs under
/// the JSON subscriber the API installs. `respondent` carries the storage
/// key form of the identity, never raw answer data.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub respondent: String,
    pub assessment_id: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, respondent: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            respondent: respondent.into(),
            assessment_id: None,
            details: None,
        }
    }

    pub fn with_assessment(mut self, assessment_id: impl Into<String>) -> Self {
        self.assessment_id = Some(assessment_id.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.respondent = %self.respondent,
            audit.assessment_id = self.assessment_id.as_deref().unwrap_or("-"),
            audit.details = ?self.details,
            "audit event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_optional_fields() {
        let event = AuditEvent::new("assessment_completed", "email/kim@example.org")
            .with_assessment("spiritual_gifts")
            .with_details(serde_json::json!({ "answered": 40 }));

        assert_eq!(event.action, "assessment_completed");
        assert_eq!(event.assessment_id.as_deref(), Some("spiritual_gifts"));
        assert!(event.details.is_some());
    }
}

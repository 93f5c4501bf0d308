//! Narrative content lookup.
//!
//! The scoring engine never hard-codes descriptive text: it receives a
//! [`NarrativeTable`] keyed by (assessment id, category id) and degrades to
//! a generic fallback when an entry is missing, so a respondent always
//! receives a result.

use std::collections::BTreeMap;

use flock_core::models::result::Narrative;

use crate::error::AssessmentError;

/// Lookup table from (assessment id, category id) to authored content.
#[derive(Debug, Clone, Default)]
pub struct NarrativeTable {
    entries: BTreeMap<(String, String), Narrative>,
}

impl NarrativeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The content shipped with the built-in banks.
    pub fn builtin() -> Self {
        crate::content::builtin()
    }

    pub fn insert(
        &mut self,
        assessment_id: impl Into<String>,
        category_id: impl Into<String>,
        narrative: Narrative,
    ) {
        self.entries
            .insert((assessment_id.into(), category_id.into()), narrative);
    }

    pub fn get(&self, assessment_id: &str, category_id: &str) -> Option<&Narrative> {
        self.entries
            .get(&(assessment_id.to_string(), category_id.to_string()))
    }

    /// Strict lookup for callers that must not fall back.
    pub fn require(
        &self,
        assessment_id: &str,
        category_id: &str,
    ) -> Result<&Narrative, AssessmentError> {
        self.get(assessment_id, category_id)
            .ok_or_else(|| AssessmentError::MissingNarrative {
                assessment_id: assessment_id.to_string(),
                category_id: category_id.to_string(),
            })
    }

    /// Lookup that substitutes the generic fallback for a missing entry.
    pub fn get_or_fallback(
        &self,
        assessment_id: &str,
        category_id: &str,
        category_name: &str,
    ) -> Narrative {
        self.get(assessment_id, category_id)
            .cloned()
            .unwrap_or_else(|| fallback_narrative(category_name))
    }
}

/// Generic narrative used when no authored content exists for a winning
/// category.
pub fn fallback_narrative(category_name: &str) -> Narrative {
    Narrative {
        summary: format!(
            "{category_name} stands out as a defining strength in your responses. \
             Talk with a ministry leader about what this looks like for you."
        ),
        strengths: vec![format!("You scored highest in {category_name}.")],
        growth_areas: Vec::new(),
        recommendations: vec![
            "Ask a ministry leader where this strength is needed right now.".to_string(),
        ],
        references: Vec::new(),
        next_steps: vec!["Review your answers with someone who knows you well.".to_string()],
    }
}

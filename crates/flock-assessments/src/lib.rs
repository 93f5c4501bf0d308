//! flock-assessments
//!
//! Assessment bank definitions, the response-collection session, the scoring
//! engine, and result rendering. Pure data and logic — no AWS dependency.

pub mod bank;
pub mod banks;
mod content;
pub mod error;
pub mod narrative;
pub mod render;
pub mod scoring;
pub mod session;

use bank::{Category, Question};
use error::AssessmentError;

/// Trait implemented by each assessment bank.
pub trait Assessment: Send + Sync {
    /// Unique identifier for this assessment (e.g., "spiritual_gifts").
    fn id(&self) -> &str;

    /// Human-readable name shown on the assessment picker.
    fn name(&self) -> &str;

    /// Short blurb shown on the assessment picker.
    fn description(&self) -> &str;

    /// The scoring categories, in declaration order. Declaration order is
    /// the tie-break for ranking.
    fn categories(&self) -> &[Category];

    /// The question bank, in the order respondents see it.
    fn questions(&self) -> &[Question];

    /// Zero-based question index at which anonymous respondents are asked
    /// for an email before continuing. `None` disables the gate.
    fn email_gate_index(&self) -> Option<usize> {
        Some(4)
    }

    fn question(&self, question_id: u16) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == question_id)
    }

    fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.id == category_id)
    }

    /// Validate one answer against this assessment's bank.
    fn validate_answer(&self, question_id: u16, value: u8) -> Result<(), AssessmentError> {
        let question =
            self.question(question_id)
                .ok_or_else(|| AssessmentError::UnknownQuestion {
                    assessment_id: self.id().to_string(),
                    question_id,
                })?;
        let range = question.scale.range();
        if !range.contains(value) {
            return Err(AssessmentError::AnswerOutOfRange {
                question_id,
                value,
                min: range.min,
                max: range.max,
            });
        }
        Ok(())
    }
}

/// Return all registered assessments.
pub fn all_assessments() -> Vec<Box<dyn Assessment>> {
    vec![
        Box::new(banks::spiritual_gifts::SpiritualGifts),
        Box::new(banks::life_season::LifeSeason),
    ]
}

/// Look up an assessment by ID.
pub fn get_assessment(id: &str) -> Option<Box<dyn Assessment>> {
    all_assessments().into_iter().find(|a| a.id() == id)
}

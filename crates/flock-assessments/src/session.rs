//! The response collector: a sequential, resumable answering session.
//!
//! Pure state machine — no I/O. The API boundary persists the inner
//! [`ResponseSet`] through flock-storage and reports save failures as
//! non-fatal notices; answers already recorded here are never lost to a
//! failed save.

use flock_core::models::respondent::RespondentId;
use flock_core::models::response_set::ResponseSet;

use crate::bank::Question;
use crate::error::AssessmentError;
use crate::scoring::missing_answers;
use crate::{get_assessment, Assessment};

/// Outcome of [`AssessmentSession::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Cursor moved to the question at this index.
    Moved(usize),
    /// The email gate is active: supply an address or skip it before
    /// continuing. The cursor has not moved.
    IdentityRequired,
    /// Every question is answered; the response set is now complete.
    Complete,
    /// At the last question with answers still missing.
    Incomplete { unanswered: usize },
}

/// Gate progress for an anonymous respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    /// Will fire when the configured question index is reached.
    Pending,
    /// Identity supplied, or the respondent was known from the start.
    Satisfied,
    /// Respondent declined; collection continues anonymously.
    Skipped,
}

pub struct AssessmentSession {
    assessment: Box<dyn Assessment>,
    responses: ResponseSet,
    cursor: usize,
    gate: GateState,
}

impl AssessmentSession {
    /// Start a fresh session for a respondent.
    pub fn begin(assessment_id: &str, respondent: RespondentId) -> Result<Self, AssessmentError> {
        let assessment = get_assessment(assessment_id)
            .ok_or_else(|| AssessmentError::UnknownAssessment(assessment_id.to_string()))?;
        let gate = initial_gate(assessment.as_ref(), &respondent);
        let responses = ResponseSet::new(assessment_id, respondent);
        Ok(Self {
            assessment,
            responses,
            cursor: 0,
            gate,
        })
    }

    /// Rebuild a session from a persisted partial set.
    ///
    /// The cursor lands on the first unanswered question. Resumption
    /// replaces any prior in-memory state rather than merging with it.
    pub fn resume(responses: ResponseSet) -> Result<Self, AssessmentError> {
        let assessment = get_assessment(&responses.assessment_id)
            .ok_or_else(|| AssessmentError::UnknownAssessment(responses.assessment_id.clone()))?;
        let total = assessment.questions().len();
        let cursor = assessment
            .questions()
            .iter()
            .position(|q| !responses.answers.contains_key(&q.id))
            .unwrap_or(total.saturating_sub(1));
        let mut gate = initial_gate(assessment.as_ref(), &responses.respondent);
        // A set that already advanced past the gate index was gated once
        // before it was saved; do not gate it again.
        if gate == GateState::Pending
            && let Some(gate_idx) = assessment.email_gate_index()
            && cursor > gate_idx
        {
            gate = GateState::Skipped;
        }
        Ok(Self {
            assessment,
            responses,
            cursor,
            gate,
        })
    }

    pub fn assessment(&self) -> &dyn Assessment {
        self.assessment.as_ref()
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn into_responses(self) -> ResponseSet {
        self.responses
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The question currently awaiting an answer.
    pub fn current_question(&self) -> &Question {
        &self.assessment.questions()[self.cursor]
    }

    /// (answered, total) for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.responses.answered(), self.assessment.questions().len())
    }

    /// Record (or overwrite) the answer for a question. Re-answering is
    /// idempotent: the latest value wins.
    pub fn record_answer(&mut self, question_id: u16, value: u8) -> Result<(), AssessmentError> {
        if self.responses.is_complete() {
            return Err(AssessmentError::AlreadyComplete(
                self.responses.assessment_id.clone(),
            ));
        }
        self.assessment.validate_answer(question_id, value)?;
        self.responses.record(question_id, value);
        Ok(())
    }

    /// Move to the next question, honoring the email gate. At the last
    /// question this attempts completion instead of moving.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let total = self.assessment.questions().len();
        let next = self.cursor + 1;

        if self.gate == GateState::Pending
            && let Some(gate_idx) = self.assessment.email_gate_index()
            && next >= gate_idx
            && next < total
        {
            return AdvanceOutcome::IdentityRequired;
        }

        if next >= total {
            let unanswered = missing_answers(self.assessment.as_ref(), &self.responses).len();
            if unanswered > 0 {
                return AdvanceOutcome::Incomplete { unanswered };
            }
            // Keep the original completion timestamp on a resumed set.
            if !self.responses.is_complete() {
                self.responses.mark_complete();
            }
            return AdvanceOutcome::Complete;
        }

        self.cursor = next;
        AdvanceOutcome::Moved(next)
    }

    /// Step back one question. Returns false at the first question.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Satisfy the email gate. An anonymous response set is rekeyed to the
    /// supplied address, so the next upsert lands under the new identity;
    /// the boundary records the lead and deletes the orphaned row.
    pub fn provide_email(&mut self, email: &str) {
        if self.responses.respondent.is_anonymous() {
            self.responses.respondent = RespondentId::email(email);
        }
        self.gate = GateState::Satisfied;
    }

    /// Decline the email gate. Collection continues, but progress remains
    /// keyed to the anonymous session.
    pub fn skip_gate(&mut self) {
        if self.gate == GateState::Pending {
            self.gate = GateState::Skipped;
        }
    }
}

fn initial_gate(assessment: &dyn Assessment, respondent: &RespondentId) -> GateState {
    if assessment.email_gate_index().is_none() || !respondent.is_anonymous() {
        GateState::Satisfied
    } else {
        GateState::Pending
    }
}

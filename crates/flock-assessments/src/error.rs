use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("unknown assessment: {0}")]
    UnknownAssessment(String),

    #[error("unknown question {question_id} for assessment '{assessment_id}'")]
    UnknownQuestion {
        assessment_id: String,
        question_id: u16,
    },

    #[error("answer {value} for question {question_id} is outside range [{min}, {max}]")]
    AnswerOutOfRange {
        question_id: u16,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("response set incomplete: {missing} of {total} questions unanswered")]
    Incomplete { missing: usize, total: usize },

    #[error("response set for '{actual}' scored against assessment '{expected}'")]
    AssessmentMismatch { expected: String, actual: String },

    #[error("response set for '{0}' is already complete")]
    AlreadyComplete(String),

    #[error("no narrative content for category '{category_id}' in assessment '{assessment_id}'")]
    MissingNarrative {
        assessment_id: String,
        category_id: String,
    },

    #[error("assessment '{0}' has no scoreable categories")]
    NoCategories(String),
}

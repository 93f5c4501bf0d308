use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid respondent token: {0}")]
    InvalidRespondentToken(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}

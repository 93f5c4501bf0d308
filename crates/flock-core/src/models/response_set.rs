use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::respondent::RespondentId;

/// One respondent's answers to one assessment, keyed by question ordinal.
///
/// Built incrementally as the respondent advances and upserted to storage
/// along the way; immutable once `status` is `Complete`. `BTreeMap` keeps
/// iteration and serialization order deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet {
    pub assessment_id: String,
    pub respondent: RespondentId,
    pub answers: BTreeMap<u16, u8>,
    pub status: ResponseStatus,
    pub started_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    pub completed_at: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseStatus {
    InProgress,
    Complete,
}

impl ResponseSet {
    pub fn new(assessment_id: impl Into<String>, respondent: RespondentId) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            assessment_id: assessment_id.into(),
            respondent,
            answers: BTreeMap::new(),
            status: ResponseStatus::InProgress,
            started_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Record or overwrite one answer. Range validation happens in the
    /// assessment layer before this is called.
    pub fn record(&mut self, question_id: u16, value: u8) {
        self.answers.insert(question_id, value);
        self.updated_at = jiff::Timestamp::now();
    }

    pub fn mark_complete(&mut self) {
        let now = jiff::Timestamp::now();
        self.status = ResponseStatus::Complete;
        self.completed_at = Some(now);
        self.updated_at = now;
    }

    pub fn is_complete(&self) -> bool {
        self.status == ResponseStatus::Complete
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }
}

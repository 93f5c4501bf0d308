use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::respondent::RespondentId;

/// A single category's computed score.
///
/// `raw` is the sum of answer values for questions tagged with the
/// category, `max` the theoretical maximum for those questions, and
/// `percent` the 0–100 normalization used for cross-category comparison.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category_id: String,
    pub name: String,
    pub raw: u32,
    pub max: u32,
    pub percent: f64,
}

/// Authored narrative content attached to a scored category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Narrative {
    pub summary: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub recommendations: Vec<String>,
    pub references: Vec<String>,
    pub next_steps: Vec<String>,
}

/// The output of scoring a complete response set.
///
/// Carries no timestamps or generated ids: identical inputs must produce
/// byte-identical results. [`StoredResult`] adds those at the persistence
/// boundary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub assessment_id: String,
    pub respondent: RespondentId,
    /// All scored categories, descending; exact ties keep bank
    /// declaration order.
    pub scores: Vec<CategoryScore>,
    pub primary: String,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub narrative: Narrative,
    pub secondary_narrative: Option<Narrative>,
}

/// Persisted result snapshot for fast redisplay. The response set it was
/// scored from remains the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredResult {
    pub id: Uuid,
    pub result: AssessmentResult,
    pub created_at: jiff::Timestamp,
}

impl StoredResult {
    pub fn new(result: AssessmentResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            result,
            created_at: jiff::Timestamp::now(),
        }
    }
}

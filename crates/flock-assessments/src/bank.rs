use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The fixed answer scale a question is asked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseScale {
    /// 1 = strongly disagree … 5 = strongly agree.
    Agreement5,
    /// 1 = never … 5 = always.
    Frequency5,
}

impl ResponseScale {
    pub fn range(self) -> AnswerRange {
        match self {
            ResponseScale::Agreement5 | ResponseScale::Frequency5 => AnswerRange { min: 1, max: 5 },
        }
    }

    /// Anchor labels, lowest value first.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            ResponseScale::Agreement5 => &[
                "Strongly disagree",
                "Disagree",
                "Neutral",
                "Agree",
                "Strongly agree",
            ],
            ResponseScale::Frequency5 => &["Never", "Rarely", "Sometimes", "Often", "Always"],
        }
    }
}

/// Inclusive answer bounds for a scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRange {
    pub min: u8,
    pub max: u8,
}

impl AnswerRange {
    pub fn contains(self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One statement in an assessment's bank.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// 1-based ordinal within the assessment.
    pub id: u16,
    pub prompt: String,
    pub scale: ResponseScale,
    /// Scoring category this question contributes to. Untagged questions
    /// are collected but never scored.
    pub category: Option<String>,
}

/// A scoring bucket (a spiritual gift, a season of life) that one or more
/// questions contribute to.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
}

//! Result presentation gating.
//!
//! Pure display policy: how much of a scored result each viewer tier sees.
//! The API renders server-side and never ships the raw stored result to an
//! anonymous client, so the gate holds at the data layer too.

use serde::Serialize;
use ts_rs::TS;

use flock_core::models::respondent::ViewerTier;
use flock_core::models::result::{AssessmentResult, CategoryScore};

/// What a viewer is allowed to see of an assessment result.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ResultView {
    pub assessment_id: String,
    pub primary: String,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub scores: Vec<CategoryScore>,
    /// Summary of the primary category, shown to every tier.
    pub summary: String,
    /// Narrative detail beyond the summary; `None` for anonymous viewers.
    pub extras: Option<ResultExtras>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ResultExtras {
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub recommendations: Vec<String>,
    pub references: Vec<String>,
    pub next_steps: Vec<String>,
    pub secondary_summary: Option<String>,
}

/// Project a scored result down to what the viewer's tier may see.
pub fn render(result: &AssessmentResult, tier: ViewerTier) -> ResultView {
    let extras = tier.is_authenticated().then(|| ResultExtras {
        strengths: result.narrative.strengths.clone(),
        growth_areas: result.narrative.growth_areas.clone(),
        recommendations: result.narrative.recommendations.clone(),
        references: result.narrative.references.clone(),
        next_steps: result.narrative.next_steps.clone(),
        secondary_summary: result.secondary_narrative.as_ref().map(|n| n.summary.clone()),
    });

    ResultView {
        assessment_id: result.assessment_id.clone(),
        primary: result.primary.clone(),
        secondary: result.secondary.clone(),
        tertiary: result.tertiary.clone(),
        scores: result.scores.clone(),
        summary: result.narrative.summary.clone(),
        extras,
    }
}

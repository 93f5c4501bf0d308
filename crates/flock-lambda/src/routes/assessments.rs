use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use flock_assessments::bank::{Category, Question, ResponseScale};
use flock_assessments::{all_assessments, get_assessment, Assessment};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct AssessmentSummary {
    id: String,
    name: String,
    description: String,
    question_count: usize,
}

#[derive(Serialize)]
pub struct AssessmentDetail {
    id: String,
    name: String,
    description: String,
    categories: Vec<Category>,
    questions: Vec<Question>,
    scales: Vec<ScaleInfo>,
    email_gate_index: Option<usize>,
}

/// Anchor labels and bounds for a scale used by this bank, so the client
/// renders answer buttons without hard-coding them.
#[derive(Serialize)]
pub struct ScaleInfo {
    scale: ResponseScale,
    labels: Vec<String>,
    min: u8,
    max: u8,
}

pub async fn list_assessments() -> Json<Vec<AssessmentSummary>> {
    let assessments: Vec<AssessmentSummary> = all_assessments()
        .iter()
        .map(|a| AssessmentSummary {
            id: a.id().to_string(),
            name: a.name().to_string(),
            description: a.description().to_string(),
            question_count: a.questions().len(),
        })
        .collect();
    Json(assessments)
}

pub async fn get_assessment_detail(
    Path(id): Path<String>,
) -> Result<Json<AssessmentDetail>, ApiError> {
    let assessment = get_assessment(&id)
        .ok_or_else(|| ApiError::NotFound(format!("assessment not found: {id}")))?;

    Ok(Json(AssessmentDetail {
        id: assessment.id().to_string(),
        name: assessment.name().to_string(),
        description: assessment.description().to_string(),
        categories: assessment.categories().to_vec(),
        questions: assessment.questions().to_vec(),
        scales: scale_infos(assessment.as_ref()),
        email_gate_index: assessment.email_gate_index(),
    }))
}

fn scale_infos(assessment: &dyn Assessment) -> Vec<ScaleInfo> {
    let mut scales: Vec<ResponseScale> = Vec::new();
    for question in assessment.questions() {
        if !scales.contains(&question.scale) {
            scales.push(question.scale);
        }
    }
    scales
        .into_iter()
        .map(|scale| {
            let range = scale.range();
            ScaleInfo {
                scale,
                labels: scale.labels().iter().map(|l| l.to_string()).collect(),
                min: range.min,
                max: range.max,
            }
        })
        .collect()
}

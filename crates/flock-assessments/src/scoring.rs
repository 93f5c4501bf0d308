//! The scoring engine: a pure transformation from a complete response set
//! to a ranked assessment result.
//!
//! No clock, no randomness, no I/O. Scoring the same response set against
//! the same bank and narrative table yields a byte-identical result.

use flock_core::models::response_set::ResponseSet;
use flock_core::models::result::{AssessmentResult, CategoryScore};

use crate::error::AssessmentError;
use crate::narrative::NarrativeTable;
use crate::Assessment;

/// Question ordinals that still lack an answer, in bank order.
pub fn missing_answers(assessment: &dyn Assessment, responses: &ResponseSet) -> Vec<u16> {
    assessment
        .questions()
        .iter()
        .filter(|q| !responses.answers.contains_key(&q.id))
        .map(|q| q.id)
        .collect()
}

/// Score a complete response set.
///
/// Every question must be answered; partial sets are rejected rather than
/// scored low. Narrative content comes from the supplied table, and a
/// winning category with no entry degrades to the generic fallback so the
/// respondent always receives a result.
pub fn score(
    assessment: &dyn Assessment,
    responses: &ResponseSet,
    narratives: &NarrativeTable,
) -> Result<AssessmentResult, AssessmentError> {
    if responses.assessment_id != assessment.id() {
        return Err(AssessmentError::AssessmentMismatch {
            expected: assessment.id().to_string(),
            actual: responses.assessment_id.clone(),
        });
    }

    let missing = missing_answers(assessment, responses);
    if !missing.is_empty() {
        return Err(AssessmentError::Incomplete {
            missing: missing.len(),
            total: assessment.questions().len(),
        });
    }

    let mut scores = category_scores(assessment, responses);
    if scores.is_empty() {
        return Err(AssessmentError::NoCategories(assessment.id().to_string()));
    }

    // Descending by exact raw/max ratio, compared by cross-multiplication
    // so unequal question counts never hit float rounding. The sort is
    // stable, so exact ties keep bank declaration order: the
    // first-declared category wins.
    scores.sort_by(|a, b| {
        (u64::from(b.raw) * u64::from(a.max)).cmp(&(u64::from(a.raw) * u64::from(b.max)))
    });

    let primary = scores[0].clone();
    let secondary = scores.get(1).cloned();
    let tertiary = scores.get(2).cloned();

    let narrative = narratives.get_or_fallback(assessment.id(), &primary.category_id, &primary.name);
    let secondary_narrative = secondary
        .as_ref()
        .map(|s| narratives.get_or_fallback(assessment.id(), &s.category_id, &s.name));

    Ok(AssessmentResult {
        assessment_id: assessment.id().to_string(),
        respondent: responses.respondent.clone(),
        primary: primary.category_id,
        secondary: secondary.map(|s| s.category_id),
        tertiary: tertiary.map(|s| s.category_id),
        scores,
        narrative,
        secondary_narrative,
    })
}

/// Raw and normalized scores per category, in bank declaration order.
///
/// A category with no tagged questions is not scoreable and is skipped
/// rather than reported as zero.
pub fn category_scores(assessment: &dyn Assessment, responses: &ResponseSet) -> Vec<CategoryScore> {
    assessment
        .categories()
        .iter()
        .filter_map(|category| {
            let mut raw: u32 = 0;
            let mut max: u32 = 0;
            for question in assessment.questions() {
                if question.category.as_deref() == Some(category.id.as_str()) {
                    max += u32::from(question.scale.range().max);
                    if let Some(&value) = responses.answers.get(&question.id) {
                        raw += u32::from(value);
                    }
                }
            }
            if max == 0 {
                return None;
            }
            Some(CategoryScore {
                category_id: category.id.clone(),
                name: category.name.clone(),
                raw,
                max,
                percent: f64::from(raw) * 100.0 / f64::from(max),
            })
        })
        .collect()
}

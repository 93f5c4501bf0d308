use flock_assessments::bank::{Category, Question, ResponseScale};
use flock_assessments::error::AssessmentError;
use flock_assessments::narrative::NarrativeTable;
use flock_assessments::scoring::{category_scores, missing_answers, score};
use flock_assessments::Assessment;
use flock_core::models::respondent::RespondentId;
use flock_core::models::response_set::ResponseSet;
use uuid::Uuid;

struct Bank {
    id: String,
    categories: Vec<Category>,
    questions: Vec<Question>,
}

impl Assessment for Bank {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        "Fixture Bank"
    }

    fn description(&self) -> &str {
        ""
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn email_gate_index(&self) -> Option<usize> {
        None
    }
}

fn cat(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn q(id: u16, category: Option<&str>) -> Question {
    Question {
        id,
        prompt: format!("Statement {id}"),
        scale: ResponseScale::Agreement5,
        category: category.map(|c| c.to_string()),
    }
}

/// Two categories over five questions: X gets q1 and q3, Y gets q2, q4, q5.
fn two_category() -> Bank {
    Bank {
        id: "fixture".to_string(),
        categories: vec![cat("x", "X"), cat("y", "Y")],
        questions: vec![
            q(1, Some("x")),
            q(2, Some("y")),
            q(3, Some("x")),
            q(4, Some("y")),
            q(5, Some("y")),
        ],
    }
}

fn anon() -> RespondentId {
    RespondentId::Anonymous {
        session: Uuid::new_v4(),
    }
}

fn respond(bank: &Bank, values: &[(u16, u8)]) -> ResponseSet {
    let mut responses = ResponseSet::new(bank.id.clone(), anon());
    for &(id, value) in values {
        responses.record(id, value);
    }
    responses
}

#[test]
fn two_category_example() {
    let bank = two_category();
    let responses = respond(&bank, &[(1, 5), (2, 1), (3, 5), (4, 1), (5, 1)]);
    let result = score(&bank, &responses, &NarrativeTable::new()).unwrap();

    assert_eq!(result.primary, "x");
    assert_eq!(result.secondary.as_deref(), Some("y"));
    assert_eq!(result.tertiary, None);

    let x = &result.scores[0];
    assert_eq!((x.raw, x.max), (10, 10));
    assert_eq!(x.percent, 100.0);

    let y = &result.scores[1];
    assert_eq!((y.raw, y.max), (3, 15));
    assert_eq!(y.percent, 20.0);
}

#[test]
fn incomplete_set_is_rejected() {
    let bank = two_category();
    let responses = respond(&bank, &[(1, 5), (2, 1), (3, 5), (4, 1)]);

    assert_eq!(missing_answers(&bank, &responses), vec![5]);
    match score(&bank, &responses, &NarrativeTable::new()) {
        Err(AssessmentError::Incomplete { missing, total }) => {
            assert_eq!((missing, total), (1, 5));
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn mismatched_assessment_is_rejected() {
    let bank = two_category();
    let mut responses = respond(&bank, &[(1, 5), (2, 1), (3, 5), (4, 1), (5, 1)]);
    responses.assessment_id = "some_other_bank".to_string();

    assert!(matches!(
        score(&bank, &responses, &NarrativeTable::new()),
        Err(AssessmentError::AssessmentMismatch { .. })
    ));
}

#[test]
fn percent_stays_within_bounds() {
    let bank = two_category();

    let floor = respond(&bank, &[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]);
    for entry in category_scores(&bank, &floor) {
        assert_eq!(entry.percent, 20.0);
    }

    let ceiling = respond(&bank, &[(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]);
    for entry in category_scores(&bank, &ceiling) {
        assert_eq!(entry.percent, 100.0);
    }
}

#[test]
fn identical_inputs_produce_identical_bytes() {
    let bank = two_category();
    let responses = respond(&bank, &[(1, 4), (2, 2), (3, 3), (4, 5), (5, 1)]);
    let narratives = NarrativeTable::builtin();

    let first = score(&bank, &responses, &narratives).unwrap();
    let second = score(&bank, &responses, &narratives).unwrap();

    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn exact_ties_keep_declaration_order() {
    let bank = Bank {
        id: "fixture".to_string(),
        categories: vec![cat("alpha", "Alpha"), cat("beta", "Beta"), cat("gamma", "Gamma")],
        questions: vec![q(1, Some("alpha")), q(2, Some("beta")), q(3, Some("gamma"))],
    };
    let responses = respond(&bank, &[(1, 3), (2, 3), (3, 3)]);
    let result = score(&bank, &responses, &NarrativeTable::new()).unwrap();

    assert_eq!(result.primary, "alpha");
    assert_eq!(result.secondary.as_deref(), Some("beta"));
    assert_eq!(result.tertiary.as_deref(), Some("gamma"));
}

#[test]
fn unequal_question_counts_rank_by_ratio() {
    // One question at 4/5 (80%) must outrank three questions summing
    // 9/15 (60%) even though 9 > 4 raw.
    let bank = two_category();
    let responses = respond(&bank, &[(1, 4), (2, 3), (3, 4), (4, 3), (5, 3)]);
    let result = score(&bank, &responses, &NarrativeTable::new()).unwrap();

    assert_eq!(result.primary, "x");
    assert_eq!(result.scores[0].percent, 80.0);
    assert_eq!(result.scores[1].percent, 60.0);
}

#[test]
fn missing_narrative_falls_back() {
    let bank = two_category();
    let responses = respond(&bank, &[(1, 5), (2, 1), (3, 5), (4, 1), (5, 1)]);
    let result = score(&bank, &responses, &NarrativeTable::new()).unwrap();

    assert!(result.narrative.summary.contains("X"));
    assert!(!result.narrative.recommendations.is_empty());
}

#[test]
fn authored_narrative_is_attached() {
    let bank = flock_assessments::get_assessment("spiritual_gifts").unwrap();
    let mut responses = ResponseSet::new("spiritual_gifts", anon());
    for question in bank.questions() {
        // Teaching questions high, everything else low.
        let value = if question.category.as_deref() == Some("teaching") {
            5
        } else {
            1
        };
        responses.record(question.id, value);
    }

    let result = score(bank.as_ref(), &responses, &NarrativeTable::builtin()).unwrap();
    assert_eq!(result.primary, "teaching");
    assert!(!result.narrative.references.is_empty());
    assert!(result.secondary_narrative.is_some());
}

#[test]
fn untagged_questions_count_for_completeness_but_not_score() {
    let bank = Bank {
        id: "fixture".to_string(),
        categories: vec![cat("x", "X")],
        questions: vec![q(1, Some("x")), q(2, None)],
    };

    let partial = respond(&bank, &[(1, 5)]);
    assert!(matches!(
        score(&bank, &partial, &NarrativeTable::new()),
        Err(AssessmentError::Incomplete { .. })
    ));

    let full = respond(&bank, &[(1, 5), (2, 1)]);
    let result = score(&bank, &full, &NarrativeTable::new()).unwrap();
    assert_eq!(result.scores.len(), 1);
    assert_eq!((result.scores[0].raw, result.scores[0].max), (5, 5));
}

#[test]
fn category_without_questions_is_not_ranked() {
    let bank = Bank {
        id: "fixture".to_string(),
        categories: vec![cat("empty", "Empty"), cat("x", "X")],
        questions: vec![q(1, Some("x"))],
    };
    let responses = respond(&bank, &[(1, 2)]);
    let result = score(&bank, &responses, &NarrativeTable::new()).unwrap();

    assert_eq!(result.scores.len(), 1);
    assert_eq!(result.primary, "x");
    assert_eq!(result.secondary, None);
}

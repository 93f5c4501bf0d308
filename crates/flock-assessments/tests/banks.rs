use std::collections::BTreeSet;

use flock_assessments::narrative::NarrativeTable;
use flock_assessments::{all_assessments, get_assessment};

#[test]
fn registry_ids_are_unique_and_resolvable() {
    let assessments = all_assessments();
    let ids: BTreeSet<_> = assessments.iter().map(|a| a.id().to_string()).collect();
    assert_eq!(ids.len(), assessments.len());

    for id in &ids {
        assert!(get_assessment(id).is_some());
    }
    assert!(get_assessment("unknown").is_none());
}

#[test]
fn question_ids_are_sequential_from_one() {
    for assessment in all_assessments() {
        for (idx, question) in assessment.questions().iter().enumerate() {
            assert_eq!(
                question.id,
                idx as u16 + 1,
                "{}: question ordinals must match presentation order",
                assessment.id()
            );
        }
    }
}

#[test]
fn every_tag_points_at_a_declared_category() {
    for assessment in all_assessments() {
        for question in assessment.questions() {
            if let Some(tag) = &question.category {
                assert!(
                    assessment.category(tag).is_some(),
                    "{}: question {} tagged with undeclared category '{tag}'",
                    assessment.id(),
                    question.id
                );
            }
        }
    }
}

#[test]
fn every_category_has_questions() {
    for assessment in all_assessments() {
        for category in assessment.categories() {
            let count = assessment
                .questions()
                .iter()
                .filter(|q| q.category.as_deref() == Some(category.id.as_str()))
                .count();
            assert!(
                count > 0,
                "{}: category '{}' has no questions",
                assessment.id(),
                category.id
            );
        }
    }
}

#[test]
fn builtin_narratives_cover_every_category() {
    let narratives = NarrativeTable::builtin();
    for assessment in all_assessments() {
        for category in assessment.categories() {
            assert!(
                narratives.require(assessment.id(), &category.id).is_ok(),
                "{}: no authored narrative for '{}'",
                assessment.id(),
                category.id
            );
        }
    }
}

#[test]
fn gate_indexes_fall_inside_the_bank() {
    for assessment in all_assessments() {
        if let Some(idx) = assessment.email_gate_index() {
            assert!(idx < assessment.questions().len());
        }
    }
}

#[test]
fn scale_labels_match_answer_ranges() {
    for assessment in all_assessments() {
        for question in assessment.questions() {
            let range = question.scale.range();
            let expected = usize::from(range.max - range.min) + 1;
            assert_eq!(question.scale.labels().len(), expected);
        }
    }
}

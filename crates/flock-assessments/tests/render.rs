use flock_assessments::render::render;
use flock_core::models::respondent::{RespondentId, ViewerTier};
use flock_core::models::result::{AssessmentResult, CategoryScore, Narrative};
use uuid::Uuid;

fn sample_result() -> AssessmentResult {
    let narrative = Narrative {
        summary: "You make truth clear.".to_string(),
        strengths: vec!["You study before you speak.".to_string()],
        growth_areas: vec!["Keep warmth in the room.".to_string()],
        recommendations: vec!["Co-teach a series.".to_string()],
        references: vec!["Romans 12:7".to_string()],
        next_steps: vec!["Ask for a teaching rep.".to_string()],
    };
    let secondary_narrative = Narrative {
        summary: "You love through action.".to_string(),
        strengths: Vec::new(),
        growth_areas: Vec::new(),
        recommendations: Vec::new(),
        references: Vec::new(),
        next_steps: Vec::new(),
    };
    AssessmentResult {
        assessment_id: "spiritual_gifts".to_string(),
        respondent: RespondentId::Anonymous {
            session: Uuid::new_v4(),
        },
        scores: vec![
            CategoryScore {
                category_id: "teaching".to_string(),
                name: "Teaching".to_string(),
                raw: 23,
                max: 25,
                percent: 92.0,
            },
            CategoryScore {
                category_id: "serving".to_string(),
                name: "Serving".to_string(),
                raw: 20,
                max: 25,
                percent: 80.0,
            },
        ],
        primary: "teaching".to_string(),
        secondary: Some("serving".to_string()),
        tertiary: None,
        narrative,
        secondary_narrative: Some(secondary_narrative),
    }
}

#[test]
fn anonymous_viewers_get_summary_and_scores_only() {
    let view = render(&sample_result(), ViewerTier::Anonymous);

    assert_eq!(view.primary, "teaching");
    assert_eq!(view.summary, "You make truth clear.");
    assert_eq!(view.scores.len(), 2);
    assert!(view.extras.is_none());
}

#[test]
fn members_get_the_full_narrative() {
    let view = render(&sample_result(), ViewerTier::Member);

    let extras = view.extras.expect("member view should carry extras");
    assert_eq!(extras.strengths, vec!["You study before you speak."]);
    assert_eq!(extras.references, vec!["Romans 12:7"]);
    assert_eq!(
        extras.secondary_summary.as_deref(),
        Some("You love through action.")
    );
}

#[test]
fn partners_get_the_full_narrative() {
    let view = render(&sample_result(), ViewerTier::Partner);
    assert!(view.extras.is_some());
}

#[test]
fn rendering_never_drops_the_ranking() {
    for tier in [ViewerTier::Anonymous, ViewerTier::Member, ViewerTier::Partner] {
        let view = render(&sample_result(), tier);
        assert_eq!(view.primary, "teaching");
        assert_eq!(view.secondary.as_deref(), Some("serving"));
        assert_eq!(view.tertiary, None);
    }
}

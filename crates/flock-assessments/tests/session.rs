use flock_assessments::error::AssessmentError;
use flock_assessments::session::{AdvanceOutcome, AssessmentSession};
use flock_core::models::respondent::RespondentId;
use flock_core::models::response_set::ResponseSet;
use uuid::Uuid;

fn anon() -> RespondentId {
    RespondentId::Anonymous {
        session: Uuid::new_v4(),
    }
}

fn begin_anonymous() -> AssessmentSession {
    AssessmentSession::begin("spiritual_gifts", anon()).unwrap()
}

/// Answer the current question with 3 and advance, asserting the cursor
/// moved forward.
fn answer_and_advance(session: &mut AssessmentSession) {
    let id = session.current_question().id;
    session.record_answer(id, 3).unwrap();
    let before = session.cursor();
    assert_eq!(session.advance(), AdvanceOutcome::Moved(before + 1));
}

#[test]
fn begin_rejects_unknown_assessment() {
    assert!(matches!(
        AssessmentSession::begin("no_such_bank", anon()),
        Err(AssessmentError::UnknownAssessment(_))
    ));
}

#[test]
fn answers_record_and_cursor_moves() {
    let mut session = begin_anonymous();
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.current_question().id, 1);

    session.record_answer(1, 4).unwrap();
    assert_eq!(session.advance(), AdvanceOutcome::Moved(1));
    assert_eq!(session.progress(), (1, 40));
}

#[test]
fn reanswering_keeps_latest_value() {
    let mut session = begin_anonymous();
    session.record_answer(1, 2).unwrap();
    session.record_answer(1, 5).unwrap();
    assert_eq!(session.responses().answers.get(&1), Some(&5));
    assert_eq!(session.progress(), (1, 40));
}

#[test]
fn out_of_range_and_unknown_answers_are_rejected() {
    let mut session = begin_anonymous();
    assert!(matches!(
        session.record_answer(1, 6),
        Err(AssessmentError::AnswerOutOfRange { .. })
    ));
    assert!(matches!(
        session.record_answer(1, 0),
        Err(AssessmentError::AnswerOutOfRange { .. })
    ));
    assert!(matches!(
        session.record_answer(999, 3),
        Err(AssessmentError::UnknownQuestion { .. })
    ));
}

#[test]
fn email_gate_fires_for_anonymous_at_fifth_question() {
    let mut session = begin_anonymous();
    for _ in 0..3 {
        answer_and_advance(&mut session);
    }
    let id = session.current_question().id;
    session.record_answer(id, 3).unwrap();

    // Advancing into index 4 hits the gate and the cursor stays put.
    assert_eq!(session.advance(), AdvanceOutcome::IdentityRequired);
    assert_eq!(session.cursor(), 3);
    assert_eq!(session.advance(), AdvanceOutcome::IdentityRequired);
}

#[test]
fn skipping_the_gate_continues_anonymously() {
    let mut session = begin_anonymous();
    for _ in 0..3 {
        answer_and_advance(&mut session);
    }
    session.record_answer(session.current_question().id, 3).unwrap();
    assert_eq!(session.advance(), AdvanceOutcome::IdentityRequired);

    session.skip_gate();
    assert_eq!(session.advance(), AdvanceOutcome::Moved(4));
    assert!(session.responses().respondent.is_anonymous());
}

#[test]
fn providing_email_rekeys_the_response_set() {
    let mut session = begin_anonymous();
    for _ in 0..3 {
        answer_and_advance(&mut session);
    }
    session.record_answer(session.current_question().id, 3).unwrap();
    assert_eq!(session.advance(), AdvanceOutcome::IdentityRequired);

    session.provide_email(" Robin@Example.Org");
    assert_eq!(
        session.responses().respondent,
        RespondentId::email("robin@example.org")
    );
    assert_eq!(session.advance(), AdvanceOutcome::Moved(4));
}

#[test]
fn known_respondents_are_never_gated() {
    let mut session =
        AssessmentSession::begin("spiritual_gifts", RespondentId::email("kim@example.org"))
            .unwrap();
    for _ in 0..6 {
        answer_and_advance(&mut session);
    }
}

#[test]
fn banks_without_a_gate_never_gate() {
    let mut session = AssessmentSession::begin("life_season", anon()).unwrap();
    for _ in 0..6 {
        answer_and_advance(&mut session);
    }
}

#[test]
fn retreat_stops_at_the_first_question() {
    let mut session = begin_anonymous();
    assert!(!session.retreat());

    answer_and_advance(&mut session);
    assert!(session.retreat());
    assert_eq!(session.cursor(), 0);
}

#[test]
fn answering_everything_completes_the_set() {
    let mut session =
        AssessmentSession::begin("spiritual_gifts", RespondentId::email("kim@example.org"))
            .unwrap();
    let ids: Vec<u16> = session.assessment().questions().iter().map(|q| q.id).collect();

    for (i, id) in ids.iter().enumerate() {
        session.record_answer(*id, 3).unwrap();
        if i + 1 < ids.len() {
            assert_eq!(session.advance(), AdvanceOutcome::Moved(i + 1));
        } else {
            assert_eq!(session.advance(), AdvanceOutcome::Complete);
        }
    }

    let responses = session.into_responses();
    assert!(responses.is_complete());
    assert!(responses.completed_at.is_some());
    assert_eq!(responses.answered(), ids.len());
}

#[test]
fn gaps_surface_at_the_last_question() {
    let mut session = AssessmentSession::begin("life_season", anon()).unwrap();
    let ids: Vec<u16> = session.assessment().questions().iter().map(|q| q.id).collect();

    // Answer everything except the second question.
    for (i, id) in ids.iter().enumerate() {
        if *id != 2 {
            session.record_answer(*id, 4).unwrap();
        }
        if i + 1 < ids.len() {
            session.advance();
        }
    }

    assert_eq!(session.advance(), AdvanceOutcome::Incomplete { unanswered: 1 });
    assert!(!session.responses().is_complete());
}

#[test]
fn completed_sets_reject_further_answers() {
    let mut session = AssessmentSession::begin("life_season", anon()).unwrap();
    let ids: Vec<u16> = session.assessment().questions().iter().map(|q| q.id).collect();
    for id in &ids {
        session.record_answer(*id, 2).unwrap();
        session.advance();
    }
    assert!(session.responses().is_complete());
    assert!(matches!(
        session.record_answer(1, 5),
        Err(AssessmentError::AlreadyComplete(_))
    ));
}

#[test]
fn resume_lands_on_the_first_unanswered_question() {
    let mut saved = ResponseSet::new("spiritual_gifts", anon());
    for id in 1..=10u16 {
        saved.record(id, 3);
    }

    let session = AssessmentSession::resume(saved).unwrap();
    assert_eq!(session.cursor(), 10);
    assert_eq!(session.current_question().id, 11);
    assert_eq!(session.progress(), (10, 40));
}

#[test]
fn resume_does_not_regate_a_set_that_passed_the_gate() {
    let mut saved = ResponseSet::new("spiritual_gifts", anon());
    for id in 1..=10u16 {
        saved.record(id, 3);
    }

    let mut session = AssessmentSession::resume(saved).unwrap();
    session.record_answer(11, 3).unwrap();
    assert_eq!(session.advance(), AdvanceOutcome::Moved(11));
}

#[test]
fn resume_rejects_unknown_assessment() {
    let saved = ResponseSet::new("no_such_bank", anon());
    assert!(matches!(
        AssessmentSession::resume(saved),
        Err(AssessmentError::UnknownAssessment(_))
    ));
}

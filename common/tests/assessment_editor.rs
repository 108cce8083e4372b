mod support;

use common::api::ApiError;
use common::editor::{
    create_assessment, delete_assessment, Confirmation, EditorError, EMPTY_ASSESSMENT_NAME,
};
use common::grades::Score;
use common::requests::CreateAssessmentRequest;
use futures::executor::block_on;
use support::{sample_assignment, Call, FakeApi};

#[test]
fn blank_name_is_rejected_without_a_request() {
    let api = FakeApi::new(sample_assignment());
    for name in ["", "   ", "\t\n"] {
        let result = block_on(create_assessment(&api, 7, name));
        assert_eq!(
            result,
            Err(EditorError::Validation(EMPTY_ASSESSMENT_NAME.to_string()))
        );
    }
    assert!(api.calls().is_empty());
}

#[test]
fn create_posts_trimmed_name_then_refetches() {
    let api = FakeApi::new(sample_assignment());

    let loaded = block_on(create_assessment(&api, 7, "  UTS  ")).unwrap();

    assert_eq!(
        api.calls(),
        vec![
            Call::CreateAssessment(CreateAssessmentRequest {
                teaching_assignment_id: 7,
                name: "UTS".to_string(),
            }),
            Call::Assignment(7),
        ]
    );
    let names: Vec<&str> = loaded.assignment.assessments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["UH 1", "UTS"]);
    assert!(!loaded.grades.has_pending_changes());
    assert_eq!(loaded.grades.score(1, 2), Score::Empty);
    assert_eq!(loaded.grades.score(1, 1), Score::Value(80.0));
}

#[test]
fn declined_delete_makes_no_request() {
    let api = FakeApi::new(sample_assignment());
    let outcome = block_on(delete_assessment(&api, 7, 1, Confirmation::Declined)).unwrap();
    assert!(outcome.is_none());
    assert!(api.calls().is_empty());
}

#[test]
fn confirmed_delete_sends_one_delete_then_one_refetch() {
    let api = FakeApi::new(sample_assignment());

    let loaded = block_on(delete_assessment(&api, 7, 1, Confirmation::Confirmed))
        .unwrap()
        .expect("confirmed delete reloads the assignment");

    assert_eq!(api.calls(), vec![Call::DeleteAssessment(1), Call::Assignment(7)]);
    assert!(loaded.assignment.assessments.is_empty());
    assert_eq!(loaded.grades.score(1, 1), Score::Empty);
}

#[test]
fn failed_create_skips_refetch_and_reports_server_message() {
    let api = FakeApi::new(sample_assignment());
    api.fail_next_with(ApiError::Http {
        status: 409,
        message: "Nama penilaian sudah ada".to_string(),
    });

    let err = block_on(create_assessment(&api, 7, "UH 1")).unwrap_err();

    assert_eq!(api.calls().len(), 1);
    match err {
        EditorError::Api(e) => {
            assert_eq!(e.user_message().as_deref(), Some("Nama penilaian sudah ada"))
        }
        other => panic!("unexpected error {other:?}"),
    }
}

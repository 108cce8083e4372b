use common::api::ApiError;
use common::editor::{Confirmation, EditorError, LoadedAssignment};
use common::model::assignment::{AssessmentId, StudentId};

pub enum Msg {
    Loaded(Result<LoadedAssignment, ApiError>),
    ScoreInput {
        student_id: StudentId,
        assessment_id: AssessmentId,
        raw: String,
    },
    SetNewAssessmentName(String),
    CreateAssessment,
    AssessmentCreated(Result<LoadedAssignment, EditorError>),
    RequestDelete(AssessmentId),
    ResolveDelete(Confirmation),
    AssessmentDeleted(Result<Option<LoadedAssignment>, EditorError>),
    Save,
    Saved(Result<(), ApiError>),
    Back,
}

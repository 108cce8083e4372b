//! Request payloads sent to the remote API.

use crate::model::assignment::{AssessmentId, AssignmentId, StudentId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Body of `POST /auth/login`.
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /teacher/assessments`.
pub struct CreateAssessmentRequest {
    pub teaching_assignment_id: AssignmentId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Body of `PUT /teacher/grades/bulk-update`.
pub struct BulkGradeUpdate {
    pub grades: Vec<GradeUpdate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeUpdate {
    pub student_id: StudentId,
    pub assessment_id: AssessmentId,
    /// `None` clears the grade server-side.
    pub score: Option<f64>,
}

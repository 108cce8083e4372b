//! Server round-trips of the grade input page.
//!
//! Creating or deleting an assessment never patches local state: both re-fetch
//! the assignment so the caller can rebuild its `GradeReconciler` from server
//! truth, new empty column included.

use std::error::Error;
use std::fmt;

use crate::api::{ApiError, GradeApi};
use crate::grades::GradeReconciler;
use crate::model::assignment::{AssessmentId, Assignment, AssignmentId};
use crate::requests::{BulkGradeUpdate, CreateAssessmentRequest};

pub const EMPTY_ASSESSMENT_NAME: &str = "Nama penilaian tidak boleh kosong.";

#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    /// Rejected locally, nothing was sent.
    Validation(String),
    Api(ApiError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::Validation(message) => write!(f, "{}", message),
            EditorError::Api(e) => write!(f, "{}", e),
        }
    }
}

impl Error for EditorError {}

impl From<ApiError> for EditorError {
    fn from(e: ApiError) -> Self {
        EditorError::Api(e)
    }
}

/// Answer to "delete this assessment and all its grades?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Assignment fetched at page load together with its fresh reconciler.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAssignment {
    pub assignment: Assignment,
    pub grades: GradeReconciler,
}

impl From<Assignment> for LoadedAssignment {
    fn from(assignment: Assignment) -> Self {
        let grades = GradeReconciler::initialize(&assignment);
        Self { assignment, grades }
    }
}

pub async fn load_assignment<A: GradeApi>(
    api: &A,
    assignment_id: AssignmentId,
) -> Result<LoadedAssignment, ApiError> {
    api.assignment(assignment_id).await.map(LoadedAssignment::from)
}

pub async fn create_assessment<A: GradeApi>(
    api: &A,
    assignment_id: AssignmentId,
    name: &str,
) -> Result<LoadedAssignment, EditorError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EditorError::Validation(EMPTY_ASSESSMENT_NAME.to_string()));
    }
    api.create_assessment(&CreateAssessmentRequest {
        teaching_assignment_id: assignment_id,
        name: name.to_string(),
    })
    .await?;
    Ok(load_assignment(api, assignment_id).await?)
}

/// Deletes an assessment once confirmed. `Ok(None)` means the user
/// declined and no request was made.
pub async fn delete_assessment<A: GradeApi>(
    api: &A,
    assignment_id: AssignmentId,
    assessment_id: AssessmentId,
    confirmation: Confirmation,
) -> Result<Option<LoadedAssignment>, EditorError> {
    if confirmation == Confirmation::Declined {
        return Ok(None);
    }
    api.delete_assessment(assessment_id).await?;
    Ok(Some(load_assignment(api, assignment_id).await?))
}

/// Sends a prepared diff. The caller commits its reconciler on `Ok` and
/// leaves it untouched on `Err`.
pub async fn submit_grades<A: GradeApi>(api: &A, update: &BulkGradeUpdate) -> Result<(), ApiError> {
    api.bulk_update_grades(update).await
}

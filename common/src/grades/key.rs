use crate::model::assignment::{AssessmentId, StudentId};
use std::fmt;

/// Cell address in the grade grid.
///
/// Ordered by student first so a diff lists one student's edits together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GradeKey {
    pub student_id: StudentId,
    pub assessment_id: AssessmentId,
}

impl GradeKey {
    pub fn new(student_id: StudentId, assessment_id: AssessmentId) -> Self {
        Self {
            student_id,
            assessment_id,
        }
    }
}

impl fmt::Display for GradeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student {} / assessment {}", self.student_id, self.assessment_id)
    }
}

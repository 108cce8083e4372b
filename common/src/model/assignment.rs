//! Teaching assignments as returned by `/teacher/my-classes` and
//! `/teacher/assignments/{id}`.
//!
//! The dashboard listing only carries the class and subject headers, so the
//! roster and assessment collections default to empty when absent.

use crate::serde_helpers::{decimal, optional_decimal, optional_label};
use serde::{Deserialize, Serialize};

pub type AssignmentId = u64;
pub type AssessmentId = u64;
pub type StudentId = u64;

/// Passing threshold used when the API omits `kkm` (the common default for
/// primary-school subjects).
pub const DEFAULT_KKM: f64 = 75.0;

fn default_kkm() -> f64 {
    DEFAULT_KKM
}

/// One teacher bound to one class and one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    pub class: ClassInfo,
    pub subject: Subject,
    #[serde(default = "default_kkm", deserialize_with = "decimal")]
    pub kkm: f64,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

impl Assignment {
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.class.students.iter().map(|enrollment| &enrollment.student)
    }

    pub fn assessment(&self, id: AssessmentId) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default, deserialize_with = "optional_label")]
    pub level: Option<String>,
    #[serde(default)]
    pub students: Vec<Enrollment>,
}

/// Roster row; the API wraps each student in a class-membership record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student: Student,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub nis: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

/// A named gradable event (quiz, mid-term...) inside an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: AssessmentId,
    pub name: String,
    #[serde(default)]
    pub teaching_assignment_id: Option<AssignmentId>,
    #[serde(default)]
    pub grades: Vec<GradeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub student_id: StudentId,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub score: Option<f64>,
}

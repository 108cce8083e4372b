//! Read models behind the summary page and the per-student report.
//!
//! Both travel twice: from the remote API to the browser, then from the
//! browser to the local backend that renders them as PDF.

use crate::model::assignment::{AssignmentId, ClassInfo, Student, StudentId, Subject, DEFAULT_KKM};
use crate::serde_helpers::{decimal, optional_decimal};
use serde::{Deserialize, Serialize};

fn default_kkm() -> f64 {
    DEFAULT_KKM
}

/// Response of `/teacher/assignments/{id}/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSummary {
    pub assignment: AssignmentHeader,
    #[serde(default)]
    pub student_summaries: Vec<StudentSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentHeader {
    #[serde(default)]
    pub id: Option<AssignmentId>,
    pub class: ClassInfo,
    pub subject: Subject,
    #[serde(default = "default_kkm", deserialize_with = "decimal")]
    pub kkm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub student_id: StudentId,
    pub nis: String,
    pub full_name: String,
    /// `None` when the student has no grade in any assessment yet.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub average_score: Option<f64>,
}

/// Response of `/teacher/assignments/{id}/students/{sid}/report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentReport {
    pub student: Student,
    pub class_name: String,
    /// Subject of the assignment the report was requested from.
    pub subject_name: String,
    #[serde(default)]
    pub results: Vec<SubjectResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResult {
    pub subject_name: String,
    #[serde(default = "default_kkm", deserialize_with = "decimal")]
    pub kkm: f64,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub final_score: Option<f64>,
}

#![allow(dead_code)]

use std::cell::RefCell;

use common::api::{ApiError, GradeApi};
use common::model::assignment::{
    Assessment, AssessmentId, Assignment, AssignmentId, ClassInfo, Enrollment, GradeRecord,
    Student, StudentId, Subject,
};
use common::model::summary::{AssignmentSummary, StudentReport};
use common::model::user::LoginResponse;
use common::requests::{BulkGradeUpdate, CreateAssessmentRequest, LoginRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String),
    MyClasses,
    Assignment(AssignmentId),
    CreateAssessment(CreateAssessmentRequest),
    DeleteAssessment(AssessmentId),
    BulkUpdate(BulkGradeUpdate),
    Summary(AssignmentId),
    StudentReport(AssignmentId, StudentId),
}

/// In-memory server holding one assignment; records every call it receives.
pub struct FakeApi {
    pub assignment: RefCell<Assignment>,
    pub calls: RefCell<Vec<Call>>,
    pub fail_next: RefCell<Option<ApiError>>,
    next_assessment_id: RefCell<AssessmentId>,
}

impl FakeApi {
    pub fn new(assignment: Assignment) -> Self {
        let next = assignment.assessments.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            assignment: RefCell::new(assignment),
            calls: RefCell::new(Vec::new()),
            fail_next: RefCell::new(None),
            next_assessment_id: RefCell::new(next),
        }
    }

    pub fn fail_next_with(&self, error: ApiError) {
        *self.fail_next.borrow_mut() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl GradeApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(Call::Login(request.username.clone()))?;
        Err(ApiError::Http {
            status: 400,
            message: "not used".to_string(),
        })
    }

    async fn my_classes(&self) -> Result<Vec<Assignment>, ApiError> {
        self.record(Call::MyClasses)?;
        Ok(vec![self.assignment.borrow().clone()])
    }

    async fn assignment(&self, id: AssignmentId) -> Result<Assignment, ApiError> {
        self.record(Call::Assignment(id))?;
        Ok(self.assignment.borrow().clone())
    }

    async fn create_assessment(&self, request: &CreateAssessmentRequest) -> Result<(), ApiError> {
        self.record(Call::CreateAssessment(request.clone()))?;
        let id = {
            let mut next = self.next_assessment_id.borrow_mut();
            let id = *next;
            *next += 1;
            id
        };
        self.assignment.borrow_mut().assessments.push(Assessment {
            id,
            name: request.name.clone(),
            teaching_assignment_id: Some(request.teaching_assignment_id),
            grades: Vec::new(),
        });
        Ok(())
    }

    async fn delete_assessment(&self, id: AssessmentId) -> Result<(), ApiError> {
        self.record(Call::DeleteAssessment(id))?;
        self.assignment.borrow_mut().assessments.retain(|a| a.id != id);
        Ok(())
    }

    async fn bulk_update_grades(&self, update: &BulkGradeUpdate) -> Result<(), ApiError> {
        self.record(Call::BulkUpdate(update.clone()))?;
        let mut assignment = self.assignment.borrow_mut();
        for grade in &update.grades {
            if let Some(assessment) = assignment
                .assessments
                .iter_mut()
                .find(|a| a.id == grade.assessment_id)
            {
                assessment.grades.retain(|g| g.student_id != grade.student_id);
                assessment.grades.push(GradeRecord {
                    student_id: grade.student_id,
                    score: grade.score,
                });
            }
        }
        Ok(())
    }

    async fn summary(&self, id: AssignmentId) -> Result<AssignmentSummary, ApiError> {
        self.record(Call::Summary(id))?;
        Err(ApiError::Network("not used".to_string()))
    }

    async fn student_report(
        &self,
        assignment_id: AssignmentId,
        student_id: StudentId,
    ) -> Result<StudentReport, ApiError> {
        self.record(Call::StudentReport(assignment_id, student_id))?;
        Err(ApiError::Network("not used".to_string()))
    }
}

/// Class IV-A, Matematika, two students, one assessment with one grade.
pub fn sample_assignment() -> Assignment {
    Assignment {
        id: 7,
        class: ClassInfo {
            id: Some(3),
            name: "IV-A".to_string(),
            level: Some("4".to_string()),
            students: vec![
                Enrollment {
                    student: Student {
                        id: 1,
                        nis: "2024001".to_string(),
                        full_name: "Ani Lestari".to_string(),
                    },
                },
                Enrollment {
                    student: Student {
                        id: 2,
                        nis: "2024002".to_string(),
                        full_name: "Bayu Pratama".to_string(),
                    },
                },
            ],
        },
        subject: Subject {
            id: Some(2),
            name: "Matematika".to_string(),
        },
        kkm: 75.0,
        assessments: vec![Assessment {
            id: 1,
            name: "UH 1".to_string(),
            teaching_assignment_id: Some(7),
            grades: vec![GradeRecord {
                student_id: 1,
                score: Some(80.0),
            }],
        }],
    }
}

//! The remote SIAKAD API as seen by the grade workflows.
//!
//! `GradeApi` is implemented by the browser HTTP client in the frontend and by
//! in-memory fakes in tests, so the editor and save flows never depend on a
//! particular transport.

use std::error::Error;
use std::fmt;

use crate::model::assignment::{AssessmentId, Assignment, AssignmentId, StudentId};
use crate::model::summary::{AssignmentSummary, StudentReport};
use crate::model::user::LoginResponse;
use crate::requests::{BulkGradeUpdate, CreateAssessmentRequest, LoginRequest};

/// Message shown when the server gives no usable error body.
pub const GENERIC_SERVER_ERROR: &str = "Server Error";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered 401; the session must be dropped.
    Unauthorized,
    /// The response arrived after the session it was sent under was cleared.
    SessionEnded,
    /// Any other non-success status, with the server's `message` if it sent one.
    Http { status: u16, message: String },
    /// The request never produced a response.
    Network(String),
    /// The response body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Builds an `Http` (or `Unauthorized`) error from a status and raw body.
    /// Bodies of the form `{"message": "..."}` keep their message.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::Http {
            status,
            message: server_message(body),
        }
    }

    /// Text suitable for a toast; `None` for errors the user should not see.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::SessionEnded => None,
            ApiError::Unauthorized => {
                Some("Sesi berakhir. Silakan login kembali.".to_string())
            }
            ApiError::Http { message, .. } => Some(message.clone()),
            ApiError::Network(_) => Some("Tidak dapat terhubung ke server.".to_string()),
            ApiError::Decode(_) => Some("Respons server tidak dikenali.".to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::SessionEnded => write!(f, "session ended before the response arrived"),
            ApiError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Decode(e) => write!(f, "invalid response body: {}", e),
        }
    }
}

impl Error for ApiError {}

/// The `message` of a `{"message": "..."}` error body, or the generic text.
pub fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

/// Endpoints of the remote API used by the client.
#[allow(async_fn_in_trait)]
pub trait GradeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn my_classes(&self) -> Result<Vec<Assignment>, ApiError>;

    async fn assignment(&self, id: AssignmentId) -> Result<Assignment, ApiError>;

    async fn create_assessment(&self, request: &CreateAssessmentRequest) -> Result<(), ApiError>;

    async fn delete_assessment(&self, id: AssessmentId) -> Result<(), ApiError>;

    async fn bulk_update_grades(&self, update: &BulkGradeUpdate) -> Result<(), ApiError>;

    async fn summary(&self, id: AssignmentId) -> Result<AssignmentSummary, ApiError>;

    async fn student_report(
        &self,
        assignment_id: AssignmentId,
        student_id: StudentId,
    ) -> Result<StudentReport, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_unauthorized_whatever_the_body() {
        assert_eq!(
            ApiError::from_status(401, r#"{"message":"jwt expired"}"#),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn server_message_is_kept() {
        assert_eq!(
            ApiError::from_status(400, r#"{"message":"Username atau password salah"}"#),
            ApiError::Http {
                status: 400,
                message: "Username atau password salah".to_string(),
            }
        );
    }

    #[test]
    fn unusable_body_falls_back_to_generic_message() {
        for body in ["<html>oops</html>", "", r#"{"message":""}"#, r#"{"error":1}"#] {
            assert_eq!(
                ApiError::from_status(500, body),
                ApiError::Http {
                    status: 500,
                    message: GENERIC_SERVER_ERROR.to_string(),
                }
            );
        }
    }

    #[test]
    fn stale_responses_stay_silent() {
        assert_eq!(ApiError::SessionEnded.user_message(), None);
        assert!(ApiError::Unauthorized.user_message().is_some());
    }
}

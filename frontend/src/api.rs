//! HTTP client adapter for the remote SIAKAD API.
//!
//! Every request carries the bearer token of the current session. A 401
//! clears the session and notifies the app, which switches to the login page.
//! Responses that land after the session was cleared are reported as
//! `ApiError::SessionEnded` so no page applies data from a previous login.

use std::rc::Rc;

use common::api::{server_message, ApiError, GradeApi};
use common::model::assignment::{AssessmentId, Assignment, AssignmentId, StudentId};
use common::model::summary::{AssignmentSummary, StudentReport};
use common::model::user::LoginResponse;
use common::requests::{BulkGradeUpdate, CreateAssessmentRequest, LoginRequest};
use common::session::SessionStore;
use gloo_console::{error, log};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use yew::Callback;

use crate::session::BrowserStorage;

pub type SharedSession = Rc<SessionStore<BrowserStorage>>;

#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    session: SharedSession,
    on_unauthorized: Callback<()>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && Rc::ptr_eq(&self.session, &other.session)
            && self.on_unauthorized == other.on_unauthorized
    }
}

impl ApiClient {
    pub fn new(base_url: &str, session: SharedSession, on_unauthorized: Callback<()>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').into(),
            session,
            on_unauthorized,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Sends a request and returns the response only when its status is a
    /// success.
    async fn execute(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        let generation = self.session.generation();
        let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
        let result = request.send().await;

        if !self.session.is_current(generation) {
            return Err(ApiError::SessionEnded);
        }
        let response = result.map_err(|e| {
            error!("Request failed:", e.to_string());
            ApiError::Network(e.to_string())
        })?;
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        if err == ApiError::Unauthorized {
            log!("Session rejected by the server, logging out");
            self.session.clear();
            self.on_unauthorized.emit(());
        }
        Err(err)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .execute(self.authorized(Request::get(&self.url(path))).build())
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl GradeApi for ApiClient {
    /// Wrong credentials come back as 401 too; on the login form that is a
    /// message to show, not a session to drop.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&self.url("/auth/login"))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status,
                message: server_message(&body),
            });
        }
        decode(response).await
    }

    async fn my_classes(&self) -> Result<Vec<Assignment>, ApiError> {
        self.get("/teacher/my-classes").await
    }

    async fn assignment(&self, id: AssignmentId) -> Result<Assignment, ApiError> {
        self.get(&format!("/teacher/assignments/{}", id)).await
    }

    async fn create_assessment(&self, request: &CreateAssessmentRequest) -> Result<(), ApiError> {
        let builder = self.authorized(Request::post(&self.url("/teacher/assessments")));
        self.execute(builder.json(request)).await.map(|_| ())
    }

    async fn delete_assessment(&self, id: AssessmentId) -> Result<(), ApiError> {
        let path = format!("/teacher/assessments/{}", id);
        let builder = self.authorized(Request::delete(&self.url(&path)));
        self.execute(builder.build()).await.map(|_| ())
    }

    async fn bulk_update_grades(&self, update: &BulkGradeUpdate) -> Result<(), ApiError> {
        let builder = self.authorized(Request::put(&self.url("/teacher/grades/bulk-update")));
        self.execute(builder.json(update)).await.map(|_| ())
    }

    async fn summary(&self, id: AssignmentId) -> Result<AssignmentSummary, ApiError> {
        self.get(&format!("/teacher/assignments/{}/summary", id)).await
    }

    async fn student_report(
        &self,
        assignment_id: AssignmentId,
        student_id: StudentId,
    ) -> Result<StudentReport, ApiError> {
        self.get(&format!(
            "/teacher/assignments/{}/students/{}/report",
            assignment_id, student_id
        ))
        .await
    }
}

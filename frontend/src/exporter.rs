//! PDF export: report data goes to the local backend, which answers with the
//! finished document; the browser then saves it under the report's file name.

use common::api::GradeApi;
use common::model::assignment::{AssignmentId, StudentId};
use common::model::summary::AssignmentSummary;
use common::report::{class_summary_file_name, student_report_file_name, ExportError};
use gloo_console::error;
use gloo_file::{Blob, ObjectUrl};
use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::api::ApiClient;

const CLASS_SUMMARY_ENDPOINT: &str = "/api/reports/class-summary";
const STUDENT_REPORT_ENDPOINT: &str = "/api/reports/student";

/// Revoking the object URL right after `click()` can cancel the download in
/// some browsers.
const REVOKE_DELAY_MILLIS: u32 = 10_000;

/// Renders the class summary already shown on the page. Returns the file
/// name the document was saved under.
pub async fn export_class_summary(summary: &AssignmentSummary) -> Result<String, ExportError> {
    let file_name = class_summary_file_name(
        &summary.assignment.class.name,
        &summary.assignment.subject.name,
    );
    let bytes = render(CLASS_SUMMARY_ENDPOINT, summary).await?;
    save_file(&bytes, &file_name)?;
    Ok(file_name)
}

/// Fetches one student's report data and renders it.
pub async fn export_student_report(
    api: &ApiClient,
    assignment_id: AssignmentId,
    student_id: StudentId,
) -> Result<String, ExportError> {
    let report = api.student_report(assignment_id, student_id).await?;
    let file_name = student_report_file_name(&report.student.full_name, &report.subject_name);
    let bytes = render(STUDENT_REPORT_ENDPOINT, &report).await?;
    save_file(&bytes, &file_name)?;
    Ok(file_name)
}

async fn render<T: Serialize>(endpoint: &str, payload: &T) -> Result<Vec<u8>, ExportError> {
    let response = Request::post(endpoint)
        .json(payload)
        .map_err(|e| ExportError::Download(e.to_string()))?
        .send()
        .await
        .map_err(|e| ExportError::Unreachable(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        error!("PDF render failed:", status, message.clone());
        return Err(ExportError::Render { status, message });
    }
    response
        .binary()
        .await
        .map_err(|e| ExportError::Download(e.to_string()))
}

fn save_file(bytes: &[u8], file_name: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Download("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| ExportError::Download("cannot create link".to_string()))?
        .unchecked_into();

    let blob = Blob::new_with_options(bytes, Some("application/pdf"));
    let url = ObjectUrl::from(blob);
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(REVOKE_DELAY_MILLIS).await;
        drop(url);
    });
    Ok(())
}

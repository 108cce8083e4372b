//! # Report Service Module
//!
//! Renders the PDF exports of the grade pages. The browser fetches the report
//! data from the SIAKAD API and posts it here unchanged; the response is the
//! finished document, offered to the user as a download.
//!
//! ## Sub-modules:
//! - `class_summary`: average score and pass status per student of one class.
//! - `student_report`: competency report of a single student.
//! - `document`: genpdf setup shared by both documents.

mod class_summary;
mod document;
mod error;
mod student_report;

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::web::{post, scope};
use actix_web::{HttpResponse, Scope};
use log::{error, info, warn};
use tokio::task::JoinError;

use error::ReportError;

const API_PATH: &str = "/api/reports";

/// # Registered Routes:
///
/// *   **`POST /class-summary`**: body is an `AssignmentSummary`, answers with
///     `Rekap_Nilai_<class>_<subject>.pdf`.
/// *   **`POST /student`**: body is a `StudentReport`, answers with
///     `Rapor_<student>_<subject>.pdf`.
///
/// Both answer `422` when the data is out of range and `503` when the
/// document cannot be rendered, with a message naming the class or student.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/class-summary", post().to(class_summary::process))
        .route("/student", post().to(student_report::process))
}

/// Maps the outcome of a blocking render onto the HTTP response.
fn pdf_response(
    result: Result<Result<Vec<u8>, ReportError>, JoinError>,
    label: &str,
    file_name: &str,
) -> HttpResponse {
    match result {
        Ok(Ok(bytes)) => {
            info!("Generated {} ({} bytes) for {}", file_name, bytes.len(), label);
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(file_name.to_string())],
                })
                .body(bytes)
        }
        Ok(Err(e)) if e.is_client_error() => {
            warn!("Rejected report data: {}", e);
            HttpResponse::UnprocessableEntity().body(format!("Gagal membuat PDF: {}", e))
        }
        Ok(Err(e)) => {
            error!("PDF generation failed for {}: {}", label, e);
            HttpResponse::ServiceUnavailable()
                .body(format!("Gagal membuat PDF untuk {}: {}", label, e))
        }
        Err(e) => {
            error!("PDF render task for {} did not finish: {}", label, e);
            HttpResponse::InternalServerError()
                .body(format!("Gagal membuat PDF untuk {}", label))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::assignment::{ClassInfo, Student, Subject};
    use common::model::summary::{
        AssignmentHeader, AssignmentSummary, StudentReport, StudentSummary, SubjectResult,
    };
    use std::path::PathBuf;

    fn config_without_fonts() -> AppConfig {
        AppConfig {
            fonts_dir: PathBuf::from("/nonexistent/siakad-fonts"),
            open_browser: false,
            ..AppConfig::default()
        }
    }

    fn summary(average: Option<f64>) -> AssignmentSummary {
        AssignmentSummary {
            assignment: AssignmentHeader {
                id: Some(3),
                class: ClassInfo {
                    id: Some(1),
                    name: "IV-A".to_string(),
                    level: None,
                    students: Vec::new(),
                },
                subject: Subject {
                    id: Some(2),
                    name: "Matematika".to_string(),
                },
                kkm: 75.0,
            },
            student_summaries: vec![StudentSummary {
                student_id: 10,
                nis: "220010".to_string(),
                full_name: "Sari Dewi".to_string(),
                average_score: average,
            }],
        }
    }

    fn report() -> StudentReport {
        StudentReport {
            student: Student {
                id: 10,
                nis: "220010".to_string(),
                full_name: "Sari Dewi".to_string(),
            },
            class_name: "IV-A".to_string(),
            subject_name: "Matematika".to_string(),
            results: vec![SubjectResult {
                subject_name: "Matematika".to_string(),
                kkm: 75.0,
                final_score: Some(88.0),
            }],
        }
    }

    #[actix_web::test]
    async fn out_of_range_summary_is_rejected_with_the_class_name() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_without_fonts()))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/reports/class-summary")
            .set_json(summary(Some(120.0)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("kelas IV-A - Matematika"));
    }

    #[actix_web::test]
    async fn missing_fonts_fail_the_summary_with_service_unavailable() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_without_fonts()))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/reports/class-summary")
            .set_json(summary(None))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("kelas IV-A - Matematika"));
    }

    #[actix_web::test]
    async fn missing_fonts_fail_the_student_report_naming_the_student() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_without_fonts()))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/reports/student")
            .set_json(report())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("siswa Sari Dewi (220010)"));
    }

    #[actix_web::test]
    async fn join_failure_maps_to_internal_error() {
        let handle = tokio::task::spawn_blocking(|| -> Result<Vec<u8>, ReportError> {
            panic!("render thread died")
        });
        let resp = pdf_response(handle.await, "kelas IV-A - Matematika", "x.pdf");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn successful_render_is_an_attachment() {
        let resp = pdf_response(
            Ok(Ok(b"%PDF-1.4".to_vec())),
            "siswa Sari Dewi (220010)",
            "Rapor_Sari_Dewi_Matematika.pdf",
        );
        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp
            .headers()
            .get(actix_web::http::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("Rapor_Sari_Dewi_Matematika.pdf"));
    }
}

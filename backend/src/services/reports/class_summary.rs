//! `POST /api/reports/class-summary`: one table row per student with the
//! average score and pass status against the assignment's KKM.

use super::document::{cell, configure_document, push_title, render_to_bytes, table_with_header};
use super::error::ReportError;
use super::pdf_response;
use crate::config::AppConfig;
use actix_web::{web, Responder};
use common::model::summary::AssignmentSummary;
use common::report::{
    class_summary_file_name, summary_header_lines, summary_label, summary_rows, validate_summary,
    SUMMARY_COLUMNS, SUMMARY_TITLE,
};
use genpdf::elements::{Break, Paragraph};
use std::path::Path;

const COLUMN_WEIGHTS: [usize; 5] = [1, 3, 6, 3, 3];

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    payload: web::Json<AssignmentSummary>,
) -> impl Responder {
    let summary = payload.into_inner();
    let label = summary_label(&summary);
    let file_name = class_summary_file_name(
        &summary.assignment.class.name,
        &summary.assignment.subject.name,
    );
    let fonts_dir = config.fonts_dir.clone();

    let result = tokio::task::spawn_blocking(move || {
        render_class_summary_document(&summary, &fonts_dir)
    })
    .await;

    pdf_response(result, &label, &file_name)
}

/// Renders the class summary. An empty class still yields a document whose
/// table only has the header row.
pub fn render_class_summary_document(
    summary: &AssignmentSummary,
    fonts_dir: &Path,
) -> Result<Vec<u8>, ReportError> {
    validate_summary(summary)?;

    let title = format!(
        "{} {} - {}",
        SUMMARY_TITLE, summary.assignment.class.name, summary.assignment.subject.name
    );
    let mut doc = configure_document(fonts_dir, &title)?;
    push_title(&mut doc, SUMMARY_TITLE);
    for line in summary_header_lines(summary) {
        doc.push(Paragraph::new(line));
    }
    doc.push(Break::new(1));

    let mut table = table_with_header(COLUMN_WEIGHTS.to_vec(), &SUMMARY_COLUMNS)?;
    for row in summary_rows(summary) {
        table
            .row()
            .element(cell(row.number.to_string()))
            .element(cell(row.nis))
            .element(cell(row.full_name))
            .element(cell(row.average))
            .element(cell(row.status.label().to_string()))
            .push()?;
    }
    doc.push(table);

    render_to_bytes(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::assignment::{ClassInfo, Subject};
    use common::model::summary::{AssignmentHeader, StudentSummary};
    use std::path::PathBuf;

    fn fonts_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join("fonts")
    }

    fn summary(student_summaries: Vec<StudentSummary>) -> AssignmentSummary {
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
            student_summaries,
        }
    }

    #[test]
    fn empty_class_renders_a_pdf() {
        let bytes = render_class_summary_document(&summary(Vec::new()), &fonts_dir()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn large_class_spills_over_several_pages() {
        let students = (1..=120)
            .map(|n| StudentSummary {
                student_id: n,
                nis: format!("22{:04}", n),
                full_name: format!("Siswa Nomor {}", n),
                average_score: if n % 7 == 0 { None } else { Some((n % 101) as f64) },
            })
            .collect();
        let bytes = render_class_summary_document(&summary(students), &fonts_dir()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn out_of_range_average_is_rejected_before_rendering() {
        let students = vec![StudentSummary {
            student_id: 1,
            nis: "220001".to_string(),
            full_name: "Sari Dewi".to_string(),
            average_score: Some(101.0),
        }];
        let result = render_class_summary_document(&summary(students), &fonts_dir());
        assert!(matches!(result, Err(ReportError::InvalidData(_))));
    }
}

//! `POST /api/reports/student`: a single student's narrative report, one row
//! per subject with the final score and a competency remark.

use super::document::{cell, configure_document, push_title, render_to_bytes, table_with_header};
use super::error::ReportError;
use super::pdf_response;
use crate::config::AppConfig;
use actix_web::{web, Responder};
use common::model::summary::StudentReport;
use common::report::{
    report_identity_lines, report_label, report_rows, student_report_file_name, validate_report,
    REPORT_COLUMNS, REPORT_TITLE,
};
use genpdf::elements::{Break, Paragraph};
use genpdf::style::{Style, StyledString};
use std::path::Path;

const COLUMN_WEIGHTS: [usize; 5] = [1, 4, 2, 2, 8];

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    payload: web::Json<StudentReport>,
) -> impl Responder {
    let report = payload.into_inner();
    let label = report_label(&report);
    let file_name = student_report_file_name(&report.student.full_name, &report.subject_name);
    let fonts_dir = config.fonts_dir.clone();

    let result =
        tokio::task::spawn_blocking(move || render_student_report_document(&report, &fonts_dir))
            .await;

    pdf_response(result, &label, &file_name)
}

pub fn render_student_report_document(
    report: &StudentReport,
    fonts_dir: &Path,
) -> Result<Vec<u8>, ReportError> {
    validate_report(report)?;

    let title = format!("{} {}", REPORT_TITLE, report.student.full_name);
    let mut doc = configure_document(fonts_dir, &title)?;
    push_title(&mut doc, REPORT_TITLE);

    for (label, value) in report_identity_lines(report) {
        let mut line = Paragraph::new(StyledString::new(
            format!("{:<8}: ", label),
            Style::new().bold(),
        ));
        line.push(value);
        doc.push(line);
    }
    doc.push(Break::new(1));

    let mut table = table_with_header(COLUMN_WEIGHTS.to_vec(), &REPORT_COLUMNS)?;
    for row in report_rows(report) {
        table
            .row()
            .element(cell(row.number.to_string()))
            .element(cell(row.subject))
            .element(cell(row.kkm))
            .element(cell(row.final_score))
            .element(cell(row.remark))
            .push()?;
    }
    doc.push(table);

    render_to_bytes(doc)
}

//! Report content shared by the summary grid and the PDF renderer.
//!
//! Everything here is layout-free: rows of already formatted text plus the
//! pass/fail and remark rules. The browser shows these rows directly and the
//! backend lays the same rows out into a PDF table.

use std::error::Error;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::grades::score::{MAX_SCORE, MIN_SCORE};
use crate::model::summary::{AssignmentSummary, StudentReport};

mod export;

pub use export::ExportError;

pub const NOT_AVAILABLE: &str = "N/A";

pub const SUMMARY_TITLE: &str = "Rekapitulasi Nilai";
pub const SUMMARY_COLUMNS: [&str; 5] = ["No", "NIS", "Nama Siswa", "Nilai Rata-rata", "Status"];

pub const REPORT_TITLE: &str = "Laporan Hasil Belajar";
pub const REPORT_COLUMNS: [&str; 5] = ["No", "Mata Pelajaran", "KKM", "Nilai Akhir", "Capaian Kompetensi"];

/// Scores strictly above this earn the strongest remark.
pub const EXCELLENT_THRESHOLD: f64 = 85.0;

static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9-]+").expect("static pattern"));

/// Average or final score with two decimals, `N/A` when missing.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{:.2}", value),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_kkm(kkm: f64) -> String {
    if kkm.fract() == 0.0 {
        format!("{:.0}", kkm)
    } else {
        format!("{:.2}", kkm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassStatus {
    Passed,
    NotPassed,
}

impl PassStatus {
    /// The KKM is inclusive; a missing average never passes.
    pub fn of(average: Option<f64>, kkm: f64) -> Self {
        match average {
            Some(value) if value >= kkm => PassStatus::Passed,
            _ => PassStatus::NotPassed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PassStatus::Passed => "Tuntas",
            PassStatus::NotPassed => "Belum Tuntas",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub number: usize,
    pub student_id: u64,
    pub nis: String,
    pub full_name: String,
    pub average: String,
    pub status: PassStatus,
}

/// Rows of the class summary, one per student, in the order received.
pub fn summary_rows(summary: &AssignmentSummary) -> Vec<SummaryRow> {
    let kkm = summary.assignment.kkm;
    summary
        .student_summaries
        .iter()
        .enumerate()
        .map(|(index, entry)| SummaryRow {
            number: index + 1,
            student_id: entry.student_id,
            nis: entry.nis.clone(),
            full_name: entry.full_name.clone(),
            average: format_score(entry.average_score),
            status: PassStatus::of(entry.average_score, kkm),
        })
        .collect()
}

/// Lines printed above the summary table.
pub fn summary_header_lines(summary: &AssignmentSummary) -> Vec<String> {
    vec![
        format!("Kelas: {}", summary.assignment.class.name),
        format!("Mata Pelajaran: {}", summary.assignment.subject.name),
        format!("KKM: {}", format_kkm(summary.assignment.kkm)),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetencyTier {
    Excellent,
    Adequate,
    NeedsImprovement,
    Ungraded,
}

impl CompetencyTier {
    pub fn of(score: Option<f64>, kkm: f64) -> Self {
        match score {
            None => CompetencyTier::Ungraded,
            Some(value) if value > EXCELLENT_THRESHOLD => CompetencyTier::Excellent,
            Some(value) if value >= kkm => CompetencyTier::Adequate,
            Some(_) => CompetencyTier::NeedsImprovement,
        }
    }

    pub fn remark(self, subject: &str) -> String {
        match self {
            CompetencyTier::Excellent => format!(
                "Menunjukkan penguasaan yang sangat baik pada seluruh kompetensi {}.",
                subject
            ),
            CompetencyTier::Adequate => format!(
                "Sudah menguasai kompetensi {} dengan baik, perlu terus dipertahankan.",
                subject
            ),
            CompetencyTier::NeedsImprovement => format!(
                "Perlu bimbingan dan latihan lebih lanjut pada kompetensi {}.",
                subject
            ),
            CompetencyTier::Ungraded => format!("Belum ada nilai untuk {}.", subject),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub number: usize,
    pub subject: String,
    pub kkm: String,
    pub final_score: String,
    pub remark: String,
}

pub fn report_rows(report: &StudentReport) -> Vec<ReportRow> {
    report
        .results
        .iter()
        .enumerate()
        .map(|(index, result)| ReportRow {
            number: index + 1,
            subject: result.subject_name.clone(),
            kkm: format_kkm(result.kkm),
            final_score: format_score(result.final_score),
            remark: CompetencyTier::of(result.final_score, result.kkm).remark(&result.subject_name),
        })
        .collect()
}

/// Identity block printed at the top of a student report.
pub fn report_identity_lines(report: &StudentReport) -> Vec<(&'static str, String)> {
    vec![
        ("Nama", report.student.full_name.clone()),
        ("NIS", report.student.nis.clone()),
        ("Kelas", report.class_name.clone()),
    ]
}

pub fn class_summary_file_name(class_name: &str, subject_name: &str) -> String {
    format!(
        "Rekap_Nilai_{}_{}.pdf",
        file_name_part(class_name),
        file_name_part(subject_name)
    )
}

pub fn student_report_file_name(student_name: &str, subject_name: &str) -> String {
    format!(
        "Rapor_{}_{}.pdf",
        file_name_part(student_name),
        file_name_part(subject_name)
    )
}

fn file_name_part(raw: &str) -> String {
    let cleaned = UNSAFE_FILE_CHARS.replace_all(raw.trim(), "_");
    let cleaned = cleaned.trim_matches('_');
    if cleaned.is_empty() {
        "tanpa_nama".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Report data that cannot be rendered, with the class or student it
/// belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidReportData {
    pub subject: String,
    pub detail: String,
}

impl fmt::Display for InvalidReportData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.detail)
    }
}

impl Error for InvalidReportData {}

fn check_range(value: f64, what: impl FnOnce() -> String) -> Result<(), String> {
    if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} di luar rentang 0-100 ({})", what(), value))
    }
}

pub fn summary_label(summary: &AssignmentSummary) -> String {
    format!(
        "kelas {} - {}",
        summary.assignment.class.name, summary.assignment.subject.name
    )
}

pub fn report_label(report: &StudentReport) -> String {
    report_label_for(&report.student.full_name, &report.student.nis)
}

/// How a student is named in export messages.
pub fn report_label_for(full_name: &str, nis: &str) -> String {
    format!("siswa {} ({})", full_name, nis)
}

pub fn validate_summary(summary: &AssignmentSummary) -> Result<(), InvalidReportData> {
    let invalid = |detail: String| InvalidReportData {
        subject: summary_label(summary),
        detail,
    };
    check_range(summary.assignment.kkm, || "KKM".to_string()).map_err(invalid)?;
    for entry in &summary.student_summaries {
        if let Some(average) = entry.average_score {
            check_range(average, || format!("Nilai rata-rata {}", entry.full_name))
                .map_err(invalid)?;
        }
    }
    Ok(())
}

pub fn validate_report(report: &StudentReport) -> Result<(), InvalidReportData> {
    let invalid = |detail: String| InvalidReportData {
        subject: report_label(report),
        detail,
    };
    for result in &report.results {
        check_range(result.kkm, || format!("KKM {}", result.subject_name)).map_err(invalid)?;
        if let Some(score) = result.final_score {
            check_range(score, || format!("Nilai akhir {}", result.subject_name))
                .map_err(invalid)?;
        }
    }
    Ok(())
}

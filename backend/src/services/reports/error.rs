use common::report::InvalidReportData;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Why a report could not be produced. genpdf errors are flattened to text
/// so the value can cross back from the blocking render thread.
#[derive(Debug)]
pub enum ReportError {
    /// The posted data cannot be rendered; the client has to fix it.
    InvalidData(InvalidReportData),
    /// No usable font family in the configured directory.
    Font { dir: PathBuf, message: String },
    /// genpdf failed while laying out or writing the document.
    Render(String),
}

impl ReportError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, ReportError::InvalidData(_))
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::InvalidData(e) => write!(f, "data tidak valid untuk {}", e),
            ReportError::Font { dir, message } => {
                write!(f, "font tidak ditemukan di {}: {}", dir.display(), message)
            }
            ReportError::Render(message) => write!(f, "gagal menyusun dokumen: {}", message),
        }
    }
}

impl Error for ReportError {}

impl From<InvalidReportData> for ReportError {
    fn from(e: InvalidReportData) -> Self {
        ReportError::InvalidData(e)
    }
}

impl From<genpdf::error::Error> for ReportError {
    fn from(e: genpdf::error::Error) -> Self {
        ReportError::Render(e.to_string())
    }
}

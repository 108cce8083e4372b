use std::error::Error;
use std::fmt;

use crate::api::ApiError;

/// Longest slice of a plain-text backend body shown to the user.
const MAX_DETAIL_CHARS: usize = 200;

/// Failure of one PDF export, from fetching the data to saving the file.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The report data could not be fetched.
    Api(ApiError),
    /// The local PDF backend did not answer at all.
    Unreachable(String),
    /// The backend answered with a non-success status.
    Render { status: u16, message: String },
    /// The document arrived but could not be handed to the browser.
    Download(String),
}

impl ExportError {
    /// Toast text for the export of `subject` (a class or a student label).
    /// Every message names the subject; `None` only when the session ended
    /// and the login page takes over.
    pub fn user_message(&self, subject: &str) -> Option<String> {
        match self {
            ExportError::Api(e) => e
                .user_message()
                .map(|m| format!("Gagal memuat data {}: {}", subject, m)),
            ExportError::Unreachable(_) => Some(format!(
                "Gagal membuat PDF untuk {}: server PDF tidak dapat dihubungi.",
                subject
            )),
            ExportError::Render { status, message } => Some(match render_detail(message) {
                Some(detail) if detail.contains(subject) => detail,
                Some(detail) => format!(
                    "Gagal membuat PDF untuk {} (HTTP {}): {}",
                    subject, status, detail
                ),
                None => format!("Gagal membuat PDF untuk {} (HTTP {})", subject, status),
            }),
            ExportError::Download(e) => {
                Some(format!("Gagal mengunduh PDF untuk {}: {}", subject, e))
            }
        }
    }
}

/// First line of a plain-text body. Markup (a proxy or dev-server error
/// page) and blank bodies carry nothing worth showing.
fn render_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        return None;
    }
    let line = trimmed.lines().next().unwrap_or_default().trim();
    Some(line.chars().take(MAX_DETAIL_CHARS).collect())
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Api(e) => write!(f, "{}", e),
            ExportError::Unreachable(e) => write!(f, "PDF backend unreachable: {}", e),
            ExportError::Render { status, message } => write!(f, "HTTP {}: {}", status, message),
            ExportError::Download(e) => write!(f, "download failed: {}", e),
        }
    }
}

impl Error for ExportError {}

impl From<ApiError> for ExportError {
    fn from(e: ApiError) -> Self {
        ExportError::Api(e)
    }
}

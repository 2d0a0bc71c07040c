use askama::Template;

use crate::{
    application::session::{UploadSession, UploadStatus},
    domain::models::optimization::{OptimizationResult, SavingsMarker},
};

#[derive(Debug, Clone, PartialEq)]
pub struct StagedRow {
    pub filename: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub file: String,
    pub original_size: String,
    pub optimized_size: String,
    pub original_bytes: String,
    pub optimized_bytes: String,
    pub bytes_saved: String,
    pub marker_class: &'static str,
    pub marker_symbol: &'static str,
}

impl From<&OptimizationResult> for ResultRow {
    fn from(result: &OptimizationResult) -> Self {
        let marker = result.marker();
        Self {
            file: result.file.clone(),
            original_size: result.original_size.clone(),
            optimized_size: result.optimized_size.clone(),
            original_bytes: group_digits(result.original_bytes),
            optimized_bytes: group_digits(result.optimized_bytes),
            bytes_saved: group_digits(result.bytes_saved),
            marker_class: match marker {
                SavingsMarker::Success => "success",
                SavingsMarker::Warning => "warning",
            },
            marker_symbol: marker.symbol(),
        }
    }
}

/// Everything the upload page shows, derived from one session snapshot.
#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadView {
    pub staged: Vec<StagedRow>,
    pub staged_total: String,
    pub results: Vec<ResultRow>,
    pub pending: bool,
    pub failure: Option<String>,
    pub completed_at: Option<String>,
}

impl UploadView {
    pub fn from_session(session: &UploadSession) -> Self {
        let staged = session
            .staged()
            .files()
            .iter()
            .map(|file| StagedRow {
                filename: file.filename.clone(),
                size: group_digits(file.size() as i64),
            })
            .collect();

        let failure = match session.status() {
            UploadStatus::Failed(error) => Some(error.to_string()),
            UploadStatus::Idle | UploadStatus::Pending => None,
        };

        Self {
            staged,
            staged_total: group_digits(session.staged().total_bytes() as i64),
            results: session.results().rows().iter().map(ResultRow::from).collect(),
            pending: session.is_pending(),
            failure,
            completed_at: session
                .completed_at()
                .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        }
    }

    pub fn render_session(session: &UploadSession) -> Result<String, askama::Error> {
        Self::from_session(session).render()
    }
}

/// en-US style thousands grouping: `1234567` -> `1,234,567`.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

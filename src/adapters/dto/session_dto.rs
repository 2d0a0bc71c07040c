use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    application::session::{UploadSession, UploadStatus},
    domain::models::{file::StagedFileSummary, optimization::ResultSet},
};

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub staged: Vec<StagedFileSummary>,
    #[serde(rename = "stagedBytes")]
    pub staged_bytes: u64,
    pub results: ResultSet,
    pub status: UploadStatus,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<&UploadSession> for SessionResponse {
    fn from(session: &UploadSession) -> Self {
        Self {
            staged: session.staged().summaries(),
            staged_bytes: session.staged().total_bytes(),
            results: session.results().clone(),
            status: session.status().clone(),
            completed_at: session.completed_at(),
        }
    }
}

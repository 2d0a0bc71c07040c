use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::adapters::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(rename = "optimizerUrl")]
    pub optimizer_url: String,
    #[serde(rename = "stagedFiles")]
    pub staged_files: usize,
    #[serde(rename = "submissionPending")]
    pub submission_pending: bool,
}

pub struct HealthController;

impl HealthController {
    /// GET /health
    pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
        info!("Health check requested");

        let (staged_files, submission_pending) = {
            let session = app_state.session.lock().await;
            (session.staged().len(), session.is_pending())
        };

        Json(HealthResponse {
            status: "healthy".to_string(),
            optimizer_url: app_state.optimizer_url.clone(),
            staged_files,
            submission_pending,
        })
    }
}

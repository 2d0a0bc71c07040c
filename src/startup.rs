use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    adapters::{
        controllers::{health_controller::HealthController, upload_controller::UploadController},
        state::AppState,
    },
    application::upload_client::BatchUploadClient,
    domain::config::settings::Settings,
    services::HttpOptimizerService,
};

pub fn build_state(settings: &Settings) -> AppState {
    let optimizer = Arc::new(HttpOptimizerService::new(&settings.optimizer_url));
    let upload_client = Arc::new(BatchUploadClient::new(optimizer));
    AppState::new(settings.optimizer_url.clone(), upload_client)
}

pub fn build_router(app_state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(UploadController::index))
        .route("/files", post(UploadController::select_files))
        .route("/files/drop", post(UploadController::drop_files))
        .route("/submit", post(UploadController::submit))
        .route("/api/session", get(UploadController::session))
        .route("/health", get(HealthController::health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

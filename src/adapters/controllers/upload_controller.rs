use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};
use tracing::{error, info, warn, Instrument};

use crate::{
    adapters::{
        dto::{session_dto::SessionResponse, staged_file_dto::read_staged_files},
        state::AppState,
        view::UploadView,
    },
    application::{
        error::{ApplicationError, UploadError},
        staging::DropEvent,
    },
};

pub struct UploadController;

impl UploadController {
    /// GET /
    pub async fn index(
        State(app_state): State<AppState>,
    ) -> Result<Html<String>, ApplicationError> {
        let session = app_state.session.lock().await;
        let html = UploadView::render_session(&session)
            .map_err(|e| ApplicationError::InternalError(format!("Render failed: {}", e)))?;
        Ok(Html(html))
    }

    /// POST /files
    /// Native picker selection; replaces whatever was staged.
    pub async fn select_files(
        State(app_state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Redirect, ApplicationError> {
        let files = read_staged_files(&mut multipart).await?;

        let mut session = app_state.session.lock().await;
        let staged = session.select_files(files);
        info!(files = staged.len(), "Files selected from picker");

        Ok(Redirect::to("/"))
    }

    /// POST /files/drop
    /// Files dropped on the drop target; the page script has already
    /// suppressed the browser's own handling of the drag.
    pub async fn drop_files(
        State(app_state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<StatusCode, ApplicationError> {
        let files = read_staged_files(&mut multipart).await?;
        let mut event = DropEvent::drop(files);

        let mut session = app_state.session.lock().await;
        let staged = session.accept_drop(&mut event);
        info!(files = staged.len(), "Files dropped");

        Ok(StatusCode::NO_CONTENT)
    }

    /// POST /submit
    /// Sends the staged batch. The upload runs in its own task and records
    /// its outcome there, so a client that goes away mid-request cannot leave
    /// the session stuck as pending. The session lock is released while the
    /// optimizer works so the page stays usable.
    pub async fn submit(State(app_state): State<AppState>) -> Result<Redirect, ApplicationError> {
        let batch = {
            let mut session = app_state.session.lock().await;
            session.begin_submit()?
        };

        let Some(batch) = batch else {
            info!("Nothing staged, submit ignored");
            return Ok(Redirect::to("/"));
        };

        let state = app_state.clone();
        let upload = tokio::spawn(
            async move {
                let outcome = state.upload_client.submit(&batch).await;
                if let Err(ref e) = outcome {
                    warn!(error = %e, "Upload failed");
                }
                state.session.lock().await.finish_submit(outcome);
            }
            .in_current_span(),
        );

        if let Err(e) = upload.await {
            error!(error = %e, "Upload task did not complete");
            app_state
                .session
                .lock()
                .await
                .finish_submit(Err(UploadError::NetworkFailure(
                    "upload was interrupted".to_string(),
                )));
            return Err(ApplicationError::InternalError(format!(
                "Upload task failed: {}",
                e
            )));
        }

        Ok(Redirect::to("/"))
    }

    /// GET /api/session
    pub async fn session(State(app_state): State<AppState>) -> Json<SessionResponse> {
        let session = app_state.session.lock().await;
        Json(SessionResponse::from(&*session))
    }
}

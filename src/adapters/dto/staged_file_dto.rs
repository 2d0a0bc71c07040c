use axum::extract::Multipart;
use tracing::{debug, warn};

use crate::{
    application::error::ApplicationError,
    domain::models::file::{StagedFile, FILES_FIELD},
};

/// Reads every `files` part of a picker or drop submission, in order.
///
/// A picker submitted with nothing chosen sends one part with an empty
/// filename and no bytes; that part is skipped.
pub async fn read_staged_files(
    multipart: &mut Multipart,
) -> Result<Vec<StagedFile>, ApplicationError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Invalid multipart data: {}", e);
        ApplicationError::BadRequest("Invalid request format".to_string())
    })? {
        if field.name() != Some(FILES_FIELD) {
            debug!(field = ?field.name(), "Ignoring unexpected multipart field");
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let mime_type = field.content_type().map(str::to_string);

        let content = field.bytes().await.map_err(|e| {
            warn!("Cannot read file bytes: {}", e);
            ApplicationError::BadRequest("Invalid file data".to_string())
        })?;

        if filename.is_empty() && content.is_empty() {
            continue;
        }

        let mut file = StagedFile::new(filename, content);
        if let Some(mime_type) = mime_type {
            file = file.with_mime_type(mime_type);
        }
        files.push(file);
    }

    Ok(files)
}

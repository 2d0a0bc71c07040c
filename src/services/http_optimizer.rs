use async_trait::async_trait;
use reqwest::{multipart, Client};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    application::{error::UploadError, services::OptimizerService},
    domain::models::file::{StagedFile, StagedSet, FILES_FIELD},
    services::error::TransportError,
};

const UPLOAD_PATH: &str = "/api/upload";

/// Posts a batch to the optimizer's upload endpoint as one multipart request.
pub struct HttpOptimizerService {
    client: Client,
    upload_url: String,
}

impl HttpOptimizerService {
    pub fn new(optimizer_url: &str) -> Self {
        Self::with_client(Client::new(), optimizer_url)
    }

    pub fn with_client(client: Client, optimizer_url: &str) -> Self {
        Self {
            client,
            upload_url: format!("{}{}", optimizer_url.trim_end_matches('/'), UPLOAD_PATH),
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    fn build_form(batch: &StagedSet) -> multipart::Form {
        batch
            .files()
            .iter()
            .fold(multipart::Form::new(), |form, file| {
                form.part(FILES_FIELD, Self::file_part(file))
            })
    }

    /// A content type the browser sent but reqwest cannot parse is dropped,
    /// and the part goes out untyped.
    fn file_part(file: &StagedFile) -> multipart::Part {
        let untyped = || {
            multipart::Part::stream_with_length(file.content.clone(), file.size())
                .file_name(file.filename.clone())
        };

        match &file.mime_type {
            Some(mime_type) => untyped().mime_str(mime_type).unwrap_or_else(|e| {
                warn!(
                    file = %file.filename,
                    mime_type = %mime_type,
                    error = %e,
                    "Ignoring unparseable content type"
                );
                untyped()
            }),
            None => untyped(),
        }
    }

    async fn send(&self, batch: &StagedSet) -> Result<Value, TransportError> {
        let form = Self::build_form(batch);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Optimizer response received");

        serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl OptimizerService for HttpOptimizerService {
    async fn optimize(&self, batch: &StagedSet) -> Result<Value, UploadError> {
        Ok(self.send(batch).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_url_targets_fixed_path() {
        let service = HttpOptimizerService::new("http://localhost:8080/");
        assert_eq!(service.upload_url(), "http://localhost:8080/api/upload");
    }
}

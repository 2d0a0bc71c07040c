use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::{session::UploadSession, upload_client::BatchUploadClient};

#[derive(Clone)]
pub struct AppState {
    pub optimizer_url: String,
    pub session: Arc<Mutex<UploadSession>>,
    pub upload_client: Arc<BatchUploadClient>,
}

impl AppState {
    pub fn new(optimizer_url: impl Into<String>, upload_client: Arc<BatchUploadClient>) -> Self {
        Self {
            optimizer_url: optimizer_url.into(),
            session: Arc::new(Mutex::new(UploadSession::new())),
            upload_client,
        }
    }
}

use async_trait::async_trait;
use serde_json::Value;

use crate::{application::error::UploadError, domain::models::file::StagedSet};

/// Transport to the remote optimizer. Returns the undecoded JSON payload.
#[async_trait]
pub trait OptimizerService: Send + Sync {
    async fn optimize(&self, batch: &StagedSet) -> Result<Value, UploadError>;
}

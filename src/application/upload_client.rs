use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    application::{
        error::UploadError, reconciler::ResultReconciler, services::OptimizerService,
    },
    domain::models::{file::StagedSet, optimization::ResultSet},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Nothing was staged, so no request went out.
    EmptySelection,
    Completed(ResultSet),
}

/// Sends a staged set as one batch and reconciles the reply.
///
/// Failures are returned as-is; retrying is left to the caller.
pub struct BatchUploadClient {
    optimizer: Arc<dyn OptimizerService>,
}

impl BatchUploadClient {
    pub fn new(optimizer: Arc<dyn OptimizerService>) -> Self {
        Self { optimizer }
    }

    pub async fn submit(&self, staged: &StagedSet) -> Result<Submission, UploadError> {
        if staged.is_empty() {
            info!("Submit requested with nothing staged, skipping request");
            return Ok(Submission::EmptySelection);
        }

        let batch_id = Uuid::new_v4();
        let span = info_span!("batch_upload", %batch_id, files = staged.len());

        self.send_batch(staged).instrument(span).await
    }

    async fn send_batch(&self, staged: &StagedSet) -> Result<Submission, UploadError> {
        info!(bytes = staged.total_bytes(), "Submitting batch");

        let raw = self.optimizer.optimize(staged).await.inspect_err(|e| {
            warn!(error = %e, "Batch submission failed");
        })?;

        let reconciliation = ResultReconciler::normalize(&raw);
        if reconciliation.malformed {
            return Err(UploadError::MalformedResponse(
                "expected a JSON array of result rows".to_string(),
            ));
        }

        if reconciliation.results.len() != staged.len() {
            info!(
                rows = reconciliation.results.len(),
                "Result row count differs from staged file count"
            );
        }

        info!(rows = reconciliation.results.len(), "Batch reconciled");
        Ok(Submission::Completed(reconciliation.results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::file::StagedFile;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeOptimizer {
        reply: Result<Value, UploadError>,
        calls: AtomicUsize,
    }

    impl FakeOptimizer {
        fn replying(reply: Result<Value, UploadError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl OptimizerService for FakeOptimizer {
        async fn optimize(&self, _batch: &StagedSet) -> Result<Value, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn two_files() -> StagedSet {
        vec![
            StagedFile::new("a.png", vec![0u8; 1000]),
            StagedFile::new("b.png", vec![0u8; 2000]),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn empty_selection_never_reaches_the_optimizer() {
        let fake = FakeOptimizer::replying(Ok(json!([])));
        let client = BatchUploadClient::new(fake.clone());

        let outcome = client.submit(&StagedSet::empty()).await.unwrap();

        assert_eq!(outcome, Submission::EmptySelection);
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn reconciled_rows_are_returned() {
        let fake = FakeOptimizer::replying(Ok(json!([
            {"file": "a.png", "original_bytes": 1000, "optimized_bytes": 400, "bytes_saved": 600},
            {"file": "b.png", "original_bytes": 2000, "optimized_bytes": 2000, "bytes_saved": 0},
        ])));
        let client = BatchUploadClient::new(fake.clone());

        let Submission::Completed(results) = client.submit(&two_files()).await.unwrap() else {
            panic!("expected completed submission");
        };

        assert_eq!(results.len(), 2);
        assert_eq!(results.rows()[0].bytes_saved, 600);
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_array_payload_is_a_malformed_response() {
        let client = BatchUploadClient::new(FakeOptimizer::replying(Ok(json!({"ok": true}))));

        let err = client.submit(&two_files()).await.unwrap_err();
        assert!(matches!(err, UploadError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn transport_errors_pass_through_untouched() {
        let client = BatchUploadClient::new(FakeOptimizer::replying(Err(
            UploadError::ServerError { status: 500 },
        )));

        let err = client.submit(&two_files()).await.unwrap_err();
        assert_eq!(err, UploadError::ServerError { status: 500 });
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    application::{
        error::UploadError,
        staging::{DropEvent, FileStagingArea},
        upload_client::Submission,
    },
    domain::models::{
        file::{StagedFile, StagedSet},
        optimization::ResultSet,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "lowercase")]
pub enum UploadStatus {
    Idle,
    Pending,
    Failed(UploadError),
}

/// Staged files and latest results for one browsing session.
///
/// All mutation goes through the staging area or `finish_submit`, and at most
/// one submission may be pending at a time. Staged files are kept after a
/// successful submission so the same batch can be sent again.
#[derive(Debug)]
pub struct UploadSession {
    staging: FileStagingArea,
    results: ResultSet,
    status: UploadStatus,
    completed_at: Option<DateTime<Utc>>,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            staging: FileStagingArea::new(),
            results: ResultSet::empty(),
            status: UploadStatus::Idle,
            completed_at: None,
        }
    }

    pub fn staged(&self) -> &StagedSet {
        self.staging.staged()
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn is_pending(&self) -> bool {
        self.status == UploadStatus::Pending
    }

    pub fn select_files<I>(&mut self, source: I) -> &StagedSet
    where
        I: IntoIterator<Item = StagedFile>,
    {
        self.clear_failure();
        self.staging.select_files(source)
    }

    pub fn accept_drop(&mut self, event: &mut DropEvent) -> &StagedSet {
        self.clear_failure();
        self.staging.accept_drop(event)
    }

    /// Marks a submission as pending and hands back the batch to send.
    ///
    /// Returns `Ok(None)` when nothing is staged; the session is left as is.
    pub fn begin_submit(&mut self) -> Result<Option<StagedSet>, UploadError> {
        if self.is_pending() {
            warn!("Submit rejected, a batch is already in flight");
            return Err(UploadError::SubmissionInFlight);
        }

        if self.staging.staged().is_empty() {
            return Ok(None);
        }

        self.status = UploadStatus::Pending;
        Ok(Some(self.staging.staged().clone()))
    }

    pub fn finish_submit(&mut self, outcome: Result<Submission, UploadError>) {
        match outcome {
            Ok(Submission::Completed(results)) => {
                info!(rows = results.len(), "Result set replaced");
                self.results = results;
                self.completed_at = Some(Utc::now());
                self.status = UploadStatus::Idle;
            }
            Ok(Submission::EmptySelection) => {
                self.status = UploadStatus::Idle;
            }
            Err(error) => {
                warn!(error = %error, "Submission failed, keeping previous results");
                self.status = UploadStatus::Failed(error);
            }
        }
    }

    fn clear_failure(&mut self) {
        if matches!(self.status, UploadStatus::Failed(_)) {
            self.status = UploadStatus::Idle;
        }
    }
}

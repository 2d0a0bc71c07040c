use serde::Serialize;
use thiserror::Error;

/// Why a batch submission did not produce a result set.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum UploadError {
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Optimizer responded with status {status}")]
    ServerError { status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("A submission is already in flight")]
    SubmissionInFlight,
}

#[derive(Debug)]
pub enum ApplicationError {
    BadRequest(String),
    Conflict(String),
    InternalError(String),
}

impl From<UploadError> for ApplicationError {
    fn from(error: UploadError) -> Self {
        match error {
            UploadError::SubmissionInFlight => ApplicationError::Conflict(error.to_string()),
            other => ApplicationError::InternalError(other.to_string()),
        }
    }
}

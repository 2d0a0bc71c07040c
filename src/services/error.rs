use thiserror::Error;

use crate::application::error::UploadError;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Optimizer returned status {0}")]
    Status(u16),

    #[error("Response body is not JSON: {0}")]
    Decode(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl From<TransportError> for UploadError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Status(status) => UploadError::ServerError { status },
            TransportError::Decode(msg) => UploadError::MalformedResponse(msg),
            TransportError::Timeout
            | TransportError::Connect(_)
            | TransportError::Request(_) => UploadError::NetworkFailure(error.to_string()),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_connect() {
            TransportError::Connect(error.to_string())
        } else if let Some(status) = error.status() {
            TransportError::Status(status.as_u16())
        } else if error.is_decode() {
            TransportError::Decode(error.to_string())
        } else {
            TransportError::Request(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_server_error() {
        let err: UploadError = TransportError::Status(503).into();
        assert_eq!(err, UploadError::ServerError { status: 503 });
    }

    #[test]
    fn connection_problems_map_to_network_failure() {
        let err: UploadError = TransportError::Timeout.into();
        assert_eq!(err, UploadError::NetworkFailure("Request timeout".into()));

        let err: UploadError = TransportError::Connect("refused".into()).into();
        assert!(matches!(err, UploadError::NetworkFailure(msg) if msg.contains("refused")));
    }

    #[test]
    fn undecodable_body_maps_to_malformed_response() {
        let err: UploadError = TransportError::Decode("expected value".into()).into();
        assert!(matches!(err, UploadError::MalformedResponse(_)));
    }
}

//! Error taxonomy for the ingestion pipeline

/// Failures surfaced by `fetch_one` and `ingest`
///
/// There is no local recovery: both variants propagate to the caller and
/// abort the run.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The remote endpoint could not be reached, timed out, or answered
    /// with a non-success status.
    #[error("source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// The endpoint answered, but the payload was not the expected shape
    /// or the name fields were absent.
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}

impl IngestError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        IngestError::SourceUnavailable {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        IngestError::MalformedResponse {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            IngestError::unavailable(format!("request timed out: {}", err))
        } else if err.is_decode() {
            IngestError::malformed(format!("body was not valid JSON: {}", err))
        } else {
            IngestError::unavailable(err.to_string())
        }
    }
}

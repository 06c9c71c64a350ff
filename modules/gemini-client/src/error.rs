use thiserror::Error;

/// Failure modes of a single generateContent call.
///
/// No variant is retried here; callers decide whether a failure aborts the
/// operation or gets masked by a fallback.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation endpoint returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("prompt blocked by safety filter: {reason}")]
    ContentBlocked { reason: String },

    #[error("response carried no candidate text")]
    MalformedResponse,
}

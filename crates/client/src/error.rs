use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the data-access layer.
///
/// Partial failures inside fan-out aggregation are deliberately *not* here:
/// they are logged and degraded to empty collections, so `assemble`/list
/// operations always produce a value.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: the backend never produced a usable response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The backend rejected the session token. The session store has already
    /// been cleared and the on-unauthorized hook fired by the time this is
    /// returned.
    #[error("unauthorized: session is no longer valid")]
    Unauthorized,
    /// Non-2xx response with the message extracted from the backend error
    /// body when present.
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },
    /// Client-side rejection of a request before submission (mixed-payment
    /// splits, commission percentages, pending-amount bounds).
    #[error("validation error: {0}")]
    Validation(String),
}

//! Transport-level error types.
//!
//! This module contains the errors the HTTP layer itself can produce.
//! Application-level failures reported by the API (non-2xx statuses with a
//! structured body) are not transport errors; the REST layer decodes those
//! into [`ApiError`](crate::rest::ApiError).
//!
//! - [`MaxRetriesExceededError`]: retry attempts exhausted on a retryable status
//! - [`TransportError`]: unified error type for the HTTP layer

use thiserror::Error;

/// Error returned when maximum retry attempts have been exhausted.
///
/// This error is raised when a request keeps failing with a retryable
/// status (429 or 5xx) after all configured attempts have been made.
///
/// # Example
///
/// ```rust
/// use chargebee_api::clients::MaxRetriesExceededError;
///
/// let error = MaxRetriesExceededError {
///     status: 429,
///     tries: 3,
///     last_body: r#"{"message":"Rate limited"}"#.to_string(),
/// };
///
/// println!("{error}"); // "Exceeded maximum retry count of 3. Last status: 429"
/// ```
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last status: {status}")]
pub struct MaxRetriesExceededError {
    /// The HTTP status code of the last response.
    pub status: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// The body of the last response, for diagnostics.
    pub last_body: String,
}

/// Unified error type for the HTTP transport.
///
/// # Example
///
/// ```rust,ignore
/// match client.execute(request).await {
///     Ok(response) => { /* any terminal status, including errors */ }
///     Err(TransportError::MaxRetries(e)) => { /* retry exhaustion */ }
///     Err(TransportError::Network(e)) => { /* connection failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxRetriesExceededError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

//! Error types for REST API operations.
//!
//! Failures surface through the [`Error`] enum. Responses the API rejects
//! with a structured error document become [`Error::Api`], carrying the
//! decoded [`ApiError`]. Everything that goes wrong before a response body
//! is available (network failures, retry exhaustion) arrives as
//! [`Error::Transport`], and malformed or incomplete payloads surface as
//! [`Error::Decode`].
//!
//! # Example
//!
//! ```rust,ignore
//! use chargebee_api::rest::Error;
//!
//! match PaymentSource::retrieve("pm_missing").send(&client).await {
//!     Ok(result) => println!("found: {:?}", result.payment_source()),
//!     Err(Error::Api(api)) if api.http_status == 404 => {
//!         println!("no such payment source: {}", api.message);
//!     }
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::clients::TransportError;
use crate::wire::DecodeError;

/// A structured error reported by the billing API.
///
/// Chargebee describes request failures with a JSON document carrying a
/// human-readable `message`, a stable machine-readable `api_error_code`
/// and, for validation failures, the `param` the error refers to.
///
/// # Example
///
/// ```rust
/// use chargebee_api::rest::ApiError;
///
/// let error = ApiError {
///     http_status: 400,
///     message: "customer_id is required".to_string(),
///     error_type: Some("invalid_request".to_string()),
///     api_error_code: Some("param_missing".to_string()),
///     param: Some("customer_id".to_string()),
/// };
/// assert!(error.to_string().contains("customer_id is required"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("api error (status {http_status}): {message}")]
pub struct ApiError {
    /// HTTP status code of the failed response.
    pub http_status: u16,
    /// Human-readable description of the failure.
    pub message: String,
    /// Broad failure category, such as `invalid_request` or `payment`.
    pub error_type: Option<String>,
    /// Stable machine-readable code, such as `resource_not_found`.
    pub api_error_code: Option<String>,
    /// Parameter the error refers to, for parameter-specific failures.
    pub param: Option<String>,
}

/// Wire shape of the API's error document.
#[derive(Deserialize)]
struct ApiErrorPayload {
    message: Option<String>,
    #[serde(rename = "type")]
    error_type: Option<String>,
    api_error_code: Option<String>,
    param: Option<String>,
}

impl ApiError {
    /// Builds an [`ApiError`] from a non-2xx response.
    ///
    /// Falls back to the raw body text as the message when the body is not
    /// the structured error document the API normally returns.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let raw_message = || String::from_utf8_lossy(body).into_owned();

        match serde_json::from_slice::<ApiErrorPayload>(body) {
            Ok(payload) => Self {
                http_status: status,
                message: payload.message.unwrap_or_else(raw_message),
                error_type: payload.error_type,
                api_error_code: payload.api_error_code,
                param: payload.param,
            },
            Err(_) => Self {
                http_status: status,
                message: raw_message(),
                error_type: None,
                api_error_code: None,
                param: None,
            },
        }
    }
}

/// Error type for request dispatch and response decoding.
///
/// # Example
///
/// ```rust
/// use chargebee_api::rest::Error;
///
/// let error = Error::MissingRequiredParam {
///     param: "customer[id]".to_string(),
/// };
/// assert!(error.to_string().contains("customer[id]"));
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// The response payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The request could not be delivered.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API rejected the request with a structured error document.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request was already sent and cannot be dispatched again.
    #[error("request has already been sent; build a new request instead of reusing it")]
    RequestReused,

    /// A required parameter was registered but never given a value.
    #[error("missing required parameter: {param}")]
    MissingRequiredParam {
        /// Bracket-path name of the absent parameter.
        param: String,
    },

    /// A resource identifier used in the request path was empty.
    #[error("resource identifier cannot be empty")]
    InvalidIdentifier,
}

impl Error {
    /// Returns the machine-readable API error code, when present.
    ///
    /// Useful for matching on stable codes such as `resource_not_found`
    /// without destructuring the [`Error::Api`] variant.
    #[must_use]
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api(api) => api.api_error_code.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status of a rejected request, when present.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api(api) => Some(api.http_status),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<ApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_error_body() -> Vec<u8> {
        serde_json::json!({
            "message": "customer_id is required",
            "type": "invalid_request",
            "api_error_code": "param_missing",
            "param": "customer_id"
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn test_api_error_from_structured_body() {
        let error = ApiError::from_response(400, &create_test_error_body());

        assert_eq!(error.http_status, 400);
        assert_eq!(error.message, "customer_id is required");
        assert_eq!(error.error_type.as_deref(), Some("invalid_request"));
        assert_eq!(error.api_error_code.as_deref(), Some("param_missing"));
        assert_eq!(error.param.as_deref(), Some("customer_id"));
    }

    #[test]
    fn test_api_error_from_partial_body() {
        let body = serde_json::json!({ "message": "Sorry, something went wrong" })
            .to_string()
            .into_bytes();

        let error = ApiError::from_response(500, &body);

        assert_eq!(error.http_status, 500);
        assert_eq!(error.message, "Sorry, something went wrong");
        assert_eq!(error.error_type, None);
        assert_eq!(error.api_error_code, None);
        assert_eq!(error.param, None);
    }

    #[test]
    fn test_api_error_from_non_json_body() {
        let error = ApiError::from_response(502, b"Bad Gateway");

        assert_eq!(error.http_status, 502);
        assert_eq!(error.message, "Bad Gateway");
        assert_eq!(error.api_error_code, None);
    }

    #[test]
    fn test_api_error_falls_back_when_message_missing() {
        let error = ApiError::from_response(404, b"{\"api_error_code\":\"resource_not_found\"}");

        assert_eq!(error.api_error_code.as_deref(), Some("resource_not_found"));
        assert!(error.message.contains("resource_not_found"));
    }

    #[test]
    fn test_api_error_display_includes_status_and_message() {
        let error = ApiError::from_response(400, &create_test_error_body());

        assert_eq!(
            error.to_string(),
            "api error (status 400): customer_id is required"
        );
    }

    #[test]
    fn test_from_decode_error_conversion() {
        let decode = DecodeError::FieldAbsent {
            field: "id".to_string(),
        };

        let error: Error = decode.into();
        assert!(matches!(error, Error::Decode(_)));
    }

    #[test]
    fn test_from_api_error_conversion() {
        let error: Error = ApiError::from_response(404, &create_test_error_body()).into();

        assert_eq!(error.http_status(), Some(404));
        assert_eq!(error.api_error_code(), Some("param_missing"));
    }

    #[test]
    fn test_accessors_return_none_for_non_api_variants() {
        let error = Error::RequestReused;

        assert_eq!(error.http_status(), None);
        assert_eq!(error.api_error_code(), None);
    }

    #[test]
    fn test_missing_required_param_names_the_param() {
        let error = Error::MissingRequiredParam {
            param: "customer[id]".to_string(),
        };

        assert_eq!(error.to_string(), "missing required parameter: customer[id]");
    }

    #[test]
    fn test_request_reused_message() {
        let message = Error::RequestReused.to_string();

        assert!(message.contains("already been sent"));
    }

    #[test]
    fn test_invalid_identifier_message() {
        let message = Error::InvalidIdentifier.to_string();

        assert!(message.contains("cannot be empty"));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let api_error: &dyn std::error::Error = &Error::Api(ApiError::from_response(400, b"{}"));
        let _ = api_error;

        let reuse_error: &dyn std::error::Error = &Error::RequestReused;
        let _ = reuse_error;

        let identifier_error: &dyn std::error::Error = &Error::InvalidIdentifier;
        let _ = identifier_error;
    }
}

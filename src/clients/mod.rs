//! HTTP transport for Chargebee API communication.
//!
//! This module provides the foundational HTTP layer for making
//! authenticated requests to the Chargebee API. It handles URL assembly,
//! basic-auth credentials, retries, and hands raw bytes up to the REST
//! layer for decoding.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`RawResponse`]: A terminal response, status plus raw body bytes
//! - [`TransportError`]: Transport-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use chargebee_api::{ChargebeeConfig, ApiKey, SiteName};
//! use chargebee_api::clients::{HttpClient, HttpMethod};
//!
//! let config = ChargebeeConfig::builder()
//!     .site(SiteName::new("acme")?)
//!     .api_key(ApiKey::new("test_sk_abc123")?)
//!     .build()?;
//!
//! let client = HttpClient::new(&config);
//! let response = client
//!     .execute(HttpMethod::Get, "payment_sources", Some("limit=5"), None, &[], 1)
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client implements automatic retry logic for transient failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **5xx (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Pass a higher
//! attempt count to [`HttpClient::execute`] to enable retries.

mod errors;
mod http_client;

pub use errors::{MaxRetriesExceededError, TransportError};
pub use http_client::{HttpClient, HttpMethod, RawResponse, SDK_VERSION};

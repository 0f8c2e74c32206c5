//! HTTP client for Chargebee API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Chargebee API with automatic retry handling. The client
//! deals in raw bytes and status codes; decoding bodies into typed
//! resources happens in the [`rest`](crate::rest) layer.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::{MaxRetriesExceededError, TransportError};
use crate::config::ChargebeeConfig;

/// Fixed retry wait time in seconds, used when the server sends no
/// `Retry-After` hint.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP method for an API operation.
///
/// The API uses `GET` for reads and `POST` with a form body for every
/// mutation, including deletes (`.../delete` action paths).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Retrieve or list.
    Get,
    /// Create, update, or action endpoints.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A terminal HTTP response: final status plus raw body bytes.
///
/// "Terminal" means the retry loop is done with it; a `RawResponse` can
/// still carry an application error status, which the REST layer decodes
/// into a typed error.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Returns whether the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP client for making requests to the Chargebee API.
///
/// The client handles:
/// - Base URL construction from the configured site or endpoint override
/// - HTTP basic auth with the API key as username
/// - Default headers including User-Agent
/// - Automatic retry logic for 429 and 5xx responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use chargebee_api::{ChargebeeConfig, ApiKey, SiteName};
/// use chargebee_api::clients::{HttpClient, HttpMethod};
///
/// let config = ChargebeeConfig::builder()
///     .site(SiteName::new("acme")?)
///     .api_key(ApiKey::new("test_sk_abc123")?)
///     .build()?;
///
/// let client = HttpClient::new(&config);
/// let response = client
///     .execute(HttpMethod::Get, "payment_sources/ps_1", None, None, &[], 1)
///     .await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://acme.chargebee.com/api/v2`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// API key sent as the basic-auth username.
    api_key: crate::config::ApiKey,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chargebee_api::{ChargebeeConfig, ApiKey, SiteName};
    /// use chargebee_api::clients::HttpClient;
    ///
    /// let config = ChargebeeConfig::builder()
    ///     .site(SiteName::new("acme").unwrap())
    ///     .api_key(ApiKey::new("test_sk_abc123").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.base_url(), "https://acme.chargebee.com/api/v2");
    /// ```
    #[must_use]
    pub fn new(config: &ChargebeeConfig) -> Self {
        let base_url = config.api_base_url();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Chargebee API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .timeout(config.read_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
            api_key: config.api_key().clone(),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the terminal response.
    ///
    /// This method handles:
    /// - URL construction from the base URL, path, and query string
    /// - Basic-auth and header injection
    /// - Retry logic for 429 and 5xx responses, honoring `Retry-After`
    ///
    /// Any terminal status comes back as `Ok`; decoding success and error
    /// bodies is the caller's concern. `tries` is the total attempt count,
    /// with values below 1 treated as 1.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if:
    /// - A network error occurs (`Network`)
    /// - Retries were configured and exhausted on a retryable status (`MaxRetries`)
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&str>,
        form_body: Option<&str>,
        extra_headers: &[(String, String)],
        tries: u32,
    ) -> Result<RawResponse, TransportError> {
        let mut url = format!("{}/{}", self.base_url, path);
        if let Some(query) = query {
            if !query.is_empty() {
                url.push('?');
                url.push_str(query);
            }
        }

        let tries = tries.max(1);
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            // Build the reqwest request
            let mut req_builder = match method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
            };

            req_builder = req_builder.basic_auth(self.api_key.as_ref(), None::<&str>);

            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }
            for (key, value) in extra_headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(body) = form_body {
                req_builder = req_builder
                    .header(
                        "Content-Type",
                        "application/x-www-form-urlencoded;charset=UTF-8",
                    )
                    .body(body.to_string());
            }

            // Send request
            let res = req_builder.send().await?;

            let status = res.status().as_u16();
            let retry_after = Self::parse_retry_after(res.headers());
            let body = res.bytes().await?.to_vec();
            let response = RawResponse { status, body };

            let retryable = status == 429 || status >= 500;
            if !retryable || tries == 1 {
                return Ok(response);
            }

            if attempt >= tries {
                return Err(TransportError::MaxRetries(MaxRetriesExceededError {
                    status,
                    tries,
                    last_body: response.text(),
                }));
            }

            let delay = Self::calculate_retry_delay(status, retry_after);
            tracing::warn!(
                status,
                attempt,
                delay_secs = delay.as_secs_f64(),
                "retryable API status, waiting before next attempt"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses a `Retry-After` header value in seconds, if present.
    fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<f64> {
        headers
            .get("retry-after")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<f64>().ok())
    }

    /// Calculates the retry delay based on status code and `Retry-After`.
    fn calculate_retry_delay(status: u16, retry_after: Option<f64>) -> std::time::Duration {
        // For 429: use Retry-After if present, otherwise fixed delay
        // For 5xx: always use fixed delay (ignore Retry-After)
        if status == 429 {
            if let Some(retry_after) = retry_after {
                return std::time::Duration::from_secs_f64(retry_after.max(0.0));
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }
}

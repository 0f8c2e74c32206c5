//! Configuration types for the Chargebee API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Chargebee.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ChargebeeConfig`]: The main configuration struct holding all SDK settings
//! - [`ChargebeeConfigBuilder`]: A builder for constructing [`ChargebeeConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`SiteName`]: A validated Chargebee site name
//! - [`ApiEndpoint`]: A validated base-URL override
//!
//! # Example
//!
//! ```rust
//! use chargebee_api::{ChargebeeConfig, ApiKey, SiteName};
//!
//! let config = ChargebeeConfig::builder()
//!     .site(SiteName::new("acme").unwrap())
//!     .api_key(ApiKey::new("test_sk_abc123").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiEndpoint, ApiKey, SiteName};

use crate::error::ConfigError;
use std::time::Duration;

/// Configuration for the Chargebee API SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// the site, API credentials, and transport settings.
///
/// # Thread Safety
///
/// `ChargebeeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use chargebee_api::{ChargebeeConfig, ApiKey, SiteName};
/// use std::time::Duration;
///
/// let config = ChargebeeConfig::builder()
///     .site(SiteName::new("acme").unwrap())
///     .api_key(ApiKey::new("test_sk_abc123").unwrap())
///     .read_timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.site().site(), "acme");
/// ```
#[derive(Clone, Debug)]
pub struct ChargebeeConfig {
    site: SiteName,
    api_key: ApiKey,
    endpoint: Option<ApiEndpoint>,
    connect_timeout: Duration,
    read_timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl ChargebeeConfig {
    /// Creates a new builder for constructing a `ChargebeeConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chargebee_api::{ChargebeeConfig, ApiKey, SiteName};
    ///
    /// let config = ChargebeeConfig::builder()
    ///     .site(SiteName::new("acme").unwrap())
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ChargebeeConfigBuilder {
        ChargebeeConfigBuilder::new()
    }

    /// Returns the site name.
    #[must_use]
    pub const fn site(&self) -> &SiteName {
        &self.site
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API endpoint override, if configured.
    #[must_use]
    pub const fn endpoint(&self) -> Option<&ApiEndpoint> {
        self.endpoint.as_ref()
    }

    /// Returns the connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the read timeout.
    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL for API requests.
    ///
    /// This is the endpoint override when one is configured, otherwise
    /// `https://{site}.chargebee.com/api/v2`.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        self.endpoint.as_ref().map_or_else(
            || format!("https://{}/api/v2", self.site.as_ref()),
            |endpoint| endpoint.as_ref().to_string(),
        )
    }
}

// Verify ChargebeeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChargebeeConfig>();
};

/// Builder for constructing [`ChargebeeConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required fields
/// are `site` and `api_key`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `connect_timeout`: 30 seconds
/// - `read_timeout`: 80 seconds
/// - `endpoint`: `None` (requests go to `https://{site}.chargebee.com/api/v2`)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use chargebee_api::{ChargebeeConfig, ApiKey, ApiEndpoint, SiteName};
/// use std::time::Duration;
///
/// let config = ChargebeeConfig::builder()
///     .site(SiteName::new("acme").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .endpoint(ApiEndpoint::new("http://localhost:8080/api/v2").unwrap())
///     .connect_timeout(Duration::from_secs(10))
///     .read_timeout(Duration::from_secs(60))
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ChargebeeConfigBuilder {
    site: Option<SiteName>,
    api_key: Option<ApiKey>,
    endpoint: Option<ApiEndpoint>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ChargebeeConfigBuilder {
    const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
    const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(80);

    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the site name (required).
    #[must_use]
    pub fn site(mut self, site: SiteName) -> Self {
        self.site = Some(site);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets a base-URL override for API requests.
    ///
    /// Overrides the default `https://{site}.chargebee.com/api/v2` base URL.
    /// Mainly useful for pointing the client at a mock server in tests.
    #[must_use]
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the read timeout.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ChargebeeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `site` or `api_key`
    /// are not set.
    pub fn build(self) -> Result<ChargebeeConfig, ConfigError> {
        let site = self
            .site
            .ok_or(ConfigError::MissingRequiredField { field: "site" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(ChargebeeConfig {
            site,
            api_key,
            endpoint: self.endpoint,
            connect_timeout: self.connect_timeout.unwrap_or(Self::DEFAULT_CONNECT_TIMEOUT),
            read_timeout: self.read_timeout.unwrap_or(Self::DEFAULT_READ_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_site() {
        let result = ChargebeeConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "site" })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = ChargebeeConfigBuilder::new()
            .site(SiteName::new("acme").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ChargebeeConfig::builder()
            .site(SiteName::new("acme").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
        assert_eq!(config.read_timeout(), Duration::from_secs(80));
        assert!(config.endpoint().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChargebeeConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = ChargebeeConfig::builder()
            .site(SiteName::new("acme").unwrap())
            .api_key(ApiKey::new("test_sk_secret_value").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.api_key(), config.api_key());

        // Verify Debug works without exposing the key
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ChargebeeConfig"));
        assert!(!debug_str.contains("test_sk_secret_value"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let endpoint = ApiEndpoint::new("http://localhost:8080/api/v2").unwrap();

        let config = ChargebeeConfig::builder()
            .site(SiteName::new("acme").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .endpoint(endpoint.clone())
            .connect_timeout(Duration::from_secs(10))
            .read_timeout(Duration::from_secs(60))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.endpoint(), Some(&endpoint));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.read_timeout(), Duration::from_secs(60));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_api_base_url_defaults_to_site_host() {
        let config = ChargebeeConfig::builder()
            .site(SiteName::new("acme").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_base_url(), "https://acme.chargebee.com/api/v2");
    }

    #[test]
    fn test_api_base_url_honors_endpoint_override() {
        let config = ChargebeeConfig::builder()
            .site(SiteName::new("acme").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .endpoint(ApiEndpoint::new("http://localhost:8080/api/v2").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_base_url(), "http://localhost:8080/api/v2");
    }
}

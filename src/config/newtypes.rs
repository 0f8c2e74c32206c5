//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Chargebee API key.
///
/// This newtype ensures the API key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use chargebee_api::ApiKey;
///
/// let key = ApiKey::new("test_sk_abc123").unwrap();
/// assert_eq!(key.as_ref(), "test_sk_abc123");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Chargebee site name.
///
/// This newtype validates and normalizes site names to the full
/// `site.chargebee.com` host format.
///
/// # Accepted Formats
///
/// - `acme` - normalized to `acme.chargebee.com`
/// - `acme.chargebee.com` - used as-is
///
/// Test sites such as `acme-test` follow the same rules.
///
/// # Serialization
///
/// `SiteName` serializes to and deserializes from the full host string:
///
/// ```rust
/// use chargebee_api::SiteName;
///
/// let site = SiteName::new("acme").unwrap();
/// let json = serde_json::to_string(&site).unwrap();
/// assert_eq!(json, r#""acme.chargebee.com""#);
/// ```
///
/// # Example
///
/// ```rust
/// use chargebee_api::SiteName;
///
/// // Short format is normalized
/// let site = SiteName::new("acme").unwrap();
/// assert_eq!(site.as_ref(), "acme.chargebee.com");
/// assert_eq!(site.site(), "acme");
///
/// // Full format is accepted
/// let site = SiteName::new("acme.chargebee.com").unwrap();
/// assert_eq!(site.as_ref(), "acme.chargebee.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteName {
    full_host: String,
    site_end: usize,
}

impl SiteName {
    const SUFFIX: &'static str = ".chargebee.com";

    /// Creates a new validated site name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSiteName`] if the site name is invalid.
    pub fn new(site: impl Into<String>) -> Result<Self, ConfigError> {
        let site = site.into();
        let site = site.trim().to_lowercase();

        if site.is_empty() {
            return Err(ConfigError::InvalidSiteName { site });
        }

        // Check if it's already a full host
        let (name, full_host) = if let Some(name) = site.strip_suffix(Self::SUFFIX) {
            (name.to_string(), site)
        } else if site.contains('.') {
            // Contains a dot but not the chargebee.com suffix - invalid
            return Err(ConfigError::InvalidSiteName { site });
        } else {
            // Short format - needs normalization
            (site.clone(), format!("{}{}", site, Self::SUFFIX))
        };

        // Validate the subdomain
        if !Self::is_valid_site(&name) {
            return Err(ConfigError::InvalidSiteName { site: full_host });
        }

        Ok(Self {
            site_end: name.len(),
            full_host,
        })
    }

    /// Returns the site portion of the host.
    ///
    /// For `acme.chargebee.com`, this returns `acme`.
    #[must_use]
    pub fn site(&self) -> &str {
        &self.full_host[..self.site_end]
    }

    fn is_valid_site(name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        // Site names can contain lowercase letters, numbers, and hyphens
        // They cannot start or end with a hyphen
        if name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for SiteName {
    fn as_ref(&self) -> &str {
        &self.full_host
    }
}

impl Serialize for SiteName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_host)
    }
}

impl<'de> Deserialize<'de> for SiteName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated API endpoint override.
///
/// By default requests go to `https://{site}.chargebee.com/api/v2`. Setting
/// an endpoint replaces that base URL, which is mainly useful for pointing
/// the client at a local mock server.
///
/// # Example
///
/// ```rust
/// use chargebee_api::ApiEndpoint;
///
/// let endpoint = ApiEndpoint::new("http://127.0.0.1:3000/api/v2").unwrap();
/// assert_eq!(endpoint.scheme(), "http");
/// assert_eq!(endpoint.host_name(), Some("127.0.0.1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoint {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiEndpoint {
    /// Creates a new validated API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiEndpoint`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiEndpoint { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiEndpoint { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiEndpoint { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidApiEndpoint { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for ApiEndpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("test_sk_super_secret").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("test_sk_super_secret"));
    }

    #[test]
    fn test_site_name_normalizes_short_format() {
        let site = SiteName::new("acme").unwrap();
        assert_eq!(site.as_ref(), "acme.chargebee.com");
        assert_eq!(site.site(), "acme");
    }

    #[test]
    fn test_site_name_accepts_full_format() {
        let site = SiteName::new("acme-test.chargebee.com").unwrap();
        assert_eq!(site.as_ref(), "acme-test.chargebee.com");
        assert_eq!(site.site(), "acme-test");
    }

    #[test]
    fn test_site_name_rejects_invalid_names() {
        // Empty
        assert!(SiteName::new("").is_err());

        // Invalid characters
        assert!(SiteName::new("my site").is_err());
        assert!(SiteName::new("my_site").is_err());
        assert!(SiteName::new("ACME").is_ok()); // normalized to lowercase

        // Starting/ending with hyphen
        assert!(SiteName::new("-acme").is_err());
        assert!(SiteName::new("acme-").is_err());

        // Wrong host suffix
        assert!(SiteName::new("acme.otherdomain.com").is_err());
    }

    #[test]
    fn test_api_endpoint_validates_format() {
        let endpoint = ApiEndpoint::new("https://acme.chargebee.com/api/v2").unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host_name(), Some("acme.chargebee.com"));

        // With port
        let endpoint = ApiEndpoint::new("http://localhost:3000").unwrap();
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.host_name(), Some("localhost"));
    }

    #[test]
    fn test_api_endpoint_trims_trailing_slash() {
        let endpoint = ApiEndpoint::new("http://localhost:3000/api/v2/").unwrap();
        assert_eq!(endpoint.as_ref(), "http://localhost:3000/api/v2");
    }

    #[test]
    fn test_api_endpoint_rejects_invalid() {
        // No scheme
        assert!(ApiEndpoint::new("acme.chargebee.com").is_err());

        // Empty host
        assert!(ApiEndpoint::new("https://").is_err());

        // Invalid scheme
        assert!(ApiEndpoint::new("://example.com").is_err());
    }

    // SiteName serialization tests
    #[test]
    fn test_site_name_serializes_to_string() {
        let site = SiteName::new("acme").unwrap();
        let json = serde_json::to_string(&site).unwrap();
        assert_eq!(json, r#""acme.chargebee.com""#);
    }

    #[test]
    fn test_site_name_deserializes_from_string() {
        let json = r#""acme-test.chargebee.com""#;
        let site: SiteName = serde_json::from_str(json).unwrap();
        assert_eq!(site.as_ref(), "acme-test.chargebee.com");
        assert_eq!(site.site(), "acme-test");
    }

    #[test]
    fn test_site_name_round_trip_serialization() {
        let original = SiteName::new("acme").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: SiteName = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}

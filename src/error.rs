//! Error types for SDK configuration.
//!
//! This module contains the error type returned by configuration
//! constructors and the config builder.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use chargebee_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Chargebee API key.")]
    EmptyApiKey,

    /// Site name is invalid.
    #[error("Invalid site name '{site}'. Expected format: 'acme' or 'acme.chargebee.com'.")]
    InvalidSiteName {
        /// The invalid site name that was provided.
        site: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API endpoint URL is invalid.
    #[error("Invalid API endpoint '{url}'. Please provide a valid URL with scheme (e.g., 'https://acme.chargebee.com/api/v2').")]
    InvalidApiEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },
}

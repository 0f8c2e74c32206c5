//! Error types for wire-format decoding.

use thiserror::Error;

/// Errors that can occur while decoding an API payload.
///
/// Parse failures, missing required fields, and shape mismatches are kept
/// as distinct variants so callers can tell a truncated response apart from
/// a response that simply lacks an optional section.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload was not a well-formed JSON object.
    #[error("malformed response payload: {detail}")]
    Parse {
        /// Description of the parse failure.
        detail: String,
    },

    /// A required field was missing (or JSON `null`) in the payload.
    #[error("required field '{field}' is missing from the response")]
    FieldAbsent {
        /// The dotted path of the missing field.
        field: String,
    },

    /// A field was present but its value could not be converted to the
    /// requested type.
    #[error("field '{field}' has unexpected type: expected {expected}, found {found}")]
    TypeMismatch {
        /// The dotted path of the offending field.
        field: String,
        /// The type the caller asked for.
        expected: &'static str,
        /// The JSON type actually present.
        found: &'static str,
    },
}

//! Ordered, dynamically-typed view over a decoded JSON payload.
//!
//! Every API response body decodes into a [`WireObject`] before any typed
//! resource sees it. The object keeps server field order, treats JSON `null`
//! the same as an absent key, and converts scalar values lazily at access
//! time instead of committing to a shape up front. Unknown fields sent by
//! newer server versions are carried along untouched.
//!
//! # Example
//!
//! ```rust
//! use chargebee_api::wire::WireObject;
//!
//! let body = br#"{"id":"ps_1","expiry_month":12,"auto_collect":true}"#;
//! let doc = WireObject::parse(body).unwrap();
//!
//! assert_eq!(doc.str_value("id").unwrap(), Some("ps_1".to_string()));
//! assert_eq!(doc.i64_value("expiry_month").unwrap(), Some(12));
//! // Scalars coerce to text on demand
//! assert_eq!(doc.str_value("auto_collect").unwrap(), Some("true".to_string()));
//! ```

use super::errors::DecodeError;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};

/// The JSON type name used in mismatch errors.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An ordered string-keyed view of one decoded JSON object.
///
/// Field order matches the server payload. Values stay generic until a
/// typed accessor converts them; a field the caller never touches is never
/// validated. All accessors treat JSON `null` as an absent key, matching
/// how the API omits empty fields.
#[derive(Debug, Clone)]
pub struct WireObject {
    /// Dotted parent path, used to qualify field names in errors.
    scope: Option<String>,
    entries: Map<String, Value>,
}

impl WireObject {
    /// Parses a response body into a `WireObject`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Parse`] if the bytes are not well-formed JSON
    /// or the top-level value is not an object.
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| DecodeError::Parse {
            detail: e.to_string(),
        })?;
        match value {
            Value::Object(entries) => Ok(Self {
                scope: None,
                entries,
            }),
            other => Err(DecodeError::Parse {
                detail: format!(
                    "expected a JSON object at the top level, found {}",
                    json_type_name(&other)
                ),
            }),
        }
    }

    /// Wraps an already-decoded JSON object.
    pub(crate) fn from_map(entries: Map<String, Value>) -> Self {
        Self {
            scope: None,
            entries,
        }
    }

    fn child(&self, path: String, entries: Map<String, Value>) -> Self {
        Self {
            scope: Some(path),
            entries,
        }
    }

    /// Returns the qualified field name used in error messages.
    fn field_path(&self, key: &str) -> String {
        self.scope
            .as_ref()
            .map_or_else(|| key.to_string(), |scope| format!("{scope}.{key}"))
    }

    /// Returns the raw value for `key`, treating `null` as absent.
    fn raw(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).filter(|v| !v.is_null())
    }

    /// Returns whether `key` is present with a non-null value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// Returns the field names in payload order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of fields, including null-valued ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extracts `key` as text.
    ///
    /// Strings are returned as-is; numbers and booleans convert to their
    /// canonical textual form.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is an array or
    /// object.
    pub fn str_value(&self, key: &str) -> Result<Option<String>, DecodeError> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(other) => Err(self.mismatch(key, "string", other)),
        }
    }

    /// Extracts `key` as a signed 64-bit integer.
    ///
    /// Accepts JSON integers, integral floats, and strings holding an
    /// integer.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value cannot be
    /// converted losslessly.
    pub fn i64_value(&self, key: &str) -> Result<Option<i64>, DecodeError> {
        match self.raw(key) {
            None => Ok(None),
            Some(value @ Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral_to_i64))
                .map(Some)
                .ok_or_else(|| self.mismatch(key, "integer", value)),
            Some(value @ Value::String(s)) => s
                .parse::<i64>()
                .map(Some)
                .map_err(|_| self.mismatch(key, "integer", value)),
            Some(other) => Err(self.mismatch(key, "integer", other)),
        }
    }

    /// Extracts `key` as a 64-bit float.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is neither a
    /// number nor a numeric string.
    pub fn f64_value(&self, key: &str) -> Result<Option<f64>, DecodeError> {
        match self.raw(key) {
            None => Ok(None),
            Some(value @ Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.mismatch(key, "number", value)),
            Some(value @ Value::String(s)) => s
                .parse::<f64>()
                .map(Some)
                .map_err(|_| self.mismatch(key, "number", value)),
            Some(other) => Err(self.mismatch(key, "number", other)),
        }
    }

    /// Extracts `key` as a boolean.
    ///
    /// Accepts JSON booleans and the strings `"true"` / `"false"`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] for any other shape.
    pub fn bool_value(&self, key: &str) -> Result<Option<bool>, DecodeError> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(value @ Value::String(s)) => match s.as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(self.mismatch(key, "boolean", value)),
            },
            Some(other) => Err(self.mismatch(key, "boolean", other)),
        }
    }

    /// Extracts `key` as a UTC timestamp.
    ///
    /// The wire format is integer epoch seconds.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is not an
    /// in-range epoch-second integer.
    pub fn timestamp_value(&self, key: &str) -> Result<Option<DateTime<Utc>>, DecodeError> {
        match self.i64_value(key)? {
            None => Ok(None),
            Some(secs) => Utc
                .timestamp_opt(secs, 0)
                .single()
                .map(Some)
                .ok_or_else(|| DecodeError::TypeMismatch {
                    field: self.field_path(key),
                    expected: "epoch timestamp",
                    found: "number",
                }),
        }
    }

    /// Extracts `key` as a nested object.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is present but
    /// not an object.
    pub fn object_value(&self, key: &str) -> Result<Option<Self>, DecodeError> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::Object(entries)) => {
                Ok(Some(self.child(self.field_path(key), entries.clone())))
            }
            Some(other) => Err(self.mismatch(key, "object", other)),
        }
    }

    /// Extracts `key` as an array of nested objects.
    ///
    /// An absent key yields an empty vector; list-valued fields are never
    /// required on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is not an array
    /// or any element is not an object.
    pub fn array_value(&self, key: &str) -> Result<Vec<Self>, DecodeError> {
        match self.raw(key) {
            None => Ok(Vec::new()),
            Some(value @ Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::Object(entries) => {
                        Ok(self.child(format!("{}[{idx}]", self.field_path(key)), entries.clone()))
                    }
                    _ => Err(self.mismatch(key, "array of objects", value)),
                })
                .collect(),
            Some(other) => Err(self.mismatch(key, "array of objects", other)),
        }
    }

    fn mismatch(&self, key: &str, expected: &'static str, found: &Value) -> DecodeError {
        DecodeError::TypeMismatch {
            field: self.field_path(key),
            expected,
            found: json_type_name(found),
        }
    }

    /// Builds the absence error for a field a caller requires.
    pub(crate) fn absent(&self, key: &str) -> DecodeError {
        DecodeError::FieldAbsent {
            field: self.field_path(key),
        }
    }
}

/// Converts an integral float to `i64` without truncation.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn integral_to_i64(f: f64) -> Option<i64> {
    // i64::MAX is not exactly representable as f64; the 2^63 bound is.
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> WireObject {
        WireObject::parse(json.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = WireObject::parse(b"{\"id\": ");
        assert!(matches!(result, Err(DecodeError::Parse { .. })));
    }

    #[test]
    fn test_parse_rejects_non_object_top_level() {
        let result = WireObject::parse(b"[1, 2, 3]");
        match result {
            Err(DecodeError::Parse { detail }) => assert!(detail.contains("found array")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_keys_preserve_payload_order() {
        let doc = doc(r#"{"zeta":1,"alpha":2,"mid":3}"#);
        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let doc = doc(r#"{"gateway_account_id":null}"#);
        assert!(!doc.contains_key("gateway_account_id"));
        assert_eq!(doc.str_value("gateway_account_id").unwrap(), None);
    }

    #[test]
    fn test_str_value_coerces_scalars() {
        let doc = doc(r#"{"name":"alice","count":7,"ratio":1.5,"flag":false}"#);
        assert_eq!(doc.str_value("name").unwrap(), Some("alice".to_string()));
        assert_eq!(doc.str_value("count").unwrap(), Some("7".to_string()));
        assert_eq!(doc.str_value("ratio").unwrap(), Some("1.5".to_string()));
        assert_eq!(doc.str_value("flag").unwrap(), Some("false".to_string()));
    }

    #[test]
    fn test_str_value_rejects_containers() {
        let doc = doc(r#"{"card":{"last4":"1111"}}"#);
        let err = doc.str_value("card").unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                field: "card".to_string(),
                expected: "string",
                found: "object",
            }
        );
    }

    #[test]
    fn test_i64_value_accepts_integers_and_numeric_strings() {
        let doc = doc(r#"{"a":12,"b":"34","c":56.0}"#);
        assert_eq!(doc.i64_value("a").unwrap(), Some(12));
        assert_eq!(doc.i64_value("b").unwrap(), Some(34));
        assert_eq!(doc.i64_value("c").unwrap(), Some(56));
    }

    #[test]
    fn test_i64_value_rejects_fractional_numbers() {
        let doc = doc(r#"{"a":12.5}"#);
        assert!(matches!(
            doc.i64_value("a"),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_bool_value_accepts_bool_and_bool_strings() {
        let doc = doc(r#"{"a":true,"b":"false","c":"yes"}"#);
        assert_eq!(doc.bool_value("a").unwrap(), Some(true));
        assert_eq!(doc.bool_value("b").unwrap(), Some(false));
        assert!(doc.bool_value("c").is_err());
    }

    #[test]
    fn test_timestamp_value_decodes_epoch_seconds() {
        let doc = doc(r#"{"created_at":1609459200}"#);
        let ts = doc.timestamp_value("created_at").unwrap().unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_object_value_returns_nested_document() {
        let doc = doc(r#"{"card":{"last4":"1111"}}"#);
        let card = doc.object_value("card").unwrap().unwrap();
        assert_eq!(card.str_value("last4").unwrap(), Some("1111".to_string()));
    }

    #[test]
    fn test_nested_errors_carry_the_full_path() {
        let doc = doc(r#"{"card":{"brand":[1]}}"#);
        let card = doc.object_value("card").unwrap().unwrap();
        let err = card.str_value("brand").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch { ref field, .. } if field == "card.brand"
        ));
    }

    #[test]
    fn test_array_value_yields_empty_vec_when_absent() {
        let doc = doc(r#"{"id":"cus_1"}"#);
        assert!(doc.array_value("payment_sources").unwrap().is_empty());
    }

    #[test]
    fn test_array_value_decodes_object_elements() {
        let doc = doc(r#"{"items":[{"id":"a"},{"id":"b"}]}"#);
        let items = doc.array_value("items").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].str_value("id").unwrap(), Some("b".to_string()));
    }

    #[test]
    fn test_array_value_rejects_scalar_elements() {
        let doc = doc(r#"{"items":[1,2]}"#);
        assert!(matches!(
            doc.array_value("items"),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_fields_are_retained() {
        let doc = doc(r#"{"id":"ps_1","field_added_in_v9":"kept"}"#);
        assert!(doc.contains_key("field_added_in_v9"));
        assert_eq!(doc.len(), 2);
    }
}

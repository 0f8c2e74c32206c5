//! Ordered request-parameter encoding.
//!
//! The API expects flattened form/query pairs whose keys use bracket
//! notation for nesting: a value under `card` / `billing_city` is sent as
//! `card[billing_city]=...`, and list entries carry their position, as in
//! `addons[0][id]=...`. Paths are kept structured as [`ParamPath`] segment
//! lists and only rendered to bracket form at the encoding boundary.
//!
//! Parameters keep insertion order and allow duplicate paths; both are
//! observable in the encoded output. Filter methods rely on this to emit
//! repeated `field[op]` pairs.
//!
//! # Example
//!
//! ```rust
//! use chargebee_api::params::{ParamPath, Params};
//!
//! let mut params = Params::new();
//! params.add(ParamPath::root("customer_id"), "cus_1");
//! params.add(ParamPath::root("card").key("billing_city"), "Walnut Creek");
//! params.add(ParamPath::root("addons").index(0).key("id"), "day-pass");
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "customer_id=cus_1&card%5Bbilling_city%5D=Walnut%20Creek&addons%5B0%5D%5Bid%5D=day-pass"
//! );
//! ```

mod filters;

pub use filters::{
    BooleanFilter, EnumFilter, FilterTarget, NumberFilter, SortFilter, SortOrder, StringFilter,
    TimestampFilter,
};

use crate::wire::WireEnum;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;

/// One step of a parameter path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named sub-key, rendered as `[name]` past the first segment.
    Key(String),
    /// A list position, rendered as `[n]`.
    Index(usize),
}

/// A structured parameter path, rendered to bracket notation on encoding.
///
/// The first segment is rendered bare and every following segment in
/// brackets, so `ParamPath::root("card").key("billing_city")` renders as
/// `card[billing_city]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamPath(Vec<PathSegment>);

impl ParamPath {
    /// Creates a path with a single top-level key.
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![PathSegment::Key(name.into())])
    }

    /// Appends a named sub-key.
    #[must_use]
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.0.push(PathSegment::Key(name.into()));
        self
    }

    /// Appends a list position.
    #[must_use]
    pub fn index(mut self, idx: usize) -> Self {
        self.0.push(PathSegment::Index(idx));
        self
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for ParamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(name) if i == 0 => f.write_str(name)?,
                PathSegment::Key(name) => write!(f, "[{name}]")?,
                PathSegment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for ParamPath {
    fn from(name: &str) -> Self {
        Self::root(name)
    }
}

impl From<String> for ParamPath {
    fn from(name: String) -> Self {
        Self::root(name)
    }
}

/// A parameter value awaiting encoding.
///
/// Values stay typed until the request is encoded; rendering picks the
/// wire spelling (epoch seconds for timestamps, a JSON array string for
/// multi-value filters).
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A plain string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean, rendered as `true` / `false`.
    Bool(bool),
    /// A timestamp, rendered as epoch seconds.
    Timestamp(DateTime<Utc>),
    /// A multi-value entry, rendered as a JSON array string.
    ///
    /// Elements keep their JSON type, so string sets render as
    /// `["a","b"]` while numeric ranges render as `[1,5]`.
    List(Vec<Value>),
    /// A required value that was never supplied. Send-time validation
    /// rejects the request; encoding skips the entry.
    Absent,
}

impl ParamValue {
    /// Builds a list value from anything yielding strings.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(|s| Value::String(s.into())).collect())
    }

    /// Builds a value from an enum's wire token.
    ///
    /// The catch-all variant has no token and renders as an empty value;
    /// the server rejects it, which is the desired outcome for a value
    /// that only exists because a newer server sent it.
    pub fn from_enum<E: WireEnum>(value: &E) -> Self {
        Self::Str(value.token().unwrap_or_default().to_string())
    }

    /// Converts this value into one element of a JSON-array rendering.
    ///
    /// Returns `None` for [`ParamValue::Absent`].
    pub(crate) fn to_json_element(&self) -> Option<Value> {
        match self {
            Self::Str(s) => Some(Value::String(s.clone())),
            Self::Int(i) => Some(Value::Number((*i).into())),
            Self::Float(f) => Some(
                serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number),
            ),
            Self::Bool(b) => Some(Value::Bool(*b)),
            Self::Timestamp(ts) => Some(Value::Number(ts.timestamp().into())),
            Self::List(values) => Some(Value::Array(values.clone())),
            Self::Absent => None,
        }
    }

    /// Renders the wire spelling of this value.
    ///
    /// Returns `None` for [`ParamValue::Absent`].
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Timestamp(ts) => Some(ts.timestamp().to_string()),
            Self::List(values) => Some(Value::Array(values.clone()).to_string()),
            Self::Absent => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// An ordered, duplicate-preserving parameter collection.
///
/// Encoding order always matches insertion order, and adding the same
/// path twice produces two encoded pairs.
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: Vec<(ParamPath, ParamValue)>,
}

impl Params {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn add(&mut self, path: impl Into<ParamPath>, value: impl Into<ParamValue>) {
        self.entries.push((path.into(), value.into()));
    }

    /// Appends a parameter only when a value is present.
    pub fn add_opt<V: Into<ParamValue>>(&mut self, path: impl Into<ParamPath>, value: Option<V>) {
        if let Some(value) = value {
            self.add(path, value);
        }
    }

    /// Appends a required parameter that may not have been supplied.
    ///
    /// A missing value is recorded as [`ParamValue::Absent`] so the
    /// request fails validation at send time instead of silently dropping
    /// the parameter. A later [`add`](Self::add) with the same path
    /// satisfies the requirement; typed operation builders register their
    /// required parameters this way before any setter runs.
    pub fn add_required<V: Into<ParamValue>>(
        &mut self,
        path: impl Into<ParamPath>,
        value: Option<V>,
    ) {
        match value {
            Some(value) => self.add(path, value),
            None => self.entries.push((path.into(), ParamValue::Absent)),
        }
    }

    /// Returns the number of recorded parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no parameters are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the recorded parameters in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &(ParamPath, ParamValue)> {
        self.entries.iter()
    }

    /// Returns the rendered path of the first required parameter that was
    /// recorded without a value and never satisfied by a later entry, if
    /// any.
    #[must_use]
    pub fn missing_required(&self) -> Option<String> {
        self.entries
            .iter()
            .filter(|(_, value)| matches!(value, ParamValue::Absent))
            .find(|(path, _)| {
                !self
                    .entries
                    .iter()
                    .any(|(p, v)| p == path && !matches!(v, ParamValue::Absent))
            })
            .map(|(path, _)| path.to_string())
    }

    /// Renders the parameters as plain `(key, value)` pairs in order.
    ///
    /// Absent entries are skipped; [`missing_required`](Self::missing_required)
    /// is the gate that keeps them from reaching this point.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(path, value)| value.render().map(|v| (path.to_string(), v)))
            .collect()
    }

    /// Renders the parameters as a percent-encoded query/form string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

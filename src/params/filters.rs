//! Typed filters for list requests.
//!
//! Each filter targets one field and exposes only the operators that make
//! sense for the field's type. Operator methods consume the filter and
//! hand the owning request back, so filters chain without intermediate
//! bindings:
//!
//! ```text
//! PaymentSource::list()
//!     .customer_id().is("cus_1")
//!     .status().is_in(&[PaymentSourceStatus::Valid, PaymentSourceStatus::Expiring])
//! ```
//!
//! Operators encode as `field[op]=value` pairs. Set operators render a
//! JSON array string (`status[in]=["valid","expiring"]`), ranges render a
//! two-element array, and every call appends one pair even when repeated.

use super::{ParamPath, ParamValue, Params};
use crate::wire::WireEnum;
use serde_json::Value;
use std::marker::PhantomData;

/// A request type whose parameter collection filters can append to.
pub trait FilterTarget: Sized {
    /// Returns the parameter collection under construction.
    fn params_mut(&mut self) -> &mut Params;
}

fn push<R: FilterTarget>(mut target: R, field: &ParamPath, op: &str, value: ParamValue) -> R {
    target.params_mut().add(field.clone().key(op), value);
    target
}

/// Filter over a string-valued field.
#[derive(Debug)]
pub struct StringFilter<R: FilterTarget> {
    target: R,
    field: ParamPath,
}

impl<R: FilterTarget> StringFilter<R> {
    /// Creates a filter for `field` on `target`.
    pub fn new(target: R, field: impl Into<ParamPath>) -> Self {
        Self {
            target,
            field: field.into(),
        }
    }

    /// Matches values equal to `value`.
    #[must_use]
    pub fn is(self, value: impl Into<String>) -> R {
        push(self.target, &self.field, "is", ParamValue::Str(value.into()))
    }

    /// Matches values not equal to `value`.
    #[must_use]
    pub fn is_not(self, value: impl Into<String>) -> R {
        push(
            self.target,
            &self.field,
            "is_not",
            ParamValue::Str(value.into()),
        )
    }

    /// Matches values starting with `prefix`.
    #[must_use]
    pub fn starts_with(self, prefix: impl Into<String>) -> R {
        push(
            self.target,
            &self.field,
            "starts_with",
            ParamValue::Str(prefix.into()),
        )
    }

    /// Matches values contained in `values`.
    #[must_use]
    pub fn is_in<I, S>(self, values: I) -> R
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push(self.target, &self.field, "in", ParamValue::list(values))
    }

    /// Matches values not contained in `values`.
    #[must_use]
    pub fn not_in<I, S>(self, values: I) -> R
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push(self.target, &self.field, "not_in", ParamValue::list(values))
    }

    /// Matches on whether the field has any value at all.
    #[must_use]
    pub fn is_present(self, present: bool) -> R {
        push(
            self.target,
            &self.field,
            "is_present",
            ParamValue::Bool(present),
        )
    }
}

/// Filter over an enum-valued field.
#[derive(Debug)]
pub struct EnumFilter<E: WireEnum, R: FilterTarget> {
    target: R,
    field: ParamPath,
    _values: PhantomData<E>,
}

impl<E: WireEnum, R: FilterTarget> EnumFilter<E, R> {
    /// Creates a filter for `field` on `target`.
    pub fn new(target: R, field: impl Into<ParamPath>) -> Self {
        Self {
            target,
            field: field.into(),
            _values: PhantomData,
        }
    }

    /// Matches values equal to `value`.
    #[must_use]
    pub fn is(self, value: E) -> R {
        push(self.target, &self.field, "is", ParamValue::from_enum(&value))
    }

    /// Matches values not equal to `value`.
    #[must_use]
    pub fn is_not(self, value: E) -> R {
        push(
            self.target,
            &self.field,
            "is_not",
            ParamValue::from_enum(&value),
        )
    }

    /// Matches values contained in `values`.
    #[must_use]
    pub fn is_in(self, values: &[E]) -> R {
        push(self.target, &self.field, "in", Self::token_list(values))
    }

    /// Matches values not contained in `values`.
    #[must_use]
    pub fn not_in(self, values: &[E]) -> R {
        push(self.target, &self.field, "not_in", Self::token_list(values))
    }

    /// Matches on whether the field has any value at all.
    #[must_use]
    pub fn is_present(self, present: bool) -> R {
        push(
            self.target,
            &self.field,
            "is_present",
            ParamValue::Bool(present),
        )
    }

    fn token_list(values: &[E]) -> ParamValue {
        ParamValue::list(values.iter().map(|v| v.token().unwrap_or_default()))
    }
}

/// Filter over a numeric field.
#[derive(Debug)]
pub struct NumberFilter<V, R: FilterTarget> {
    target: R,
    field: ParamPath,
    _values: PhantomData<V>,
}

impl<V, R> NumberFilter<V, R>
where
    V: Into<ParamValue>,
    R: FilterTarget,
{
    /// Creates a filter for `field` on `target`.
    pub fn new(target: R, field: impl Into<ParamPath>) -> Self {
        Self {
            target,
            field: field.into(),
            _values: PhantomData,
        }
    }

    /// Matches values equal to `value`.
    #[must_use]
    pub fn is(self, value: V) -> R {
        push(self.target, &self.field, "is", value.into())
    }

    /// Matches values not equal to `value`.
    #[must_use]
    pub fn is_not(self, value: V) -> R {
        push(self.target, &self.field, "is_not", value.into())
    }

    /// Matches values strictly greater than `value`.
    #[must_use]
    pub fn gt(self, value: V) -> R {
        push(self.target, &self.field, "gt", value.into())
    }

    /// Matches values greater than or equal to `value`.
    #[must_use]
    pub fn gte(self, value: V) -> R {
        push(self.target, &self.field, "gte", value.into())
    }

    /// Matches values strictly less than `value`.
    #[must_use]
    pub fn lt(self, value: V) -> R {
        push(self.target, &self.field, "lt", value.into())
    }

    /// Matches values less than or equal to `value`.
    #[must_use]
    pub fn lte(self, value: V) -> R {
        push(self.target, &self.field, "lte", value.into())
    }

    /// Matches values in the inclusive range `min..=max`.
    #[must_use]
    pub fn between(self, min: V, max: V) -> R {
        push(self.target, &self.field, "between", range(min, max))
    }

    /// Matches values contained in `values`.
    #[must_use]
    pub fn is_in(self, values: Vec<V>) -> R {
        let elements: Vec<Value> = values
            .into_iter()
            .filter_map(|v| v.into().to_json_element())
            .collect();
        push(self.target, &self.field, "in", ParamValue::List(elements))
    }

    /// Matches on whether the field has any value at all.
    #[must_use]
    pub fn is_present(self, present: bool) -> R {
        push(
            self.target,
            &self.field,
            "is_present",
            ParamValue::Bool(present),
        )
    }
}

/// Filter over a timestamp field.
///
/// Comparison spellings follow the API's timestamp operators: `after` and
/// `before` rather than `gt` / `lt`.
#[derive(Debug)]
pub struct TimestampFilter<R: FilterTarget> {
    target: R,
    field: ParamPath,
}

impl<R: FilterTarget> TimestampFilter<R> {
    /// Creates a filter for `field` on `target`.
    pub fn new(target: R, field: impl Into<ParamPath>) -> Self {
        Self {
            target,
            field: field.into(),
        }
    }

    /// Matches timestamps equal to `value` (wire operator `on`).
    #[must_use]
    pub fn on(self, value: chrono::DateTime<chrono::Utc>) -> R {
        push(self.target, &self.field, "on", ParamValue::Timestamp(value))
    }

    /// Matches timestamps strictly after `value`.
    #[must_use]
    pub fn after(self, value: chrono::DateTime<chrono::Utc>) -> R {
        push(
            self.target,
            &self.field,
            "after",
            ParamValue::Timestamp(value),
        )
    }

    /// Matches timestamps strictly before `value`.
    #[must_use]
    pub fn before(self, value: chrono::DateTime<chrono::Utc>) -> R {
        push(
            self.target,
            &self.field,
            "before",
            ParamValue::Timestamp(value),
        )
    }

    /// Matches timestamps in the inclusive range `start..=end`.
    #[must_use]
    pub fn between(self, start: chrono::DateTime<chrono::Utc>, end: chrono::DateTime<chrono::Utc>) -> R {
        push(
            self.target,
            &self.field,
            "between",
            range(ParamValue::Timestamp(start), ParamValue::Timestamp(end)),
        )
    }

    /// Matches on whether the field has any value at all.
    #[must_use]
    pub fn is_present(self, present: bool) -> R {
        push(
            self.target,
            &self.field,
            "is_present",
            ParamValue::Bool(present),
        )
    }
}

/// Filter over a boolean field. Equality is the only supported operator.
#[derive(Debug)]
pub struct BooleanFilter<R: FilterTarget> {
    target: R,
    field: ParamPath,
}

impl<R: FilterTarget> BooleanFilter<R> {
    /// Creates a filter for `field` on `target`.
    pub fn new(target: R, field: impl Into<ParamPath>) -> Self {
        Self {
            target,
            field: field.into(),
        }
    }

    /// Matches values equal to `value`.
    #[must_use]
    pub fn is(self, value: bool) -> R {
        push(self.target, &self.field, "is", ParamValue::Bool(value))
    }
}

/// Sort direction for [`SortFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

impl SortOrder {
    const fn token(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort selector for list requests.
///
/// Sorting inverts the usual pair layout: the direction is the sub-key and
/// the field is the value, as in `sort_by[asc]=created_at`.
#[derive(Debug)]
pub struct SortFilter<R: FilterTarget> {
    target: R,
    field: String,
}

impl<R: FilterTarget> SortFilter<R> {
    /// Creates a sort selector for `field` on `target`.
    pub fn new(target: R, field: impl Into<String>) -> Self {
        Self {
            target,
            field: field.into(),
        }
    }

    /// Sorts ascending by this field.
    #[must_use]
    pub fn asc(self) -> R {
        self.order(SortOrder::Asc)
    }

    /// Sorts descending by this field.
    #[must_use]
    pub fn desc(self) -> R {
        self.order(SortOrder::Desc)
    }

    /// Sorts by this field in the given direction.
    #[must_use]
    pub fn order(mut self, order: SortOrder) -> R {
        self.target.params_mut().add(
            ParamPath::root("sort_by").key(order.token()),
            ParamValue::Str(self.field),
        );
        self.target
    }
}

fn range(min: impl Into<ParamValue>, max: impl Into<ParamValue>) -> ParamValue {
    let elements: Vec<Value> = [min.into(), max.into()]
        .iter()
        .filter_map(ParamValue::to_json_element)
        .collect();
    ParamValue::List(elements)
}

//! Response envelopes for REST operations.
//!
//! Successful retrieve and mutation calls answer with an envelope document
//! keying each returned resource by its type, such as
//! `{"payment_source": {...}, "customer": {...}}`. [`ResourceResult`]
//! wraps that envelope and extracts typed resources on demand. List calls
//! answer with `{"list": [...], "next_offset": "..."}`; [`ListResult`]
//! wraps one such page.
//!
//! # Example
//!
//! ```rust
//! use chargebee_api::rest::ResourceResult;
//!
//! let body = br#"{
//!     "payment_source": {"id": "pm_1", "status": "valid", "customer_id": "cus_1"},
//!     "customer": {"id": "cus_1"}
//! }"#;
//!
//! let result = ResourceResult::from_json(body).unwrap();
//! let source = result.payment_source().unwrap();
//! let customer = result.customer().unwrap();
//!
//! assert_eq!(source.id().unwrap(), "pm_1");
//! assert_eq!(customer.id().unwrap(), "cus_1");
//! ```

use std::ops::Deref;

use crate::rest::resource::{ApiResource, ResourceModel};
use crate::rest::resources::{Customer, PaymentSource};
use crate::wire::{DecodeError, WireObject};

/// One decoded response envelope.
///
/// An envelope may carry several resources at once; a payment source
/// mutation returns both the `payment_source` and its updated `customer`.
/// Accessors extract whichever entries the caller needs and leave the
/// rest untouched.
#[derive(Debug, Clone)]
pub struct ResourceResult {
    doc: WireObject,
}

impl ResourceResult {
    /// Decodes an envelope payload.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Parse`] if the bytes are not a JSON object.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self {
            doc: WireObject::parse(bytes)?,
        })
    }

    /// Wraps an already-decoded envelope document.
    pub(crate) const fn from_object(doc: WireObject) -> Self {
        Self { doc }
    }

    /// Extracts the envelope entry stored under `T::KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldAbsent`] if the envelope carries no
    /// such entry.
    pub fn resource<T: ApiResource>(&self) -> Result<T, DecodeError> {
        self.opt_resource::<T>()?
            .ok_or_else(|| self.doc.absent(T::KEY))
    }

    /// Extracts the envelope entry stored under `T::KEY`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the entry is not an object.
    pub fn opt_resource<T: ApiResource>(&self) -> Result<Option<T>, DecodeError> {
        Ok(self
            .doc
            .object_value(T::KEY)?
            .map(|doc| T::from_model(ResourceModel::from_object(doc))))
    }

    /// Extracts the `payment_source` entry.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldAbsent`] if the envelope carries none.
    pub fn payment_source(&self) -> Result<PaymentSource, DecodeError> {
        self.resource()
    }

    /// Extracts the `customer` entry.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldAbsent`] if the envelope carries none.
    pub fn customer(&self) -> Result<Customer, DecodeError> {
        self.resource()
    }

    /// Returns whether the envelope carries an entry under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.doc.contains_key(key)
    }
}

/// One decoded page of a list response.
///
/// Entries stay in payload order. The page derefs to its entry slice, so
/// slice methods work on it directly.
#[derive(Debug, Clone)]
pub struct ListResult {
    entries: Vec<ResourceResult>,
    next_offset: Option<String>,
}

impl ListResult {
    /// Decodes a list page payload.
    ///
    /// An absent or empty `next_offset` means the listing is complete.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the payload is malformed or the `list`
    /// field is not an array of envelope objects.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        let doc = WireObject::parse(bytes)?;
        let entries = doc
            .array_value("list")?
            .into_iter()
            .map(ResourceResult::from_object)
            .collect();
        let next_offset = doc.str_value("next_offset")?.filter(|s| !s.is_empty());
        Ok(Self {
            entries,
            next_offset,
        })
    }

    /// Returns the page's envelope entries in payload order.
    #[must_use]
    pub fn entries(&self) -> &[ResourceResult] {
        &self.entries
    }

    /// Consumes the page and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ResourceResult> {
        self.entries
    }

    /// Returns the continuation cursor for the next page, if any.
    #[must_use]
    pub fn next_offset(&self) -> Option<&str> {
        self.next_offset.as_deref()
    }
}

/// Provides slice access to the page entries.
impl Deref for ListResult {
    type Target = [ResourceResult];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

// Verify envelope types are Send + Sync at compile time
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResult>();
    assert_send_sync::<ListResult>();
};

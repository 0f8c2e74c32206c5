//! Typed access to decoded resource payloads.
//!
//! API responses decode into ordered [`WireObject`] documents before any
//! typed resource sees them. [`ResourceModel`] wraps one such document and
//! layers per-type field access on top: `req_*` accessors for fields the
//! API always sends and `opt_*` accessors for fields that may be absent.
//! Concrete resources such as `PaymentSource` hold a `ResourceModel` and
//! expose named accessors that delegate to it, so a field the caller never
//! touches is never validated.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct holding a [`ResourceModel`]
//! 2. Implement [`ApiResource`] with the envelope key the API uses
//! 3. Add named accessors that delegate to the model's typed getters
//!
//! # Example
//!
//! ```rust
//! use chargebee_api::rest::{ApiResource, ResourceModel};
//! use chargebee_api::wire::DecodeError;
//!
//! #[derive(Debug, Clone)]
//! pub struct Coupon {
//!     model: ResourceModel,
//! }
//!
//! impl ApiResource for Coupon {
//!     const KEY: &'static str = "coupon";
//!
//!     fn from_model(model: ResourceModel) -> Self {
//!         Self { model }
//!     }
//!
//!     fn model(&self) -> &ResourceModel {
//!         &self.model
//!     }
//! }
//!
//! impl Coupon {
//!     pub fn id(&self) -> Result<String, DecodeError> {
//!         self.model.req_str("id")
//!     }
//! }
//!
//! let coupon = Coupon::from_model(ResourceModel::from_json(
//!     br#"{"id":"summer10","discount_percentage":10}"#,
//! ).unwrap());
//! assert_eq!(coupon.id().unwrap(), "summer10");
//! ```

use chrono::{DateTime, Utc};

use crate::wire::{DecodeError, WireEnum, WireObject};

/// A typed view over one decoded resource payload.
///
/// Fields stay generic until an accessor converts them. `req_*` accessors
/// fail with [`DecodeError::FieldAbsent`] when the field is missing or
/// null; `opt_*` accessors return `None` instead. Both fail with
/// [`DecodeError::TypeMismatch`] when the wire value has the wrong shape.
#[derive(Debug, Clone)]
pub struct ResourceModel {
    doc: WireObject,
}

impl ResourceModel {
    /// Decodes a bare resource payload.
    ///
    /// Useful for payloads that arrive outside a request cycle, such as
    /// webhook event content.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Parse`] if the bytes are not a JSON object.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self {
            doc: WireObject::parse(bytes)?,
        })
    }

    /// Wraps an already-decoded document.
    pub(crate) const fn from_object(doc: WireObject) -> Self {
        Self { doc }
    }

    /// Returns the underlying ordered document.
    ///
    /// The escape hatch for fields the typed accessors do not cover, such
    /// as fields added by newer API versions.
    #[must_use]
    pub const fn document(&self) -> &WireObject {
        &self.doc
    }

    /// Extracts a required text field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldAbsent`] if the field is missing.
    pub fn req_str(&self, key: &str) -> Result<String, DecodeError> {
        self.doc
            .str_value(key)?
            .ok_or_else(|| self.doc.absent(key))
    }

    /// Extracts an optional text field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is a container.
    pub fn opt_str(&self, key: &str) -> Result<Option<String>, DecodeError> {
        self.doc.str_value(key)
    }

    /// Extracts a required integer field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldAbsent`] if the field is missing.
    pub fn req_i64(&self, key: &str) -> Result<i64, DecodeError> {
        self.doc
            .i64_value(key)?
            .ok_or_else(|| self.doc.absent(key))
    }

    /// Extracts an optional integer field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is not an
    /// integer.
    pub fn opt_i64(&self, key: &str) -> Result<Option<i64>, DecodeError> {
        self.doc.i64_value(key)
    }

    /// Extracts a required floating-point field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldAbsent`] if the field is missing.
    pub fn req_f64(&self, key: &str) -> Result<f64, DecodeError> {
        self.doc
            .f64_value(key)?
            .ok_or_else(|| self.doc.absent(key))
    }

    /// Extracts an optional floating-point field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is not numeric.
    pub fn opt_f64(&self, key: &str) -> Result<Option<f64>, DecodeError> {
        self.doc.f64_value(key)
    }

    /// Extracts a required boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldAbsent`] if the field is missing.
    pub fn req_bool(&self, key: &str) -> Result<bool, DecodeError> {
        self.doc
            .bool_value(key)?
            .ok_or_else(|| self.doc.absent(key))
    }

    /// Extracts an optional boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is not a boolean.
    pub fn opt_bool(&self, key: &str) -> Result<Option<bool>, DecodeError> {
        self.doc.bool_value(key)
    }

    /// Extracts a required epoch-second timestamp field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldAbsent`] if the field is missing.
    pub fn req_timestamp(&self, key: &str) -> Result<DateTime<Utc>, DecodeError> {
        self.doc
            .timestamp_value(key)?
            .ok_or_else(|| self.doc.absent(key))
    }

    /// Extracts an optional epoch-second timestamp field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is not an
    /// in-range epoch-second integer.
    pub fn opt_timestamp(&self, key: &str) -> Result<Option<DateTime<Utc>>, DecodeError> {
        self.doc.timestamp_value(key)
    }

    /// Extracts a required enum field.
    ///
    /// Decoding never fails on the token itself: unknown tokens become the
    /// enum's catch-all variant.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldAbsent`] if the field is missing.
    pub fn req_enum<E: WireEnum>(&self, key: &str) -> Result<E, DecodeError> {
        self.opt_enum(key)?.ok_or_else(|| self.doc.absent(key))
    }

    /// Extracts an optional enum field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is a container.
    pub fn opt_enum<E: WireEnum>(&self, key: &str) -> Result<Option<E>, DecodeError> {
        Ok(self
            .doc
            .str_value(key)?
            .map(|token| E::from_token(&token)))
    }

    /// Extracts a nested sub-resource stored under `key`.
    ///
    /// Returns `None` when the field is absent. Resources with several
    /// polymorphic sub-objects, such as a payment source that is either a
    /// card or a bank account, expose one accessor per variant and let the
    /// absent ones return `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is not an object.
    pub fn sub_resource<T: ApiResource>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        Ok(self
            .doc
            .object_value(key)?
            .map(|doc| T::from_model(Self::from_object(doc))))
    }

    /// Extracts a list of sub-resources stored under `key`.
    ///
    /// An absent field yields an empty vector, preserving payload order
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value is not an array
    /// of objects.
    pub fn sub_resource_list<T: ApiResource>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        Ok(self
            .doc
            .array_value(key)?
            .into_iter()
            .map(|doc| T::from_model(Self::from_object(doc)))
            .collect())
    }
}

/// A typed API resource backed by a [`ResourceModel`].
///
/// `KEY` names the field the API stores this resource under, both in
/// response envelopes (`{"payment_source": {...}}`) and inside parent
/// resources (`{"card": {...}}`).
pub trait ApiResource: Sized {
    /// Field name the API stores this resource under.
    const KEY: &'static str;

    /// Wraps a decoded model in the typed resource.
    fn from_model(model: ResourceModel) -> Self;

    /// Returns the model backing this resource.
    fn model(&self) -> &ResourceModel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    crate::wire_enum! {
        /// Exercise enum for model accessors.
        pub enum MockState {
            Active => "active",
            Archived => "archived",
        }
    }

    #[derive(Debug, Clone)]
    struct MockAddress {
        model: ResourceModel,
    }

    impl ApiResource for MockAddress {
        const KEY: &'static str = "address";

        fn from_model(model: ResourceModel) -> Self {
            Self { model }
        }

        fn model(&self) -> &ResourceModel {
            &self.model
        }
    }

    fn create_test_model() -> ResourceModel {
        ResourceModel::from_json(
            br#"{
                "id": "cus_1",
                "net_term_days": 30,
                "exchange_rate": 1.25,
                "auto_collection": true,
                "created_at": 1609459200,
                "state": "active",
                "address": {"city": "Lisbon", "zip": "1000"},
                "contacts": [{"email": "a@example.com"}, {"email": "b@example.com"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_req_accessors_extract_present_fields() {
        let model = create_test_model();

        assert_eq!(model.req_str("id").unwrap(), "cus_1");
        assert_eq!(model.req_i64("net_term_days").unwrap(), 30);
        assert!((model.req_f64("exchange_rate").unwrap() - 1.25).abs() < f64::EPSILON);
        assert!(model.req_bool("auto_collection").unwrap());
        assert_eq!(
            model.req_timestamp("created_at").unwrap(),
            Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_req_accessor_fails_on_absent_field() {
        let model = create_test_model();

        let err = model.req_str("vat_number").unwrap_err();
        assert_eq!(
            err,
            DecodeError::FieldAbsent {
                field: "vat_number".to_string(),
            }
        );
    }

    #[test]
    fn test_opt_accessor_returns_none_on_absent_field() {
        let model = create_test_model();

        assert_eq!(model.opt_str("vat_number").unwrap(), None);
        assert_eq!(model.opt_i64("billing_date").unwrap(), None);
        assert_eq!(model.opt_f64("balance").unwrap(), None);
        assert_eq!(model.opt_bool("deleted").unwrap(), None);
        assert_eq!(model.opt_timestamp("updated_at").unwrap(), None);
    }

    #[test]
    fn test_enum_accessor_decodes_tokens() {
        let model = create_test_model();

        assert_eq!(model.req_enum::<MockState>("state").unwrap(), MockState::Active);
        assert_eq!(model.opt_enum::<MockState>("missing").unwrap(), None);
    }

    #[test]
    fn test_enum_accessor_degrades_unknown_tokens() {
        let model = ResourceModel::from_json(br#"{"state":"hibernating"}"#).unwrap();

        assert_eq!(
            model.req_enum::<MockState>("state").unwrap(),
            MockState::Unrecognized
        );
    }

    #[test]
    fn test_sub_resource_extraction() {
        let model = create_test_model();

        let address: MockAddress = model.sub_resource("address").unwrap().unwrap();
        assert_eq!(address.model().req_str("city").unwrap(), "Lisbon");
    }

    #[test]
    fn test_sub_resource_absent_is_none() {
        let model = create_test_model();

        let shipping: Option<MockAddress> = model.sub_resource("shipping_address").unwrap();
        assert!(shipping.is_none());
    }

    #[test]
    fn test_sub_resource_errors_carry_nested_paths() {
        let model = create_test_model();

        let address: MockAddress = model.sub_resource("address").unwrap().unwrap();
        let err = address.model().req_str("country").unwrap_err();
        assert_eq!(
            err,
            DecodeError::FieldAbsent {
                field: "address.country".to_string(),
            }
        );
    }

    #[test]
    fn test_sub_resource_list_preserves_order() {
        let model = create_test_model();

        let contacts: Vec<MockAddress> = model.sub_resource_list("contacts").unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(
            contacts[0].model().req_str("email").unwrap(),
            "a@example.com"
        );
        assert_eq!(
            contacts[1].model().req_str("email").unwrap(),
            "b@example.com"
        );
    }

    #[test]
    fn test_sub_resource_list_absent_is_empty() {
        let model = create_test_model();

        let none: Vec<MockAddress> = model.sub_resource_list("referral_urls").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_document_exposes_unknown_fields() {
        let model = ResourceModel::from_json(br#"{"id":"cus_1","field_from_v9":"kept"}"#).unwrap();

        assert!(model.document().contains_key("field_from_v9"));
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let model = create_test_model();

        assert!(matches!(
            model.req_i64("id"),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }
}

//! Customer resource implementation.
//!
//! Customers own payment sources and subscriptions. This module covers
//! the customer record itself: identity fields, collection settings, the
//! nested billing address, and the contact list.
//!
//! # Operations
//!
//! - [`Customer::create`] - Create a customer
//! - [`Customer::retrieve`] - Fetch one customer
//! - [`Customer::update`] - Update identity and collection fields
//! - [`Customer::list`] - List customers with filters and sorting
//! - [`Customer::delete`] - Delete the customer
//!
//! # Example
//!
//! ```rust,ignore
//! use chargebee_api::rest::resources::Customer;
//! use chrono::{Duration, Utc};
//!
//! // Customers created in the last day, oldest first
//! let mut entries = Customer::list()
//!     .created_at().after(Utc::now() - Duration::days(1))
//!     .sort_by_created_at().asc()
//!     .paginate(&client);
//! while let Some(entry) = entries.next().await? {
//!     println!("- {}", entry.customer()?.id()?);
//! }
//! ```

use chrono::{DateTime, Utc};

use crate::clients::{HttpClient, HttpMethod};
use crate::params::{
    EnumFilter, FilterTarget, ParamPath, ParamValue, Params, SortFilter, StringFilter,
    TimestampFilter,
};
use crate::rest::errors::Error;
use crate::rest::pager::ListIterator;
use crate::rest::request::{ListRequest, Request};
use crate::rest::resource::{ApiResource, ResourceModel};
use crate::rest::resources::enums::AutoCollection;
use crate::rest::result::{ListResult, ResourceResult};
use crate::wire::DecodeError;

/// A customer record.
#[derive(Debug, Clone)]
pub struct Customer {
    model: ResourceModel,
}

impl ApiResource for Customer {
    const KEY: &'static str = "customer";

    fn from_model(model: ResourceModel) -> Self {
        Self { model }
    }

    fn model(&self) -> &ResourceModel {
        &self.model
    }
}

impl Customer {
    /// Identifier of the customer.
    pub fn id(&self) -> Result<String, DecodeError> {
        self.model.req_str("id")
    }

    /// First name.
    pub fn first_name(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("first_name")
    }

    /// Last name.
    pub fn last_name(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("last_name")
    }

    /// Email address.
    pub fn email(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("email")
    }

    /// Phone number.
    pub fn phone(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("phone")
    }

    /// Company name.
    pub fn company(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("company")
    }

    /// Whether charges are collected automatically.
    pub fn auto_collection(&self) -> Result<AutoCollection, DecodeError> {
        self.model.req_enum("auto_collection")
    }

    /// Days the customer has to settle an invoice.
    pub fn net_term_days(&self) -> Result<i64, DecodeError> {
        self.model.req_i64("net_term_days")
    }

    /// Preferred currency for this customer's invoices.
    pub fn preferred_currency_code(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("preferred_currency_code")
    }

    /// When the customer was created.
    pub fn created_at(&self) -> Result<DateTime<Utc>, DecodeError> {
        self.model.req_timestamp("created_at")
    }

    /// When the customer was last changed.
    pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>, DecodeError> {
        self.model.opt_timestamp("updated_at")
    }

    /// Whether the record has been deleted.
    pub fn deleted(&self) -> Result<bool, DecodeError> {
        self.model.req_bool("deleted")
    }

    /// Billing address on file.
    pub fn billing_address(&self) -> Result<Option<BillingAddress>, DecodeError> {
        self.model.sub_resource("billing_address")
    }

    /// Additional contacts, in payload order.
    pub fn contacts(&self) -> Result<Vec<Contact>, DecodeError> {
        self.model.sub_resource_list("contacts")
    }
}

/// Billing address nested inside a customer.
#[derive(Debug, Clone)]
pub struct BillingAddress {
    model: ResourceModel,
}

impl ApiResource for BillingAddress {
    const KEY: &'static str = "billing_address";

    fn from_model(model: ResourceModel) -> Self {
        Self { model }
    }

    fn model(&self) -> &ResourceModel {
        &self.model
    }
}

impl BillingAddress {
    /// Address line one.
    pub fn line1(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("line1")
    }

    /// Address line two.
    pub fn line2(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("line2")
    }

    /// City.
    pub fn city(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("city")
    }

    /// State or region name.
    pub fn state(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("state")
    }

    /// Country code.
    pub fn country(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("country")
    }

    /// Postal code.
    pub fn zip(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("zip")
    }
}

/// One entry of a customer's contact list.
#[derive(Debug, Clone)]
pub struct Contact {
    model: ResourceModel,
}

impl ApiResource for Contact {
    const KEY: &'static str = "contact";

    fn from_model(model: ResourceModel) -> Self {
        Self { model }
    }

    fn model(&self) -> &ResourceModel {
        &self.model
    }
}

impl Contact {
    /// Identifier of the contact.
    pub fn id(&self) -> Result<String, DecodeError> {
        self.model.req_str("id")
    }

    /// Contact email address.
    pub fn email(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("email")
    }

    /// Contact first name.
    pub fn first_name(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("first_name")
    }

    /// Contact last name.
    pub fn last_name(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("last_name")
    }
}

// Operations

impl Customer {
    /// Creates a customer. Every field is optional; the API generates an
    /// identifier when none is supplied.
    #[must_use]
    pub fn create() -> CreateCustomerRequest {
        CreateCustomerRequest::new()
    }

    /// Fetches one customer.
    #[must_use]
    pub fn retrieve(id: impl Into<String>) -> Request {
        Request::new(HttpMethod::Get, ["customers".into(), id.into()])
    }

    /// Updates identity and collection fields.
    #[must_use]
    pub fn update(id: impl Into<String>) -> UpdateCustomerRequest {
        UpdateCustomerRequest::new(id)
    }

    /// Lists customers.
    #[must_use]
    pub fn list() -> CustomerListRequest {
        CustomerListRequest::new()
    }

    /// Deletes the customer. Deletion is a `POST` like every mutation.
    #[must_use]
    pub fn delete(id: impl Into<String>) -> Request {
        Request::new(
            HttpMethod::Post,
            ["customers".into(), id.into(), "delete".into()],
        )
    }
}

/// Builder for [`Customer::create`].
#[derive(Debug)]
pub struct CreateCustomerRequest {
    inner: Request,
}

impl CreateCustomerRequest {
    fn new() -> Self {
        Self {
            inner: Request::new(HttpMethod::Post, ["customers"]),
        }
    }

    /// Caller-chosen identifier for the new customer.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.params_mut().add("id", id.into());
        self
    }

    /// First name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.inner.params_mut().add("first_name", first_name.into());
        self
    }

    /// Last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.inner.params_mut().add("last_name", last_name.into());
        self
    }

    /// Email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.inner.params_mut().add("email", email.into());
        self
    }

    /// Phone number.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.inner.params_mut().add("phone", phone.into());
        self
    }

    /// Company name.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.inner.params_mut().add("company", company.into());
        self
    }

    /// Whether charges are collected automatically.
    #[must_use]
    pub fn auto_collection(mut self, auto_collection: AutoCollection) -> Self {
        self.inner
            .params_mut()
            .add("auto_collection", ParamValue::from_enum(&auto_collection));
        self
    }

    /// Days the customer has to settle an invoice.
    #[must_use]
    pub fn net_term_days(mut self, net_term_days: i32) -> Self {
        self.inner.params_mut().add("net_term_days", net_term_days);
        self
    }

    /// Preferred currency for this customer's invoices.
    #[must_use]
    pub fn preferred_currency_code(mut self, code: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add("preferred_currency_code", code.into());
        self
    }

    /// Billing address line one, under the `billing_address` group.
    #[must_use]
    pub fn billing_address_line1(mut self, line1: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("billing_address").key("line1"), line1.into());
        self
    }

    /// Billing address city.
    #[must_use]
    pub fn billing_address_city(mut self, city: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("billing_address").key("city"), city.into());
        self
    }

    /// Billing address country code.
    #[must_use]
    pub fn billing_address_country(mut self, country: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("billing_address").key("country"),
            country.into(),
        );
        self
    }

    /// Billing address postal code.
    #[must_use]
    pub fn billing_address_zip(mut self, zip: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("billing_address").key("zip"), zip.into());
        self
    }

    /// Sets the idempotency key, making the mutation safe to retry.
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.inner = self.inner.idempotency_key(key);
        self
    }

    /// Sets the total attempt count for retryable statuses.
    #[must_use]
    pub fn tries(mut self, tries: u32) -> Self {
        self.inner = self.inner.tries(tries);
        self
    }

    /// Sends the request and decodes the response envelope.
    ///
    /// # Errors
    ///
    /// Same contract as [`Request::send`].
    pub async fn send(&mut self, client: &HttpClient) -> Result<ResourceResult, Error> {
        self.inner.send(client).await
    }
}

/// Builder for [`Customer::update`].
#[derive(Debug)]
pub struct UpdateCustomerRequest {
    inner: Request,
}

impl UpdateCustomerRequest {
    fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Request::new(HttpMethod::Post, ["customers".into(), id.into()]),
        }
    }

    /// First name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.inner.params_mut().add("first_name", first_name.into());
        self
    }

    /// Last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.inner.params_mut().add("last_name", last_name.into());
        self
    }

    /// Email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.inner.params_mut().add("email", email.into());
        self
    }

    /// Phone number.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.inner.params_mut().add("phone", phone.into());
        self
    }

    /// Company name.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.inner.params_mut().add("company", company.into());
        self
    }

    /// Whether charges are collected automatically.
    #[must_use]
    pub fn auto_collection(mut self, auto_collection: AutoCollection) -> Self {
        self.inner
            .params_mut()
            .add("auto_collection", ParamValue::from_enum(&auto_collection));
        self
    }

    /// Days the customer has to settle an invoice.
    #[must_use]
    pub fn net_term_days(mut self, net_term_days: i32) -> Self {
        self.inner.params_mut().add("net_term_days", net_term_days);
        self
    }

    /// Preferred currency for this customer's invoices.
    #[must_use]
    pub fn preferred_currency_code(mut self, code: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add("preferred_currency_code", code.into());
        self
    }

    /// Sets the idempotency key, making the mutation safe to retry.
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.inner = self.inner.idempotency_key(key);
        self
    }

    /// Sets the total attempt count for retryable statuses.
    #[must_use]
    pub fn tries(mut self, tries: u32) -> Self {
        self.inner = self.inner.tries(tries);
        self
    }

    /// Sends the request and decodes the response envelope.
    ///
    /// # Errors
    ///
    /// Same contract as [`Request::send`].
    pub async fn send(&mut self, client: &HttpClient) -> Result<ResourceResult, Error> {
        self.inner.send(client).await
    }
}

/// Builder for [`Customer::list`].
#[derive(Debug)]
pub struct CustomerListRequest {
    inner: ListRequest,
}

impl CustomerListRequest {
    fn new() -> Self {
        Self {
            inner: ListRequest::new(["customers"]),
        }
    }

    /// Filters by identifier.
    #[must_use]
    pub fn id(self) -> StringFilter<Self> {
        StringFilter::new(self, "id")
    }

    /// Filters by email address.
    #[must_use]
    pub fn email(self) -> StringFilter<Self> {
        StringFilter::new(self, "email")
    }

    /// Filters by collection mode.
    #[must_use]
    pub fn auto_collection(self) -> EnumFilter<AutoCollection, Self> {
        EnumFilter::new(self, "auto_collection")
    }

    /// Filters by creation time.
    #[must_use]
    pub fn created_at(self) -> TimestampFilter<Self> {
        TimestampFilter::new(self, "created_at")
    }

    /// Filters by last change time.
    #[must_use]
    pub fn updated_at(self) -> TimestampFilter<Self> {
        TimestampFilter::new(self, "updated_at")
    }

    /// Sorts the listing by creation time.
    #[must_use]
    pub fn sort_by_created_at(self) -> SortFilter<Self> {
        SortFilter::new(self, "created_at")
    }

    /// Sorts the listing by last change time.
    #[must_use]
    pub fn sort_by_updated_at(self) -> SortFilter<Self> {
        SortFilter::new(self, "updated_at")
    }

    /// Caps the number of entries per page.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.inner = self.inner.limit(limit);
        self
    }

    /// Starts the listing at a continuation cursor from an earlier page.
    #[must_use]
    pub fn offset(mut self, offset: impl Into<String>) -> Self {
        self.inner = self.inner.offset(offset);
        self
    }

    /// Sends the request and decodes one page.
    ///
    /// # Errors
    ///
    /// Same contract as [`ListRequest::send`].
    pub async fn send(&mut self, client: &HttpClient) -> Result<ListResult, Error> {
        self.inner.send(client).await
    }

    /// Turns the request into a lazy page iterator.
    #[must_use]
    pub fn paginate(self, client: &HttpClient) -> ListIterator<'_> {
        self.inner.paginate(client)
    }
}

impl FilterTarget for CustomerListRequest {
    fn params_mut(&mut self) -> &mut Params {
        self.inner.params_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiEndpoint, ApiKey, ChargebeeConfig, SiteName};
    use chrono::TimeZone;
    use tokio_test::assert_ok;
    use wiremock::matchers::{body_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(endpoint: &str) -> HttpClient {
        let config = ChargebeeConfig::builder()
            .site(SiteName::new("test-site").unwrap())
            .api_key(ApiKey::new("test_key").unwrap())
            .endpoint(ApiEndpoint::new(endpoint).unwrap())
            .build()
            .unwrap();
        HttpClient::new(&config)
    }

    fn create_test_customer() -> Customer {
        Customer::from_model(
            ResourceModel::from_json(
                br#"{
                    "id": "cus_1",
                    "first_name": "Ada",
                    "email": "ada@example.com",
                    "auto_collection": "on",
                    "net_term_days": 0,
                    "created_at": 1609459200,
                    "deleted": false,
                    "billing_address": {"city": "Lisbon", "country": "PT"},
                    "contacts": [
                        {"id": "con_1", "email": "ops@example.com"},
                        {"id": "con_2", "email": "billing@example.com"}
                    ]
                }"#,
            )
            .unwrap(),
        )
    }

    fn create_test_envelope_body() -> serde_json::Value {
        serde_json::json!({
            "customer": {
                "id": "cus_1",
                "auto_collection": "on",
                "net_term_days": 0,
                "created_at": 1609459200,
                "deleted": false
            }
        })
    }

    #[test]
    fn test_field_accessors() {
        let customer = create_test_customer();

        assert_eq!(customer.id().unwrap(), "cus_1");
        assert_eq!(customer.first_name().unwrap().as_deref(), Some("Ada"));
        assert_eq!(customer.last_name().unwrap(), None);
        assert_eq!(
            customer.email().unwrap().as_deref(),
            Some("ada@example.com")
        );
        assert_eq!(customer.auto_collection().unwrap(), AutoCollection::On);
        assert_eq!(customer.net_term_days().unwrap(), 0);
        assert_eq!(
            customer.created_at().unwrap(),
            Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(customer.updated_at().unwrap(), None);
        assert!(!customer.deleted().unwrap());
    }

    #[test]
    fn test_billing_address_sub_resource() {
        let customer = create_test_customer();
        let address = customer.billing_address().unwrap().unwrap();

        assert_eq!(address.city().unwrap().as_deref(), Some("Lisbon"));
        assert_eq!(address.country().unwrap().as_deref(), Some("PT"));
        assert_eq!(address.line1().unwrap(), None);
    }

    #[test]
    fn test_contacts_keep_payload_order() {
        let customer = create_test_customer();
        let contacts = customer.contacts().unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].id().unwrap(), "con_1");
        assert_eq!(contacts[1].id().unwrap(), "con_2");
    }

    #[tokio::test]
    async fn test_create_sends_grouped_billing_address() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/customers"))
            .and(body_string(
                "first_name=Ada&email=ada%40example.com\
                 &billing_address%5Bcity%5D=Lisbon&billing_address%5Bcountry%5D=PT",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_test_envelope_body()))
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());
        let mut request = Customer::create()
            .first_name("Ada")
            .email("ada@example.com")
            .billing_address_city("Lisbon")
            .billing_address_country("PT");

        let result = request.send(&client).await.unwrap();
        assert_eq!(result.customer().unwrap().id().unwrap(), "cus_1");
    }

    #[tokio::test]
    async fn test_update_posts_to_identifier_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/customers/cus_1"))
            .and(body_string("auto_collection=off"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_test_envelope_body()))
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());
        let mut request = Customer::update("cus_1").auto_collection(AutoCollection::Off);

        assert_ok!(request.send(&client).await);
    }

    #[tokio::test]
    async fn test_list_timestamp_filter_and_sort() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customers"))
            .and(query_param("created_at[after]", "1609459200"))
            .and(query_param("sort_by[asc]", "created_at"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [create_test_envelope_body()]
            })))
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());
        let cutoff = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let mut request = Customer::list()
            .created_at()
            .after(cutoff)
            .sort_by_created_at()
            .asc();

        let page = request.send(&client).await.unwrap();
        assert_eq!(page.len(), 1);
    }

    #[tokio::test]
    async fn test_retrieve_and_delete_paths() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customers/cus_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_test_envelope_body()))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/customers/cus_1/delete"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_test_envelope_body()))
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());

        let result = Customer::retrieve("cus_1").send(&client).await.unwrap();
        assert_eq!(result.customer().unwrap().id().unwrap(), "cus_1");

        assert_ok!(Customer::delete("cus_1").send(&client).await);
    }
}

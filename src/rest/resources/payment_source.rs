//! PaymentSource resource implementation.
//!
//! A payment source is one stored payment instrument of a customer: a
//! card, a bank account, a PayPal billing agreement, or an Amazon Payments
//! agreement. The instrument details arrive as one nested sub-object per
//! kind, so for a given source exactly one of [`PaymentSource::card`],
//! [`PaymentSource::bank_account`], [`PaymentSource::amazon_payment`] and
//! [`PaymentSource::paypal`] returns a value.
//!
//! # Operations
//!
//! - [`PaymentSource::create_using_temp_token`] - Store an instrument from a gateway temp token
//! - [`PaymentSource::create_using_permanent_token`] - Store an instrument already vaulted at the gateway
//! - [`PaymentSource::create_card`] - Store raw card details
//! - [`PaymentSource::update_card`] - Update stored card details
//! - [`PaymentSource::retrieve`] - Fetch one payment source
//! - [`PaymentSource::list`] - List payment sources with filters
//! - [`PaymentSource::switch_gateway_account`] - Move the source to another gateway account
//! - [`PaymentSource::export_payment_source`] - Copy the source to another gateway account
//! - [`PaymentSource::delete`] - Delete the source
//!
//! # Example
//!
//! ```rust,ignore
//! use chargebee_api::rest::resources::{PaymentSource, PaymentSourceStatus};
//!
//! // Store a card for a customer
//! let result = PaymentSource::create_card()
//!     .customer_id("cus_123")
//!     .number("4111111111111111")
//!     .expiry_month(12)
//!     .expiry_year(2030)
//!     .cvv("100")
//!     .send(&client)
//!     .await?;
//! let source = result.payment_source()?;
//!
//! // Inspect the stored instrument
//! if let Some(card) = source.card()? {
//!     println!("card ending in {}", card.last4()?);
//! }
//!
//! // List only usable sources for the customer
//! let mut entries = PaymentSource::list()
//!     .customer_id().is("cus_123")
//!     .status().is_in(&[PaymentSourceStatus::Valid, PaymentSourceStatus::Expiring])
//!     .paginate(&client);
//! while let Some(entry) = entries.next().await? {
//!     println!("- {}", entry.payment_source()?.id()?);
//! }
//! ```

use crate::clients::{HttpClient, HttpMethod};
use crate::params::{EnumFilter, FilterTarget, ParamPath, ParamValue, Params, StringFilter};
use crate::rest::errors::Error;
use crate::rest::pager::ListIterator;
use crate::rest::request::{ListRequest, Request};
use crate::rest::resource::{ApiResource, ResourceModel};
use crate::rest::resources::enums::{Gateway, PaymentSourceType};
use crate::rest::result::{ListResult, ResourceResult};
use crate::wire::DecodeError;

crate::wire_enum! {
    /// Lifecycle status of a payment source.
    pub enum PaymentSourceStatus {
        Valid => "valid",
        Expiring => "expiring",
        Expired => "expired",
        Invalid => "invalid",
        PendingVerification => "pending_verification",
    }
}

crate::wire_enum! {
    /// Card network of a stored card.
    pub enum CardBrand {
        Visa => "visa",
        Mastercard => "mastercard",
        AmericanExpress => "american_express",
        Discover => "discover",
        Jcb => "jcb",
        DinersClub => "diners_club",
        Other => "other",
    }
}

crate::wire_enum! {
    /// How a stored card is funded.
    pub enum CardFundingType {
        Credit => "credit",
        Debit => "debit",
        Prepaid => "prepaid",
        NotKnown => "not_known",
        NotApplicable => "not_applicable",
    }
}

crate::wire_enum! {
    /// Kind of a direct-debit bank account.
    pub enum BankAccountType {
        Checking => "checking",
        Savings => "savings",
    }
}

/// A stored payment instrument of a customer.
#[derive(Debug, Clone)]
pub struct PaymentSource {
    model: ResourceModel,
}

impl ApiResource for PaymentSource {
    const KEY: &'static str = "payment_source";

    fn from_model(model: ResourceModel) -> Self {
        Self { model }
    }

    fn model(&self) -> &ResourceModel {
        &self.model
    }
}

impl PaymentSource {
    /// Identifier of the payment source.
    pub fn id(&self) -> Result<String, DecodeError> {
        self.model.req_str("id")
    }

    /// Customer this source belongs to.
    pub fn customer_id(&self) -> Result<String, DecodeError> {
        self.model.req_str("customer_id")
    }

    /// Kind of instrument, from the wire field `type`.
    pub fn source_type(&self) -> Result<PaymentSourceType, DecodeError> {
        self.model.req_enum("type")
    }

    /// Gateway-side reference for the stored instrument.
    pub fn reference_id(&self) -> Result<String, DecodeError> {
        self.model.req_str("reference_id")
    }

    /// Lifecycle status of the source.
    pub fn status(&self) -> Result<PaymentSourceStatus, DecodeError> {
        self.model.req_enum("status")
    }

    /// Gateway the source is stored with.
    pub fn gateway(&self) -> Result<Gateway, DecodeError> {
        self.model.req_enum("gateway")
    }

    /// Gateway account the source is stored under.
    pub fn gateway_account_id(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("gateway_account_id")
    }

    /// IP address the instrument was collected from.
    pub fn ip_address(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("ip_address")
    }

    /// Issuing country reported by the gateway.
    pub fn issuing_country(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("issuing_country")
    }

    /// Card details, present when the source is a card.
    pub fn card(&self) -> Result<Option<Card>, DecodeError> {
        self.model.sub_resource("card")
    }

    /// Bank account details, present for direct-debit sources.
    pub fn bank_account(&self) -> Result<Option<BankAccount>, DecodeError> {
        self.model.sub_resource("bank_account")
    }

    /// Amazon Payments agreement details, when applicable.
    pub fn amazon_payment(&self) -> Result<Option<AmazonPayment>, DecodeError> {
        self.model.sub_resource("amazon_payment")
    }

    /// PayPal agreement details, when applicable.
    pub fn paypal(&self) -> Result<Option<Paypal>, DecodeError> {
        self.model.sub_resource("paypal")
    }
}

/// Card details nested inside a payment source.
#[derive(Debug, Clone)]
pub struct Card {
    model: ResourceModel,
}

impl ApiResource for Card {
    const KEY: &'static str = "card";

    fn from_model(model: ResourceModel) -> Self {
        Self { model }
    }

    fn model(&self) -> &ResourceModel {
        &self.model
    }
}

impl Card {
    /// Cardholder first name.
    pub fn first_name(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("first_name")
    }

    /// Cardholder last name.
    pub fn last_name(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("last_name")
    }

    /// Issuer identification number, the first six card digits.
    pub fn iin(&self) -> Result<String, DecodeError> {
        self.model.req_str("iin")
    }

    /// Last four card digits.
    pub fn last4(&self) -> Result<String, DecodeError> {
        self.model.req_str("last4")
    }

    /// Card network.
    pub fn brand(&self) -> Result<CardBrand, DecodeError> {
        self.model.req_enum("brand")
    }

    /// Funding type of the card.
    pub fn funding_type(&self) -> Result<CardFundingType, DecodeError> {
        self.model.req_enum("funding_type")
    }

    /// Expiry month, 1 through 12.
    pub fn expiry_month(&self) -> Result<i64, DecodeError> {
        self.model.req_i64("expiry_month")
    }

    /// Four-digit expiry year.
    pub fn expiry_year(&self) -> Result<i64, DecodeError> {
        self.model.req_i64("expiry_year")
    }

    /// Billing address line one.
    pub fn billing_addr1(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("billing_addr1")
    }

    /// Billing address line two.
    pub fn billing_addr2(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("billing_addr2")
    }

    /// Billing address city.
    pub fn billing_city(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("billing_city")
    }

    /// Billing address state code.
    pub fn billing_state_code(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("billing_state_code")
    }

    /// Billing address state name.
    pub fn billing_state(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("billing_state")
    }

    /// Billing address country code.
    pub fn billing_country(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("billing_country")
    }

    /// Billing address postal code.
    pub fn billing_zip(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("billing_zip")
    }

    /// Card number with all but the last four digits masked.
    pub fn masked_number(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("masked_number")
    }
}

/// Bank account details nested inside a payment source.
#[derive(Debug, Clone)]
pub struct BankAccount {
    model: ResourceModel,
}

impl ApiResource for BankAccount {
    const KEY: &'static str = "bank_account";

    fn from_model(model: ResourceModel) -> Self {
        Self { model }
    }

    fn model(&self) -> &ResourceModel {
        &self.model
    }
}

impl BankAccount {
    /// Account holder name.
    pub fn name_on_account(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("name_on_account")
    }

    /// Name of the bank.
    pub fn bank_name(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("bank_name")
    }

    /// Direct-debit mandate reference.
    pub fn mandate_id(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("mandate_id")
    }

    /// Kind of bank account.
    pub fn account_type(&self) -> Result<Option<BankAccountType>, DecodeError> {
        self.model.opt_enum("account_type")
    }
}

/// Amazon Payments agreement details nested inside a payment source.
#[derive(Debug, Clone)]
pub struct AmazonPayment {
    model: ResourceModel,
}

impl ApiResource for AmazonPayment {
    const KEY: &'static str = "amazon_payment";

    fn from_model(model: ResourceModel) -> Self {
        Self { model }
    }

    fn model(&self) -> &ResourceModel {
        &self.model
    }
}

impl AmazonPayment {
    /// Buyer email on the agreement.
    pub fn email(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("email")
    }

    /// Billing agreement identifier.
    pub fn agreement_id(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("agreement_id")
    }
}

/// PayPal agreement details nested inside a payment source.
#[derive(Debug, Clone)]
pub struct Paypal {
    model: ResourceModel,
}

impl ApiResource for Paypal {
    const KEY: &'static str = "paypal";

    fn from_model(model: ResourceModel) -> Self {
        Self { model }
    }

    fn model(&self) -> &ResourceModel {
        &self.model
    }
}

impl Paypal {
    /// Buyer email on the agreement.
    pub fn email(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("email")
    }

    /// Billing agreement identifier.
    pub fn agreement_id(&self) -> Result<Option<String>, DecodeError> {
        self.model.opt_str("agreement_id")
    }
}

// Operations

impl PaymentSource {
    /// Stores an instrument from a single-use gateway token.
    #[must_use]
    pub fn create_using_temp_token() -> CreateUsingTempTokenRequest {
        CreateUsingTempTokenRequest::new()
    }

    /// Stores an instrument already vaulted at the gateway.
    #[must_use]
    pub fn create_using_permanent_token() -> CreateUsingPermanentTokenRequest {
        CreateUsingPermanentTokenRequest::new()
    }

    /// Stores raw card details.
    #[must_use]
    pub fn create_card() -> CreateCardRequest {
        CreateCardRequest::new()
    }

    /// Updates card details of an existing card source.
    #[must_use]
    pub fn update_card(id: impl Into<String>) -> UpdateCardRequest {
        UpdateCardRequest::new(id)
    }

    /// Fetches one payment source.
    #[must_use]
    pub fn retrieve(id: impl Into<String>) -> Request {
        Request::new(HttpMethod::Get, ["payment_sources".into(), id.into()])
    }

    /// Lists payment sources.
    #[must_use]
    pub fn list() -> PaymentSourceListRequest {
        PaymentSourceListRequest::new()
    }

    /// Moves the source to another account of the same gateway.
    #[must_use]
    pub fn switch_gateway_account(id: impl Into<String>) -> SwitchGatewayAccountRequest {
        SwitchGatewayAccountRequest::new(id)
    }

    /// Copies the source to an account of another gateway.
    #[must_use]
    pub fn export_payment_source(id: impl Into<String>) -> ExportPaymentSourceRequest {
        ExportPaymentSourceRequest::new(id)
    }

    /// Deletes the source. Deletion is a `POST` like every mutation.
    #[must_use]
    pub fn delete(id: impl Into<String>) -> Request {
        Request::new(
            HttpMethod::Post,
            ["payment_sources".into(), id.into(), "delete".into()],
        )
    }
}

/// Adds the dispatch passthroughs shared by every operation builder.
macro_rules! impl_request_dispatch {
    ($builder:ty) => {
        impl $builder {
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
    };
}

/// Builder for [`PaymentSource::create_using_temp_token`].
#[derive(Debug)]
pub struct CreateUsingTempTokenRequest {
    inner: Request,
}

impl CreateUsingTempTokenRequest {
    fn new() -> Self {
        let mut inner = Request::new(
            HttpMethod::Post,
            ["payment_sources", "create_using_temp_token"],
        );
        inner.params_mut().add_required("customer_id", None::<&str>);
        inner.params_mut().add_required("type", None::<&str>);
        inner.params_mut().add_required("tmp_token", None::<&str>);
        Self { inner }
    }

    /// Customer to store the instrument for. Required.
    #[must_use]
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.inner.params_mut().add("customer_id", customer_id.into());
        self
    }

    /// Kind of instrument behind the token. Required.
    #[must_use]
    pub fn source_type(mut self, source_type: PaymentSourceType) -> Self {
        self.inner
            .params_mut()
            .add("type", ParamValue::from_enum(&source_type));
        self
    }

    /// Single-use token issued by the gateway. Required.
    #[must_use]
    pub fn tmp_token(mut self, tmp_token: impl Into<String>) -> Self {
        self.inner.params_mut().add("tmp_token", tmp_token.into());
        self
    }

    /// Gateway account to store the instrument under.
    #[must_use]
    pub fn gateway_account_id(mut self, gateway_account_id: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add("gateway_account_id", gateway_account_id.into());
        self
    }

    /// Makes the new source the customer's primary one.
    #[must_use]
    pub fn replace_primary_payment_source(mut self, replace: bool) -> Self {
        self.inner
            .params_mut()
            .add("replace_primary_payment_source", replace);
        self
    }
}

impl_request_dispatch!(CreateUsingTempTokenRequest);

/// Builder for [`PaymentSource::create_using_permanent_token`].
#[derive(Debug)]
pub struct CreateUsingPermanentTokenRequest {
    inner: Request,
}

impl CreateUsingPermanentTokenRequest {
    fn new() -> Self {
        let mut inner = Request::new(
            HttpMethod::Post,
            ["payment_sources", "create_using_permanent_token"],
        );
        inner.params_mut().add_required("customer_id", None::<&str>);
        inner.params_mut().add_required("type", None::<&str>);
        inner.params_mut().add_required("reference_id", None::<&str>);
        Self { inner }
    }

    /// Customer to store the instrument for. Required.
    #[must_use]
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.inner.params_mut().add("customer_id", customer_id.into());
        self
    }

    /// Kind of instrument behind the token. Required.
    #[must_use]
    pub fn source_type(mut self, source_type: PaymentSourceType) -> Self {
        self.inner
            .params_mut()
            .add("type", ParamValue::from_enum(&source_type));
        self
    }

    /// Gateway-side reference of the vaulted instrument. Required.
    #[must_use]
    pub fn reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add("reference_id", reference_id.into());
        self
    }

    /// Gateway account the instrument is vaulted under.
    #[must_use]
    pub fn gateway_account_id(mut self, gateway_account_id: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add("gateway_account_id", gateway_account_id.into());
        self
    }

    /// Makes the new source the customer's primary one.
    #[must_use]
    pub fn replace_primary_payment_source(mut self, replace: bool) -> Self {
        self.inner
            .params_mut()
            .add("replace_primary_payment_source", replace);
        self
    }
}

impl_request_dispatch!(CreateUsingPermanentTokenRequest);

/// Builder for [`PaymentSource::create_card`].
///
/// Card fields encode under the `card` group, as in `card[number]`.
#[derive(Debug)]
pub struct CreateCardRequest {
    inner: Request,
}

impl CreateCardRequest {
    fn new() -> Self {
        let mut inner = Request::new(HttpMethod::Post, ["payment_sources", "create_card"]);
        inner.params_mut().add_required("customer_id", None::<&str>);
        inner
            .params_mut()
            .add_required(ParamPath::root("card").key("number"), None::<&str>);
        inner
            .params_mut()
            .add_required(ParamPath::root("card").key("expiry_month"), None::<&str>);
        inner
            .params_mut()
            .add_required(ParamPath::root("card").key("expiry_year"), None::<&str>);
        Self { inner }
    }

    /// Customer to store the card for. Required.
    #[must_use]
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.inner.params_mut().add("customer_id", customer_id.into());
        self
    }

    /// Makes the new card the customer's primary source.
    #[must_use]
    pub fn replace_primary_payment_source(mut self, replace: bool) -> Self {
        self.inner
            .params_mut()
            .add("replace_primary_payment_source", replace);
        self
    }

    /// Gateway account to store the card under.
    #[must_use]
    pub fn gateway_account_id(mut self, gateway_account_id: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("gateway_account_id"),
            gateway_account_id.into(),
        );
        self
    }

    /// Cardholder first name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("first_name"), first_name.into());
        self
    }

    /// Cardholder last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("last_name"), last_name.into());
        self
    }

    /// Full card number. Required.
    #[must_use]
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("number"), number.into());
        self
    }

    /// Expiry month, 1 through 12. Required.
    #[must_use]
    pub fn expiry_month(mut self, expiry_month: i32) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("expiry_month"), expiry_month);
        self
    }

    /// Four-digit expiry year. Required.
    #[must_use]
    pub fn expiry_year(mut self, expiry_year: i32) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("expiry_year"), expiry_year);
        self
    }

    /// Card verification value.
    #[must_use]
    pub fn cvv(mut self, cvv: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("cvv"), cvv.into());
        self
    }

    /// Billing address line one.
    #[must_use]
    pub fn billing_addr1(mut self, billing_addr1: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_addr1"),
            billing_addr1.into(),
        );
        self
    }

    /// Billing address line two.
    #[must_use]
    pub fn billing_addr2(mut self, billing_addr2: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_addr2"),
            billing_addr2.into(),
        );
        self
    }

    /// Billing address city.
    #[must_use]
    pub fn billing_city(mut self, billing_city: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_city"),
            billing_city.into(),
        );
        self
    }

    /// Billing address state code.
    #[must_use]
    pub fn billing_state_code(mut self, billing_state_code: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_state_code"),
            billing_state_code.into(),
        );
        self
    }

    /// Billing address state name.
    #[must_use]
    pub fn billing_state(mut self, billing_state: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_state"),
            billing_state.into(),
        );
        self
    }

    /// Billing address postal code.
    #[must_use]
    pub fn billing_zip(mut self, billing_zip: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("billing_zip"), billing_zip.into());
        self
    }

    /// Billing address country code.
    #[must_use]
    pub fn billing_country(mut self, billing_country: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_country"),
            billing_country.into(),
        );
        self
    }
}

impl_request_dispatch!(CreateCardRequest);

/// Builder for [`PaymentSource::update_card`].
///
/// Every field is optional; absent fields keep their stored value.
#[derive(Debug)]
pub struct UpdateCardRequest {
    inner: Request,
}

impl UpdateCardRequest {
    fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Request::new(
                HttpMethod::Post,
                ["payment_sources".into(), id.into(), "update_card".into()],
            ),
        }
    }

    /// Additional gateway-specific data, JSON-encoded.
    #[must_use]
    pub fn gateway_meta_data(mut self, gateway_meta_data: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add("gateway_meta_data", gateway_meta_data.into());
        self
    }

    /// Cardholder first name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("first_name"), first_name.into());
        self
    }

    /// Cardholder last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("last_name"), last_name.into());
        self
    }

    /// Expiry month, 1 through 12.
    #[must_use]
    pub fn expiry_month(mut self, expiry_month: i32) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("expiry_month"), expiry_month);
        self
    }

    /// Four-digit expiry year.
    #[must_use]
    pub fn expiry_year(mut self, expiry_year: i32) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("expiry_year"), expiry_year);
        self
    }

    /// Billing address line one.
    #[must_use]
    pub fn billing_addr1(mut self, billing_addr1: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_addr1"),
            billing_addr1.into(),
        );
        self
    }

    /// Billing address line two.
    #[must_use]
    pub fn billing_addr2(mut self, billing_addr2: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_addr2"),
            billing_addr2.into(),
        );
        self
    }

    /// Billing address city.
    #[must_use]
    pub fn billing_city(mut self, billing_city: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_city"),
            billing_city.into(),
        );
        self
    }

    /// Billing address postal code.
    #[must_use]
    pub fn billing_zip(mut self, billing_zip: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add(ParamPath::root("card").key("billing_zip"), billing_zip.into());
        self
    }

    /// Billing address state code.
    #[must_use]
    pub fn billing_state_code(mut self, billing_state_code: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_state_code"),
            billing_state_code.into(),
        );
        self
    }

    /// Billing address state name.
    #[must_use]
    pub fn billing_state(mut self, billing_state: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_state"),
            billing_state.into(),
        );
        self
    }

    /// Billing address country code.
    #[must_use]
    pub fn billing_country(mut self, billing_country: impl Into<String>) -> Self {
        self.inner.params_mut().add(
            ParamPath::root("card").key("billing_country"),
            billing_country.into(),
        );
        self
    }
}

impl_request_dispatch!(UpdateCardRequest);

/// Builder for [`PaymentSource::switch_gateway_account`].
#[derive(Debug)]
pub struct SwitchGatewayAccountRequest {
    inner: Request,
}

impl SwitchGatewayAccountRequest {
    fn new(id: impl Into<String>) -> Self {
        let mut inner = Request::new(
            HttpMethod::Post,
            [
                "payment_sources".into(),
                id.into(),
                "switch_gateway_account".into(),
            ],
        );
        inner
            .params_mut()
            .add_required("gateway_account_id", None::<&str>);
        Self { inner }
    }

    /// Gateway account to move the source to. Required.
    #[must_use]
    pub fn gateway_account_id(mut self, gateway_account_id: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add("gateway_account_id", gateway_account_id.into());
        self
    }
}

impl_request_dispatch!(SwitchGatewayAccountRequest);

/// Builder for [`PaymentSource::export_payment_source`].
#[derive(Debug)]
pub struct ExportPaymentSourceRequest {
    inner: Request,
}

impl ExportPaymentSourceRequest {
    fn new(id: impl Into<String>) -> Self {
        let mut inner = Request::new(
            HttpMethod::Post,
            [
                "payment_sources".into(),
                id.into(),
                "export_payment_source".into(),
            ],
        );
        inner
            .params_mut()
            .add_required("gateway_account_id", None::<&str>);
        Self { inner }
    }

    /// Gateway account to copy the source to. Required.
    #[must_use]
    pub fn gateway_account_id(mut self, gateway_account_id: impl Into<String>) -> Self {
        self.inner
            .params_mut()
            .add("gateway_account_id", gateway_account_id.into());
        self
    }
}

impl_request_dispatch!(ExportPaymentSourceRequest);

/// Builder for [`PaymentSource::list`].
#[derive(Debug)]
pub struct PaymentSourceListRequest {
    inner: ListRequest,
}

impl PaymentSourceListRequest {
    fn new() -> Self {
        Self {
            inner: ListRequest::new(["payment_sources"]),
        }
    }

    /// Filters by owning customer.
    #[must_use]
    pub fn customer_id(self) -> StringFilter<Self> {
        StringFilter::new(self, "customer_id")
    }

    /// Filters by instrument kind.
    #[must_use]
    pub fn source_type(self) -> EnumFilter<PaymentSourceType, Self> {
        EnumFilter::new(self, "type")
    }

    /// Filters by lifecycle status.
    #[must_use]
    pub fn status(self) -> EnumFilter<PaymentSourceStatus, Self> {
        EnumFilter::new(self, "status")
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

impl FilterTarget for PaymentSourceListRequest {
    fn params_mut(&mut self) -> &mut Params {
        self.inner.params_mut()
    }
}

//! Resource implementations.
//!
//! Each resource module pairs the typed, lazily-decoded resource struct
//! with the operation builders for its endpoints. Enums shared across
//! resources live in [`enums`]; resource-scoped enums live with their
//! resource.
//!
//! # Available Resources
//!
//! ## PaymentSource
//!
//! - [`PaymentSource`] - A customer's stored payment instrument
//! - [`PaymentSourceStatus`] - Lifecycle status (valid, expiring, expired, ...)
//! - [`Card`], [`CardBrand`], [`CardFundingType`] - Card details and enums
//! - [`BankAccount`], [`BankAccountType`] - Direct-debit details
//! - [`AmazonPayment`], [`Paypal`] - Wallet agreement details
//! - Operation builders: [`CreateCardRequest`], [`CreateUsingTempTokenRequest`],
//!   [`CreateUsingPermanentTokenRequest`], [`UpdateCardRequest`],
//!   [`SwitchGatewayAccountRequest`], [`ExportPaymentSourceRequest`],
//!   [`PaymentSourceListRequest`]
//!
//! ## Customer
//!
//! - [`Customer`] - A customer record
//! - [`BillingAddress`], [`Contact`] - Nested customer data
//! - Operation builders: [`CreateCustomerRequest`], [`UpdateCustomerRequest`],
//!   [`CustomerListRequest`]
//!
//! ## Shared Enums
//!
//! - [`PaymentSourceType`] - Kind of instrument (wire field `type`)
//! - [`Gateway`] - Payment gateway identifiers
//! - [`AutoCollection`] - Automatic vs. offline collection

pub mod enums;

mod customer;
mod payment_source;

pub use enums::{AutoCollection, Gateway, PaymentSourceType};

pub use customer::{
    BillingAddress, Contact, CreateCustomerRequest, Customer, CustomerListRequest,
    UpdateCustomerRequest,
};
pub use payment_source::{
    AmazonPayment, BankAccount, BankAccountType, Card, CardBrand, CardFundingType,
    CreateCardRequest, CreateUsingPermanentTokenRequest, CreateUsingTempTokenRequest,
    ExportPaymentSourceRequest, PaymentSource, PaymentSourceListRequest, PaymentSourceStatus,
    SwitchGatewayAccountRequest, UpdateCardRequest,
};

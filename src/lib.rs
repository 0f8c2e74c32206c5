//! # Chargebee API Rust SDK
//!
//! A Rust SDK for the Chargebee API v2, providing type-safe configuration,
//! ordered wire-format handling, and typed resource operations for billing
//! and subscription workflows.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ChargebeeConfig`] and [`ChargebeeConfigBuilder`]
//! - Validated newtypes for the API key, site name, and endpoint override
//! - Ordered response documents with lazy typed extraction via [`wire::WireObject`]
//! - Forward-compatible string-token enums via [`wire::WireEnum`]
//! - Ordered bracket-path request parameters via [`params::Params`]
//! - A typed filter DSL for list endpoints via [`params::StringFilter`] and friends
//! - One-shot request builders per resource operation via [`rest::resources`]
//! - Lazy offset-based pagination via [`ListIterator`]
//! - Async HTTP client with retry logic and rate limit handling
//!
//! ## Quick Start
//!
//! ```rust
//! use chargebee_api::{ChargebeeConfig, ApiKey, SiteName};
//!
//! // Create configuration using the builder pattern
//! let config = ChargebeeConfig::builder()
//!     .site(SiteName::new("acme-test").unwrap())
//!     .api_key(ApiKey::new("test_sk_abc123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_url(), "https://acme-test.chargebee.com/api/v2");
//! ```
//!
//! ## Retrieving Resources
//!
//! Each resource exposes its operations as associated functions that return
//! a request builder:
//!
//! ```rust,ignore
//! use chargebee_api::{ChargebeeConfig, ApiKey, SiteName, HttpClient};
//! use chargebee_api::rest::resources::PaymentSource;
//!
//! let config = ChargebeeConfig::builder()
//!     .site(SiteName::new("acme-test").unwrap())
//!     .api_key(ApiKey::new("test_sk_abc123").unwrap())
//!     .build()?;
//! let client = HttpClient::new(&config);
//!
//! let result = PaymentSource::retrieve("pm_1").send(&client).await?;
//! let source = result.payment_source()?;
//! println!("{} belongs to {}", source.id()?, source.customer_id()?);
//! ```
//!
//! ## Creating Resources
//!
//! Mutations are `POST` requests with form-encoded parameters. Builders
//! expose one setter per parameter and validate required ones before
//! anything is sent:
//!
//! ```rust,ignore
//! use chargebee_api::rest::resources::PaymentSource;
//!
//! let result = PaymentSource::create_card()
//!     .customer_id("cus_1")
//!     .number("4111111111111111")
//!     .expiry_month(12)
//!     .expiry_year(2030)
//!     .cvv("100")
//!     .idempotency_key("order-42-card")
//!     .send(&client)
//!     .await?;
//! ```
//!
//! ## Listing and Pagination
//!
//! List endpoints accept typed filters and paginate lazily, one page per
//! HTTP round trip:
//!
//! ```rust,ignore
//! use chargebee_api::rest::resources::{PaymentSource, PaymentSourceStatus};
//!
//! let mut sources = PaymentSource::list()
//!     .customer_id().is("cus_1")
//!     .status().is_in(&[PaymentSourceStatus::Valid, PaymentSourceStatus::Expiring])
//!     .limit(10)
//!     .paginate(&client);
//!
//! while let Some(entry) = sources.next().await? {
//!     let source = entry.payment_source()?;
//!     println!("{}", source.id()?);
//! }
//! ```
//!
//! ## Reading Response Payloads
//!
//! Response bodies decode into [`ResourceResult`] wrappers that keep the
//! raw document around and extract fields lazily:
//!
//! ```rust
//! use chargebee_api::ResourceResult;
//! use chargebee_api::rest::resources::PaymentSourceStatus;
//!
//! let body = br#"{"payment_source": {"id": "pm_1", "status": "valid"}}"#;
//! let result = ResourceResult::from_json(body).unwrap();
//! let source = result.payment_source().unwrap();
//!
//! assert_eq!(source.id().unwrap(), "pm_1");
//! assert_eq!(source.status().unwrap(), PaymentSourceStatus::Valid);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and required parameters validate before dispatch
//! - **Order-preserving**: Documents and parameters keep their wire order
//! - **Forward-compatible**: Unknown fields and enum tokens never fail decoding
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod params;
pub mod rest;
pub mod wire;

// Re-export public types at crate root for convenience
pub use config::{ApiEndpoint, ApiKey, ChargebeeConfig, ChargebeeConfigBuilder, SiteName};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpMethod};

// Re-export REST request and response types
pub use rest::{
    ApiError, ApiResource, Error, ListIterator, ListRequest, ListResult, Request, ResourceModel,
    ResourceResult,
};

// Re-export wire-format types
pub use wire::{DecodeError, WireEnum, WireObject};

//! REST resource infrastructure for the Chargebee API.
//!
//! This module provides the request and decoding machinery shared by every
//! resource endpoint:
//!
//! - **[`Request`] and [`ListRequest`]**: One-shot request builders that
//!   collect parameters and headers, then send exactly once
//! - **[`ResourceResult`]**: The decoded response envelope, holding one
//!   wire object per returned resource
//! - **[`ResourceModel`] and [`ApiResource`]**: Typed, lazy field access
//!   over a decoded resource
//! - **[`ListIterator`]**: Lazy pagination that follows `next_offset`
//!   cursors page by page
//! - **[`Error`] and [`ApiError`]**: Semantic error types covering
//!   transport, decoding, and API-reported failures
//!
//! # Overview
//!
//! This module is the foundation for resource implementations. Individual
//! resources (PaymentSource, Customer, etc.) live in the `resources`
//! submodule and build their operations on the types here.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use chargebee_api::{ApiKey, ChargebeeConfig, HttpClient, SiteName};
//! use chargebee_api::rest::resources::PaymentSource;
//!
//! // Create a client
//! let config = ChargebeeConfig::builder()
//!     .site(SiteName::new("acme-test")?)
//!     .api_key(ApiKey::new("test_sk_...")?)
//!     .build()?;
//! let client = HttpClient::new(&config);
//!
//! // Retrieve a single payment source
//! let result = PaymentSource::retrieve("pm_123").send(&client).await?;
//! let source = result.payment_source()?;
//! println!("status: {:?}", source.status()?);
//!
//! // List payment sources for a customer, walking every page lazily
//! let mut entries = PaymentSource::list()
//!     .customer_id().is("cus_123")
//!     .limit(50)
//!     .paginate(&client);
//! while let Some(entry) = entries.next().await? {
//!     println!("- {}", entry.payment_source()?.id()?);
//! }
//! ```
//!
//! # Key Types
//!
//! - [`Error`]: Error type for resource operations
//! - [`ApiError`]: The decoded error payload the API reports on non-2xx
//! - [`Request`] and [`ListRequest`]: Request construction and dispatch
//! - [`ResourceResult`] and [`ListResult`]: Decoded response envelopes
//! - [`ResourceModel`]: Lazy typed access over one decoded resource
//! - [`ApiResource`]: Trait tying a typed resource to its envelope key
//! - [`ListIterator`]: Lazy cursor pagination over list endpoints
//! - [`resources`]: Resource implementations (e.g. PaymentSource, Customer)

mod errors;
mod pager;
mod request;
mod resource;
mod result;

pub mod resources;

// Public exports
pub use errors::{ApiError, Error};
pub use pager::ListIterator;
pub use request::{ListRequest, Request};
pub use resource::{ApiResource, ResourceModel};
pub use result::{ListResult, ResourceResult};

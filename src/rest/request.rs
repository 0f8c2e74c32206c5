//! Request construction and dispatch.
//!
//! [`Request`] models one API call: an HTTP method, a path built from
//! escaped segments, an ordered parameter collection, and a one-shot
//! lifecycle. A request starts out building, transitions to sent the
//! moment dispatch begins, and refuses to be sent twice. Validation runs
//! after that transition and before any traffic, so a required parameter
//! recorded without a value or a blank path identifier fails the send
//! without reaching the network.
//!
//! [`ListRequest`] is the list-call variant: always a `GET`, carries typed
//! filters and a page cursor, and hands over to
//! [`ListIterator`](crate::rest::ListIterator) for pagination.
//!
//! # Example
//!
//! ```rust,ignore
//! use chargebee_api::rest::resources::PaymentSource;
//!
//! let mut request = PaymentSource::create_card()
//!     .customer_id("cus_1")
//!     .number("4111111111111111")
//!     .idempotency_key("create-card-cus_1");
//!
//! let result = request.send(&client).await?;
//! let source = result.payment_source()?;
//! ```

use crate::clients::{HttpClient, HttpMethod, RawResponse};
use crate::params::{FilterTarget, Params};
use crate::rest::errors::{ApiError, Error};
use crate::rest::pager::ListIterator;
use crate::rest::result::{ListResult, ResourceResult};

/// Header carrying the caller-chosen idempotency key.
const IDEMPOTENCY_KEY_HEADER: &str = "chargebee-idempotency-key";

/// Lifecycle of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestState {
    /// Parameters and headers may still be added.
    Building,
    /// Dispatch has begun; the request cannot be sent again.
    Sent,
}

impl RequestState {
    /// Leaves the building state exactly once.
    fn begin(&mut self) -> Result<(), Error> {
        if *self == Self::Sent {
            return Err(Error::RequestReused);
        }
        *self = Self::Sent;
        Ok(())
    }
}

/// One API call under construction.
///
/// Typed operation builders such as
/// [`PaymentSource::create_card`](crate::rest::resources::PaymentSource::create_card)
/// wrap a `Request` and populate its parameters; constructing one directly
/// is the escape hatch for endpoints without a typed builder yet.
#[derive(Debug)]
pub struct Request {
    method: HttpMethod,
    path_segments: Vec<String>,
    params: Params,
    headers: Vec<(String, String)>,
    tries: u32,
    state: RequestState,
}

impl Request {
    /// Creates a request for the given method and path segments.
    ///
    /// Segments are escaped individually when the path is rendered, so an
    /// identifier containing reserved characters stays a single segment.
    #[must_use]
    pub fn new<I, S>(method: HttpMethod, path_segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            path_segments: path_segments.into_iter().map(Into::into).collect(),
            params: Params::new(),
            headers: Vec::new(),
            tries: 1,
            state: RequestState::Building,
        }
    }

    /// Returns the parameter collection under construction.
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Returns the parameters recorded so far.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Adds a header to this request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the idempotency key, making the mutation safe to retry.
    ///
    /// The API replays the original response for a key it has already
    /// seen instead of performing the mutation again.
    #[must_use]
    pub fn idempotency_key(self, key: impl Into<String>) -> Self {
        self.header(IDEMPOTENCY_KEY_HEADER, key)
    }

    /// Sets the total attempt count for retryable statuses.
    ///
    /// Defaults to a single attempt.
    #[must_use]
    pub fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Sends the request and decodes the response envelope.
    ///
    /// Dispatch is strictly ordered: the one-shot guard runs first, then
    /// parameter and path validation, and only then network traffic. A
    /// request that fails validation still counts as sent.
    ///
    /// # Errors
    ///
    /// - [`Error::RequestReused`] if the request was already sent
    /// - [`Error::MissingRequiredParam`] if a required parameter has no value
    /// - [`Error::InvalidIdentifier`] if a path segment is blank
    /// - [`Error::Api`] if the API rejects the request
    /// - [`Error::Transport`] / [`Error::Decode`] for delivery and payload
    ///   failures
    pub async fn send(&mut self, client: &HttpClient) -> Result<ResourceResult, Error> {
        self.state.begin()?;
        if let Some(param) = self.params.missing_required() {
            return Err(Error::MissingRequiredParam { param });
        }
        let path = render_path(&self.path_segments)?;
        let encoded = self.params.to_query_string();

        let response = match self.method {
            HttpMethod::Get => {
                client
                    .execute(
                        HttpMethod::Get,
                        &path,
                        Some(&encoded),
                        None,
                        &self.headers,
                        self.tries,
                    )
                    .await?
            }
            HttpMethod::Post => {
                client
                    .execute(
                        HttpMethod::Post,
                        &path,
                        None,
                        Some(&encoded),
                        &self.headers,
                        self.tries,
                    )
                    .await?
            }
        };

        decode_envelope(&response)
    }
}

/// One list call under construction.
///
/// List calls are always `GET`. Filter methods on the typed wrappers
/// append `field[op]` pairs through [`FilterTarget`]; [`limit`](Self::limit)
/// caps the page size and [`offset`](Self::offset) starts the listing at a
/// continuation cursor returned by an earlier page.
#[derive(Debug)]
pub struct ListRequest {
    path_segments: Vec<String>,
    params: Params,
    offset: Option<String>,
    headers: Vec<(String, String)>,
    tries: u32,
    state: RequestState,
}

impl ListRequest {
    /// Creates a list request for the given path segments.
    #[must_use]
    pub fn new<I, S>(path_segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path_segments: path_segments.into_iter().map(Into::into).collect(),
            params: Params::new(),
            offset: None,
            headers: Vec::new(),
            tries: 1,
            state: RequestState::Building,
        }
    }

    /// Caps the number of entries per page.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.params.add("limit", limit);
        self
    }

    /// Starts the listing at a continuation cursor from an earlier page.
    ///
    /// The cursor is kept apart from the filter parameters so pagination
    /// can swap it page by page without touching the filters.
    #[must_use]
    pub fn offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Adds a header to this request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the total attempt count for retryable statuses.
    ///
    /// Defaults to a single attempt.
    #[must_use]
    pub fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Returns the parameters recorded so far.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Sends the request and decodes one page.
    ///
    /// # Errors
    ///
    /// Same contract as [`Request::send`].
    pub async fn send(&mut self, client: &HttpClient) -> Result<ListResult, Error> {
        self.state.begin()?;
        self.dispatch_page(client, None).await
    }

    /// Turns the request into a lazy page iterator.
    ///
    /// The request becomes the iterator's page template; nothing is
    /// dispatched until the first entry is asked for.
    #[must_use]
    pub fn paginate(self, client: &HttpClient) -> ListIterator<'_> {
        ListIterator::new(self, client)
    }

    /// Dispatches one page, overriding the cursor when one is given.
    pub(crate) async fn dispatch_page(
        &self,
        client: &HttpClient,
        cursor: Option<&str>,
    ) -> Result<ListResult, Error> {
        if let Some(param) = self.params.missing_required() {
            return Err(Error::MissingRequiredParam { param });
        }
        let path = render_path(&self.path_segments)?;
        let query = self.page_query(cursor);

        let response = client
            .execute(
                HttpMethod::Get,
                &path,
                Some(&query),
                None,
                &self.headers,
                self.tries,
            )
            .await?;

        if response.is_ok() {
            Ok(ListResult::from_json(&response.body)?)
        } else {
            Err(Error::Api(ApiError::from_response(
                response.status,
                &response.body,
            )))
        }
    }

    /// Renders the query string for one page.
    fn page_query(&self, cursor: Option<&str>) -> String {
        let mut params = self.params.clone();
        params.add_opt("offset", cursor.or(self.offset.as_deref()));
        params.to_query_string()
    }
}

impl FilterTarget for ListRequest {
    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

/// Decodes a terminal response into an envelope or an API error.
fn decode_envelope(response: &RawResponse) -> Result<ResourceResult, Error> {
    if response.is_ok() {
        Ok(ResourceResult::from_json(&response.body)?)
    } else {
        Err(Error::Api(ApiError::from_response(
            response.status,
            &response.body,
        )))
    }
}

/// Renders path segments into an escaped request path.
fn render_path(segments: &[String]) -> Result<String, Error> {
    if segments.iter().any(|s| s.trim().is_empty()) {
        return Err(Error::InvalidIdentifier);
    }
    Ok(segments
        .iter()
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/"))
}

// Verify request types are Send + Sync at compile time
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Request>();
    assert_send_sync::<ListRequest>();
};

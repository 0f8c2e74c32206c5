//! Lazy pagination over list endpoints.
//!
//! [`ListIterator`] walks a listing page by page. It keeps a
//! [`ListRequest`] as its page template and re-dispatches it with the
//! continuation cursor each page hands back, buffering decoded entries
//! and yielding them one at a time. Nothing is fetched until the first
//! call for an entry, and an exhausted iterator stays exhausted.

use std::collections::VecDeque;

use crate::clients::HttpClient;
use crate::rest::errors::Error;
use crate::rest::request::ListRequest;
use crate::rest::result::{ListResult, ResourceResult};

/// An asynchronous entry iterator over a list endpoint.
///
/// Created by [`ListRequest::paginate`]. The iterator owns the page
/// template; filters and the page size apply to every page it fetches.
///
/// # Example
///
/// ```rust,ignore
/// let mut entries = PaymentSource::list()
///     .limit(50)
///     .paginate(&client);
///
/// while let Some(entry) = entries.next().await? {
///     let source = entry.payment_source()?;
///     println!("{}", source.id()?);
/// }
/// ```
#[derive(Debug)]
pub struct ListIterator<'a> {
    client: &'a HttpClient,
    template: ListRequest,
    buffer: VecDeque<ResourceResult>,
    next_cursor: Option<String>,
    started: bool,
    done: bool,
}

impl<'a> ListIterator<'a> {
    pub(crate) fn new(template: ListRequest, client: &'a HttpClient) -> Self {
        Self {
            client,
            template,
            buffer: VecDeque::new(),
            next_cursor: None,
            started: false,
            done: false,
        }
    }

    /// Yields the next entry, fetching pages as the buffer runs dry.
    ///
    /// A page may be empty while the listing continues; such pages are
    /// skipped transparently. Returns `Ok(None)` once the listing is
    /// exhausted and keeps returning it on every later call.
    ///
    /// # Errors
    ///
    /// Propagates dispatch and decode failures from the page fetch. A
    /// fetch failure ends the listing; later calls return `Ok(None)`.
    pub async fn next(&mut self) -> Result<Option<ResourceResult>, Error> {
        loop {
            if let Some(entry) = self.buffer.pop_front() {
                return Ok(Some(entry));
            }
            if self.done {
                return Ok(None);
            }
            let page = self.dispatch_next().await?;
            self.buffer.extend(page.into_entries());
        }
    }

    /// Yields the next whole page of entries.
    ///
    /// Entries already buffered by [`next`](Self::next) count as a page of
    /// their own and are handed back first. A fetched page may be empty
    /// while the listing continues; `Ok(None)` marks the real end.
    ///
    /// # Errors
    ///
    /// Same contract as [`next`](Self::next).
    pub async fn next_page(&mut self) -> Result<Option<Vec<ResourceResult>>, Error> {
        if !self.buffer.is_empty() {
            return Ok(Some(self.buffer.drain(..).collect()));
        }
        if self.done {
            return Ok(None);
        }
        let page = self.dispatch_next().await?;
        Ok(Some(page.into_entries()))
    }

    /// Dispatches the template with the current cursor and records the
    /// continuation state from the response.
    async fn dispatch_next(&mut self) -> Result<ListResult, Error> {
        // First fetch runs the template as built; the caller-set offset,
        // if any, applies through the template itself.
        let cursor = if self.started {
            self.next_cursor.clone()
        } else {
            None
        };

        match self
            .template
            .dispatch_page(self.client, cursor.as_deref())
            .await
        {
            Ok(page) => {
                self.started = true;
                self.next_cursor = page.next_offset().map(str::to_string);
                if self.next_cursor.is_none() {
                    self.done = true;
                }
                Ok(page)
            }
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }
}

// Verify the iterator can be driven from any task
const _: fn() = || {
    fn assert_send<T: Send>() {}
    assert_send::<ListIterator<'static>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiEndpoint, ApiKey, ChargebeeConfig, SiteName};
    use wiremock::matchers::{method, path, query_param};
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

    fn create_test_entry(id: &str) -> serde_json::Value {
        serde_json::json!({
            "payment_source": {"id": id, "customer_id": "cus_1", "type": "card"}
        })
    }

    async fn collect_ids(iterator: &mut ListIterator<'_>) -> Vec<String> {
        let mut ids = Vec::new();
        while let Some(entry) = iterator.next().await.unwrap() {
            ids.push(entry.payment_source().unwrap().id().unwrap());
        }
        ids
    }

    #[tokio::test]
    async fn test_iterator_walks_pages_in_order() {
        let server = MockServer::start().await;

        // Follow-up page first: mocks match in mount order and only this
        // one requires the cursor.
        Mock::given(method("GET"))
            .and(path("/payment_sources"))
            .and(query_param("offset", "o2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [create_test_entry("pm_3")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/payment_sources"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [create_test_entry("pm_1"), create_test_entry("pm_2")],
                "next_offset": "o2"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());
        let mut iterator = ListRequest::new(["payment_sources"]).paginate(&client);

        let ids = collect_ids(&mut iterator).await;
        assert_eq!(ids, vec!["pm_1", "pm_2", "pm_3"]);

        // Exhaustion is stable
        assert!(iterator.next().await.unwrap().is_none());
        assert!(iterator.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_iterator_fetches_nothing_until_first_entry() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payment_sources"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"list": []})),
            )
            .expect(0)
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());
        let iterator = ListRequest::new(["payment_sources"]).paginate(&client);
        drop(iterator);
    }

    #[tokio::test]
    async fn test_first_page_uses_caller_offset() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payment_sources"))
            .and(query_param("offset", "seed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [create_test_entry("pm_9")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());
        let mut iterator = ListRequest::new(["payment_sources"])
            .offset("seed")
            .paginate(&client);

        let ids = collect_ids(&mut iterator).await;
        assert_eq!(ids, vec!["pm_9"]);
    }

    #[tokio::test]
    async fn test_empty_page_with_cursor_continues() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payment_sources"))
            .and(query_param("offset", "o2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [create_test_entry("pm_1")]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/payment_sources"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [],
                "next_offset": "o2"
            })))
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());
        let mut iterator = ListRequest::new(["payment_sources"]).paginate(&client);

        // The empty leading page is skipped transparently
        let ids = collect_ids(&mut iterator).await;
        assert_eq!(ids, vec!["pm_1"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_ends_the_listing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payment_sources"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "bad filter",
                "api_error_code": "invalid_request"
            })))
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());
        let mut iterator = ListRequest::new(["payment_sources"]).paginate(&client);

        let first = iterator.next().await;
        assert!(matches!(first, Err(Error::Api(_))));

        // The failure consumed the listing
        assert!(iterator.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_next_page_yields_whole_pages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payment_sources"))
            .and(query_param("offset", "o2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [create_test_entry("pm_3")]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/payment_sources"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [create_test_entry("pm_1"), create_test_entry("pm_2")],
                "next_offset": "o2"
            })))
            .mount(&server)
            .await;

        let client = create_test_client(&server.uri());
        let mut iterator = ListRequest::new(["payment_sources"]).paginate(&client);

        let first = iterator.next_page().await.unwrap().unwrap();
        assert_eq!(first.len(), 2);

        let second = iterator.next_page().await.unwrap().unwrap();
        assert_eq!(second.len(), 1);

        assert!(iterator.next_page().await.unwrap().is_none());
    }
}

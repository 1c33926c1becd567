//! One page of a list or search response, plus the means to walk the rest.

use std::fmt;
use std::sync::{Arc, OnceLock};

use futures::stream::{self, Stream};

use crate::clients::HttpError;
use crate::pagination::params::Page;
use crate::pagination::state::{Direction, Step, TraversalState};
use crate::pagination::{PageFetcher, PageParams, PaginationStyle};
use crate::resource::{Resource, Value};

/// A page of results from a paginated Sidemail endpoint.
///
/// Holds the decoded items and metadata of the page it was built from and a
/// shared handle to the operation that produced it. Walking further pages is
/// done through [`QueryResult::auto_paginate`], which fetches lazily: page
/// N+1 is only requested once every item of page N has been consumed.
///
/// Only the metadata of the endpoint's style is ever populated: offset
/// endpoints report [`offset`](Self::offset), cursor endpoints report
/// [`next_cursor`](Self::next_cursor) and [`prev_cursor`](Self::prev_cursor).
///
/// # Example
///
/// ```rust,ignore
/// let contacts = client.contacts().query(json!({"limit": 50})).await?;
/// println!("first page: {} of {:?}", contacts.len(), contacts.total());
///
/// let mut pager = contacts.auto_paginate();
/// while let Some(contact) = pager.next_item().await {
///     let contact = contact?;
///     println!("{}", contact.get("emailAddress").map(ToString::to_string).unwrap_or_default());
/// }
/// ```
#[derive(Clone)]
pub struct QueryResult {
    style: PaginationStyle,
    params: PageParams,
    page: Page,
    raw: serde_json::Value,
    first_page: OnceLock<Resource>,
    fetcher: Arc<dyn PageFetcher>,
}

// Verify QueryResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryResult>();
    assert_send_sync::<Pager>();
};

impl QueryResult {
    /// Builds a result from an already fetched first page.
    ///
    /// `params` are the pagination parameters that produced `raw`.
    #[must_use]
    pub fn new(
        style: PaginationStyle,
        params: PageParams,
        raw: serde_json::Value,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        let page = Page::parse(style, &raw, &params);
        Self {
            style,
            params,
            page,
            raw,
            first_page: OnceLock::new(),
            fetcher,
        }
    }

    /// Fetches the first page with `fetcher` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns whatever the first request fails with.
    pub async fn fetch_first(
        style: PaginationStyle,
        params: PageParams,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self, HttpError> {
        tracing::debug!(?style, ?params, "Fetching first page");
        let raw = fetcher.fetch(&params).await?;
        Ok(Self::new(style, params, raw, fetcher))
    }

    /// The pagination style of the endpoint.
    #[must_use]
    pub const fn style(&self) -> PaginationStyle {
        self.style
    }

    /// Items of this page, in server order.
    #[must_use]
    pub fn data(&self) -> &[Value] {
        &self.page.items
    }

    /// Iterates over the items of this page only.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.page.items.iter()
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.page.items.len()
    }

    /// Returns `true` if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page.items.is_empty()
    }

    /// Total number of matching items, when the server reports it.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.page.total
    }

    /// Requested page size.
    #[must_use]
    pub const fn limit(&self) -> Option<u64> {
        self.params.limit
    }

    /// Offset of this page (offset endpoints only).
    #[must_use]
    pub const fn offset(&self) -> Option<u64> {
        match self.style {
            PaginationStyle::Offset => self.params.offset,
            PaginationStyle::Cursor => None,
        }
    }

    /// Whether a following page exists.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.page.has_more
    }

    /// Whether a preceding page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page.has_prev
    }

    /// Cursor of the following page (cursor endpoints only).
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.page.next_cursor.as_deref()
    }

    /// Cursor of the preceding page (cursor endpoints only).
    #[must_use]
    pub fn prev_cursor(&self) -> Option<&str> {
        self.page.prev_cursor.as_deref()
    }

    /// The first page as received, wrapped on first access.
    ///
    /// Non-object pages come back as an empty resource.
    #[must_use]
    pub fn first_page(&self) -> &Resource {
        self.first_page
            .get_or_init(|| Resource::from_value(self.raw.clone()).unwrap_or_default())
    }

    /// Walks every item of this page and of all following pages.
    ///
    /// The walk is lazy and forward-only. A fetch error is yielded once and
    /// ends the walk; items yielded before it stay valid.
    #[must_use]
    pub fn auto_paginate(&self) -> Pager {
        Pager::new(
            self.style,
            Direction::Forward,
            TraversalState::forward(self.style, &self.params, &self.page),
            Arc::clone(&self.fetcher),
        )
    }

    /// Walks the items of all preceding pages, most recent first.
    ///
    /// Only cursor endpoints can walk backwards; for offset endpoints the
    /// returned pager is empty. Items of this page are not repeated.
    #[must_use]
    pub fn auto_paginate_prev(&self) -> Pager {
        Pager::new(
            self.style,
            Direction::Backward,
            TraversalState::backward(self.style, &self.params, &self.page),
            Arc::clone(&self.fetcher),
        )
    }
}

impl fmt::Debug for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryResult")
            .field("style", &self.style)
            .field("items", &self.page.items.len())
            .field("total", &self.page.total)
            .field("has_more", &self.page.has_more)
            .field("has_prev", &self.page.has_prev)
            .field("offset", &self.offset())
            .field("limit", &self.params.limit)
            .field("next_cursor", &self.page.next_cursor)
            .field("prev_cursor", &self.page.prev_cursor)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A lazy walk over the items of consecutive pages.
///
/// Created by [`QueryResult::auto_paginate`] and
/// [`QueryResult::auto_paginate_prev`]. Each call to
/// [`next_item`](Self::next_item) performs at most one request.
pub struct Pager {
    style: PaginationStyle,
    direction: Direction,
    state: TraversalState,
    fetcher: Arc<dyn PageFetcher>,
    fetches: usize,
}

impl Pager {
    fn new(
        style: PaginationStyle,
        direction: Direction,
        state: TraversalState,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        Self {
            style,
            direction,
            state,
            fetcher,
            fetches: 0,
        }
    }

    /// Returns the next item, fetching the next page when the current one
    /// is drained.
    ///
    /// Returns `None` once the walk is over, including after an error has
    /// been returned.
    pub async fn next_item(&mut self) -> Option<Result<Value, HttpError>> {
        loop {
            let state = std::mem::replace(&mut self.state, TraversalState::Exhausted);
            let (state, step) = state.advance();
            self.state = state;

            match step {
                Step::Yield(item) => return Some(Ok(item)),
                Step::Done => return None,
                Step::Fetch(params) => {
                    tracing::debug!(
                        style = ?self.style,
                        direction = ?self.direction,
                        ?params,
                        "Fetching page"
                    );
                    self.fetches += 1;
                    let result = self.fetcher.fetch(&params).await;

                    let state = std::mem::replace(&mut self.state, TraversalState::Exhausted);
                    match result {
                        Ok(raw) => {
                            let page = Page::parse(self.style, &raw, &params);
                            self.state = state.page_fetched(self.style, self.direction, page);
                        }
                        Err(error) => {
                            tracing::warn!(?params, "Page fetch failed: {error}");
                            self.state = state.fetch_failed();
                            return Some(Err(error));
                        }
                    }
                }
            }
        }
    }

    /// Number of page requests this pager has made.
    #[must_use]
    pub const fn fetch_count(&self) -> usize {
        self.fetches
    }

    /// Drains the walk into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; items gathered before it are dropped.
    pub async fn collect_all(mut self) -> Result<Vec<Value>, HttpError> {
        let mut items = Vec::new();
        while let Some(item) = self.next_item().await {
            items.push(item?);
        }
        Ok(items)
    }

    /// Turns the walk into a [`Stream`].
    pub fn into_stream(self) -> impl Stream<Item = Result<Value, HttpError>> + Send {
        stream::unfold(self, |mut pager| async move {
            pager.next_item().await.map(|item| (item, pager))
        })
    }
}

impl fmt::Debug for Pager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("style", &self.style)
            .field("direction", &self.direction)
            .field("state", &self.state)
            .field("fetches", &self.fetches)
            .finish_non_exhaustive()
    }
}

//! The page-fetch seam between [`QueryResult`](super::QueryResult) and the
//! transport.

use std::future::Future;

use async_trait::async_trait;

use crate::clients::HttpError;
use crate::pagination::PageParams;

/// Fetches one raw page for the given pagination parameters.
///
/// Implementations are bound to the operation that produced the first page
/// (endpoint, method and the caller's other parameters) and substitute only
/// the pagination fields from `params`.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use serde_json::json;
/// use sidemail::clients::HttpError;
/// use sidemail::pagination::{PageFetcher, PageParams};
///
/// struct SinglePage;
///
/// #[async_trait]
/// impl PageFetcher for SinglePage {
///     async fn fetch(&self, _params: &PageParams) -> Result<serde_json::Value, HttpError> {
///         Ok(json!({"data": [1, 2, 3]}))
///     }
/// }
/// ```
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs one request and returns the undecoded page.
    ///
    /// # Errors
    ///
    /// Whatever the underlying request fails with; it is surfaced unchanged
    /// to the consumer of the traversal.
    async fn fetch(&self, params: &PageParams) -> Result<serde_json::Value, HttpError>;
}

/// A [`PageFetcher`] backed by an async closure.
///
/// Created with [`fetcher_fn`].
#[derive(Clone)]
pub struct FnFetcher<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnFetcher<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFetcher").finish_non_exhaustive()
    }
}

/// Wraps an async closure as a [`PageFetcher`].
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sidemail::pagination::{fetcher_fn, PageParams};
/// use sidemail::HttpError;
///
/// let fetcher = fetcher_fn(|params: PageParams| async move {
///     Ok::<_, HttpError>(json!({"data": [], "offset": params.offset}))
/// });
/// ```
pub const fn fetcher_fn<F, Fut>(f: F) -> FnFetcher<F>
where
    F: Fn(PageParams) -> Fut + Send + Sync,
    Fut: Future<Output = Result<serde_json::Value, HttpError>> + Send,
{
    FnFetcher { f }
}

#[async_trait]
impl<F, Fut> PageFetcher for FnFetcher<F>
where
    F: Fn(PageParams) -> Fut + Send + Sync,
    Fut: Future<Output = Result<serde_json::Value, HttpError>> + Send,
{
    async fn fetch(&self, params: &PageParams) -> Result<serde_json::Value, HttpError> {
        (self.f)(params.clone()).await
    }
}

//! Pagination over Sidemail list and search endpoints.
//!
//! Sidemail pages in two ways:
//!
//! - **Offset**: `offset` + `limit`; the server may send `hasMore`
//!   (contacts query, messenger list)
//! - **Cursor**: opaque `paginationCursorNext` / `paginationCursorPrev`
//!   tokens (email search, contacts list)
//!
//! Both are presented as a [`QueryResult`], whose
//! [`auto_paginate`](QueryResult::auto_paginate) walks every following page
//! lazily through a [`PageFetcher`] bound to the original operation.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use sidemail::pagination::{fetcher_fn, PageParams, PaginationStyle, QueryResult};
//! use sidemail::HttpError;
//!
//! # tokio_test::block_on(async {
//! let fetcher = Arc::new(fetcher_fn(|params: PageParams| async move {
//!     let start = params.offset.unwrap_or(0);
//!     let items: Vec<u64> = (start..start + 2).filter(|i| *i < 5).collect();
//!     Ok::<_, HttpError>(json!({ "data": items }))
//! }));
//!
//! let result = QueryResult::fetch_first(
//!     PaginationStyle::Offset,
//!     PageParams::offset(0, Some(2)),
//!     fetcher,
//! )
//! .await
//! .unwrap();
//!
//! let all = result.auto_paginate().collect_all().await.unwrap();
//! assert_eq!(all.len(), 5);
//! # });
//! ```

mod fetcher;
mod params;
mod query_result;
mod state;

pub use fetcher::{fetcher_fn, FnFetcher, PageFetcher};
pub use params::{
    PageParams, PaginationStyle, DATA_KEY, HAS_MORE_KEY, HAS_PREV_KEY, LIMIT_KEY,
    NEXT_CURSOR_KEY, OFFSET_KEY, PREV_CURSOR_KEY, TOTAL_KEY,
};
pub use query_result::{Pager, QueryResult};

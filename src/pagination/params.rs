//! Page request parameters and page decoding.

use serde_json::Map;

use crate::resource::{wrap, Value};

/// Key holding the items of a page.
pub const DATA_KEY: &str = "data";
/// Key holding the total item count.
pub const TOTAL_KEY: &str = "total";
/// Key holding the server's "more pages" flag.
pub const HAS_MORE_KEY: &str = "hasMore";
/// Key holding the server's "previous pages" flag.
pub const HAS_PREV_KEY: &str = "hasPrev";
/// Key holding the forward cursor.
pub const NEXT_CURSOR_KEY: &str = "paginationCursorNext";
/// Key holding the backward cursor.
pub const PREV_CURSOR_KEY: &str = "paginationCursorPrev";
/// Key holding the offset parameter.
pub const OFFSET_KEY: &str = "offset";
/// Key holding the page size parameter.
pub const LIMIT_KEY: &str = "limit";

/// How an endpoint pages through its results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationStyle {
    /// Numeric `offset` plus `limit`.
    Offset,
    /// Opaque `paginationCursorNext` / `paginationCursorPrev` tokens.
    Cursor,
}

/// The pagination parameters for a single page request.
///
/// Only the fields relevant to the endpoint's [`PaginationStyle`] are ever
/// populated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Position of the first item (offset endpoints).
    pub offset: Option<u64>,
    /// Requested page size.
    pub limit: Option<u64>,
    /// Forward cursor (cursor endpoints).
    pub next_cursor: Option<String>,
    /// Backward cursor (cursor endpoints).
    pub prev_cursor: Option<String>,
}

impl PageParams {
    /// Parameters for the first page of an offset endpoint.
    #[must_use]
    pub const fn offset(offset: u64, limit: Option<u64>) -> Self {
        Self {
            offset: Some(offset),
            limit,
            next_cursor: None,
            prev_cursor: None,
        }
    }

    /// Parameters for a page of a cursor endpoint.
    #[must_use]
    pub const fn cursor(
        next_cursor: Option<String>,
        prev_cursor: Option<String>,
        limit: Option<u64>,
    ) -> Self {
        Self {
            offset: None,
            limit,
            next_cursor,
            prev_cursor,
        }
    }

    /// Lifts pagination parameters out of caller-supplied operation params.
    ///
    /// The pagination keys are removed from `params` so that the fetcher can
    /// re-apply them per page; `limit` stays in place since every page
    /// sends the same one. A missing or unreadable `offset` starts at 0.
    pub fn take_from(style: PaginationStyle, params: &mut Map<String, serde_json::Value>) -> Self {
        let limit = params.get(LIMIT_KEY).and_then(as_count);
        match style {
            PaginationStyle::Offset => {
                let offset = params.remove(OFFSET_KEY).as_ref().and_then(as_count);
                Self::offset(offset.unwrap_or(0), limit)
            }
            PaginationStyle::Cursor => {
                let next = params.remove(NEXT_CURSOR_KEY).as_ref().and_then(as_cursor);
                let prev = params.remove(PREV_CURSOR_KEY).as_ref().and_then(as_cursor);
                Self::cursor(next, prev, limit)
            }
        }
    }

    /// Writes these parameters into an outgoing payload.
    ///
    /// Cursors are only written when present; `offset` always is for offset
    /// endpoints.
    pub fn apply_to(&self, payload: &mut Map<String, serde_json::Value>) {
        if let Some(offset) = self.offset {
            payload.insert(OFFSET_KEY.to_string(), offset.into());
        }
        if let Some(limit) = self.limit {
            payload.insert(LIMIT_KEY.to_string(), limit.into());
        }
        if let Some(cursor) = &self.next_cursor {
            payload.insert(NEXT_CURSOR_KEY.to_string(), cursor.clone().into());
        }
        if let Some(cursor) = &self.prev_cursor {
            payload.insert(PREV_CURSOR_KEY.to_string(), cursor.clone().into());
        }
    }
}

/// One decoded page of a paginated response.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Page {
    pub items: Vec<Value>,
    pub total: Option<u64>,
    pub has_more: bool,
    pub has_prev: bool,
    pub next_cursor: Option<String>,
    pub prev_cursor: Option<String>,
}

impl Page {
    /// Decodes a raw page.
    ///
    /// Anything that isn't a JSON object decodes as an empty, final page.
    pub fn parse(style: PaginationStyle, raw: &serde_json::Value, params: &PageParams) -> Self {
        let Some(object) = raw.as_object() else {
            return Self::default();
        };

        let items: Vec<Value> = object
            .get(DATA_KEY)
            .and_then(serde_json::Value::as_array)
            .map(|items| items.iter().cloned().map(wrap).collect())
            .unwrap_or_default();
        let total = object.get(TOTAL_KEY).and_then(as_count);
        let flag = |key: &str| object.get(key).and_then(serde_json::Value::as_bool);

        match style {
            PaginationStyle::Offset => {
                let filled = params
                    .limit
                    .is_some_and(|limit| usize::try_from(limit).is_ok_and(|l| l == items.len()));
                Self {
                    has_more: flag(HAS_MORE_KEY).unwrap_or(filled),
                    has_prev: false,
                    items,
                    total,
                    next_cursor: None,
                    prev_cursor: None,
                }
            }
            PaginationStyle::Cursor => {
                let next_cursor = object.get(NEXT_CURSOR_KEY).and_then(as_cursor);
                let prev_cursor = object.get(PREV_CURSOR_KEY).and_then(as_cursor);
                Self {
                    has_more: flag(HAS_MORE_KEY).unwrap_or(next_cursor.is_some()),
                    has_prev: flag(HAS_PREV_KEY).unwrap_or(prev_cursor.is_some()),
                    items,
                    total,
                    next_cursor,
                    prev_cursor,
                }
            }
        }
    }
}

fn as_count(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_cursor(value: &serde_json::Value) -> Option<String> {
    value
        .as_str()
        .filter(|cursor| !cursor.is_empty())
        .map(String::from)
}

//! Traversal state machine.
//!
//! The cross-page walk is modelled as explicit states with pure transitions,
//! so the termination rules can be checked without any I/O.

use std::collections::VecDeque;

use crate::pagination::params::Page;
use crate::pagination::{PageParams, PaginationStyle};
use crate::resource::Value;

/// Which way a traversal walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Where a traversal currently stands.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TraversalState {
    /// Items of the current page remain, or the page is drained and `next`
    /// describes the page to fetch.
    HasCurrentPage {
        remaining: VecDeque<Value>,
        next: Option<PageParams>,
    },
    /// A request for the page described by the params is outstanding.
    FetchingNext(PageParams),
    /// No further pages.
    Exhausted,
    /// A fetch failed; nothing more is yielded.
    Failed,
}

/// What the driver must do after a transition.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Step {
    Yield(Value),
    Fetch(PageParams),
    Done,
}

impl TraversalState {
    /// Initial state for a forward walk starting at an already fetched page.
    pub fn forward(style: PaginationStyle, params: &PageParams, page: &Page) -> Self {
        Self::HasCurrentPage {
            remaining: page.items.iter().cloned().collect(),
            next: next_params(style, Direction::Forward, params, page),
        }
    }

    /// Initial state for a backward walk. The starting page itself is not
    /// yielded.
    pub fn backward(style: PaginationStyle, params: &PageParams, page: &Page) -> Self {
        Self::HasCurrentPage {
            remaining: VecDeque::new(),
            next: next_params(style, Direction::Backward, params, page),
        }
    }

    /// Consumer asks for the next item.
    ///
    /// A state left in `FetchingNext` (the request future was dropped)
    /// repeats the fetch.
    pub fn advance(self) -> (Self, Step) {
        match self {
            Self::HasCurrentPage {
                mut remaining,
                next,
            } => match remaining.pop_front() {
                Some(item) => (Self::HasCurrentPage { remaining, next }, Step::Yield(item)),
                None => match next {
                    Some(params) => (Self::FetchingNext(params.clone()), Step::Fetch(params)),
                    None => (Self::Exhausted, Step::Done),
                },
            },
            Self::FetchingNext(params) => (Self::FetchingNext(params.clone()), Step::Fetch(params)),
            Self::Exhausted => (Self::Exhausted, Step::Done),
            Self::Failed => (Self::Failed, Step::Done),
        }
    }

    /// A requested page arrived.
    ///
    /// An empty page ends the walk regardless of what its metadata claims.
    pub fn page_fetched(
        self,
        style: PaginationStyle,
        direction: Direction,
        page: Page,
    ) -> Self {
        let Self::FetchingNext(params) = self else {
            return self;
        };
        if page.items.is_empty() {
            return Self::Exhausted;
        }
        let next = next_params(style, direction, &params, &page);
        Self::HasCurrentPage {
            remaining: page.items.into(),
            next,
        }
    }

    /// A requested page failed.
    #[allow(clippy::unused_self)]
    pub fn fetch_failed(self) -> Self {
        Self::Failed
    }
}

/// Computes the parameters of the page after `page`, or `None` at the end.
///
/// Offset walks advance by the number of items actually received. Cursor
/// walks substitute the relevant cursor and drop the other one.
pub(crate) fn next_params(
    style: PaginationStyle,
    direction: Direction,
    params: &PageParams,
    page: &Page,
) -> Option<PageParams> {
    match (style, direction) {
        (PaginationStyle::Offset, Direction::Forward) => {
            if !page.has_more || page.items.is_empty() {
                return None;
            }
            let received = u64::try_from(page.items.len()).ok()?;
            let offset = params.offset.unwrap_or(0).checked_add(received)?;
            Some(PageParams {
                offset: Some(offset),
                ..params.clone()
            })
        }
        (PaginationStyle::Offset, Direction::Backward) => None,
        (PaginationStyle::Cursor, Direction::Forward) => match &page.next_cursor {
            Some(cursor) if page.has_more => Some(PageParams::cursor(
                Some(cursor.clone()),
                None,
                params.limit,
            )),
            _ => None,
        },
        (PaginationStyle::Cursor, Direction::Backward) => match &page.prev_cursor {
            Some(cursor) if page.has_prev => Some(PageParams::cursor(
                None,
                Some(cursor.clone()),
                params.limit,
            )),
            _ => None,
        },
    }
}

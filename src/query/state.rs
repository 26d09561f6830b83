//! Per-key request state held by the query store.

use crate::github::error::ExplorerError;
use crate::github::pagination::PageCursor;

/// Lifecycle of a keyed request as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A request is in flight and no newer result is available.
    Loading,
    /// The latest request succeeded.
    Success,
    /// The latest request failed.
    Error,
}

/// State of a single-result query such as a user search.
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    pub(super) data: Option<T>,
    pub(super) error: Option<ExplorerError>,
    pub(super) in_flight: Option<u64>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: None,
        }
    }
}

impl<T> QueryState<T> {
    /// Current status; an in-flight request takes precedence over any
    /// previously stored result.
    #[must_use]
    pub const fn status(&self) -> QueryStatus {
        if self.in_flight.is_some() {
            QueryStatus::Loading
        } else if self.error.is_some() {
            QueryStatus::Error
        } else if self.data.is_some() {
            QueryStatus::Success
        } else {
            QueryStatus::Idle
        }
    }

    /// Latest successful result.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Error from the latest request, if it failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ExplorerError> {
        self.error.as_ref()
    }

    /// Returns true while a request for this key is in flight.
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct InFlightPage {
    pub(super) generation: u64,
    pub(super) page: u32,
}

/// State of a page-number paginated query such as a repository listing.
///
/// Pages are kept in fetch order; [`PagedQueryState::items`] flattens them
/// into the single sequence the UI displays.
#[derive(Debug, Clone)]
pub struct PagedQueryState<T> {
    pub(super) pages: Vec<Vec<T>>,
    pub(super) cursor: PageCursor,
    pub(super) error: Option<ExplorerError>,
    pub(super) in_flight: Option<InFlightPage>,
}

impl<T> PagedQueryState<T> {
    pub(super) const fn new(per_page: u8) -> Self {
        Self {
            pages: Vec::new(),
            cursor: PageCursor::new(per_page),
            error: None,
            in_flight: None,
        }
    }

    /// Status of the listing as a whole.
    ///
    /// Once any page has loaded the listing stays in `Success`; failures and
    /// fetches of later pages are reported through
    /// [`PagedQueryState::error`] and
    /// [`PagedQueryState::is_fetching_next_page`].
    #[must_use]
    pub fn status(&self) -> QueryStatus {
        if !self.pages.is_empty() {
            QueryStatus::Success
        } else if self.in_flight.is_some() {
            QueryStatus::Loading
        } else if self.error.is_some() {
            QueryStatus::Error
        } else {
            QueryStatus::Idle
        }
    }

    /// All loaded items, pages concatenated in ascending page order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().flatten()
    }

    /// Number of loaded items across all pages.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// Number of pages loaded so far.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns true when the last loaded page was full.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.cursor.has_next_page()
    }

    /// Returns true while any page request is in flight.
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns true while a page after the first is in flight.
    #[must_use]
    pub fn is_fetching_next_page(&self) -> bool {
        self.in_flight.is_some() && !self.pages.is_empty()
    }

    /// Error from the most recent page request, if it failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ExplorerError> {
        self.error.as_ref()
    }
}

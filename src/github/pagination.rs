//! Page-number pagination state for repository listings.
//!
//! GitHub paginates `users/{login}/repos` by page number. A listing is
//! exhausted once a page comes back with fewer items than were requested, so
//! the cursor only needs the number of pages loaded and the size of the last
//! one.

/// First page index accepted by GitHub's page-number pagination.
pub const FIRST_PAGE: u32 = 1;

/// Largest `per_page` GitHub honours.
pub const MAX_PER_PAGE: u8 = 100;

/// Forward-only cursor over a page-number paginated listing.
///
/// # Example
///
/// ```
/// use reposcope::github::pagination::{FIRST_PAGE, PageCursor};
///
/// let mut cursor = PageCursor::new(2);
/// assert_eq!(cursor.next_page(), FIRST_PAGE);
/// assert!(!cursor.has_next_page());
///
/// cursor.record_page(2);
/// assert!(cursor.has_next_page());
/// assert_eq!(cursor.next_page(), FIRST_PAGE + 1);
///
/// cursor.record_page(1);
/// assert!(!cursor.has_next_page());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    per_page: u8,
    loaded_pages: u32,
    last_page_len: Option<usize>,
}

impl PageCursor {
    /// Creates a cursor that has not loaded any page yet.
    #[must_use]
    pub const fn new(per_page: u8) -> Self {
        Self {
            per_page,
            loaded_pages: 0,
            last_page_len: None,
        }
    }

    /// Items requested per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Page index the next request must ask for.
    #[must_use]
    pub const fn next_page(&self) -> u32 {
        FIRST_PAGE.saturating_add(self.loaded_pages)
    }

    /// Returns true when at least one page is loaded and the last one was
    /// full.
    ///
    /// Before the first page resolves nothing is known about further pages,
    /// so this returns false; the first page is requested through activation
    /// instead.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.last_page_len
            .is_some_and(|len| len == usize::from(self.per_page))
    }

    /// Records a successfully fetched page of `len` items.
    pub const fn record_page(&mut self, len: usize) {
        self.loaded_pages = self.loaded_pages.saturating_add(1);
        self.last_page_len = Some(len);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{FIRST_PAGE, PageCursor};

    #[test]
    fn fresh_cursor_points_at_first_page() {
        let cursor = PageCursor::new(100);
        assert_eq!(cursor.next_page(), FIRST_PAGE);
        assert!(!cursor.has_next_page());
    }

    #[test]
    fn cursor_advances_by_one_per_recorded_page() {
        let mut cursor = PageCursor::new(3);
        for expected in 0..4_u32 {
            assert_eq!(cursor.next_page(), FIRST_PAGE + expected);
            cursor.record_page(3);
        }
        assert_eq!(cursor.next_page(), FIRST_PAGE + 4);
    }

    #[rstest]
    #[case::full_page(100, true)]
    #[case::short_page(99, false)]
    #[case::single_item(1, false)]
    #[case::empty_page(0, false)]
    fn last_page_length_decides_whether_more_exist(#[case] len: usize, #[case] expected: bool) {
        let mut cursor = PageCursor::new(100);
        cursor.record_page(len);
        assert_eq!(cursor.has_next_page(), expected);
    }
}

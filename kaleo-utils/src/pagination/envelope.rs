//! Normalized page envelope and query-parameter types.

use super::DEFAULT_PAGE_SIZE;

/// One page of a server-paginated collection.
///
/// `total_items` and `total_pages` are whatever the provider reported for
/// this fetch; the client never derives them from older responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items for this page only, in server order.
    pub items: Vec<T>,
    /// Zero-based index of this page.
    pub page_index: usize,
    /// Requested page size.
    pub page_size: usize,
    /// Total item count across all pages at query time.
    pub total_items: usize,
    /// Total page count at query time.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Build an envelope from items plus provider-reported counters.
    pub fn new(
        items: Vec<T>,
        page_index: usize,
        page_size: usize,
        total_items: usize,
        total_pages: usize,
    ) -> Self {
        Self {
            items,
            page_index,
            page_size,
            total_items,
            total_pages,
        }
    }

    /// Whether this is the first page.
    pub fn is_first(&self) -> bool {
        self.page_index == 0
    }

    /// Whether this is the last page.
    ///
    /// An empty collection has no pages, so its single envelope is last.
    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.page_index + 1 >= self.total_pages
    }

    /// Whether this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The numeric counters of this envelope, for strategy input.
    pub fn info(&self) -> PageInfo {
        PageInfo {
            page_index: self.page_index,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Numeric counters of one page envelope, detached from its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based index of this page.
    pub page_index: usize,
    /// Requested page size.
    pub page_size: usize,
    /// Total item count across all pages at query time.
    pub total_items: usize,
    /// Total page count at query time.
    pub total_pages: usize,
}

/// Query parameters identifying one paginated fetch.
///
/// Compared by value to decide whether a new fetch must be issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Zero-based page index to request.
    pub page: usize,
    /// Page size to request.
    pub size: usize,
    /// Optional full-text filter.
    pub search: Option<String>,
}

impl PageQuery {
    /// First page of the given size, unfiltered.
    pub fn new(size: usize) -> Self {
        Self {
            page: 0,
            size,
            search: None,
        }
    }

    /// Same size and search, different page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Change the page size and reset to the first page.
    ///
    /// An index valid under the old size may not exist under the new one.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self.page = 0;
        self
    }

    /// Change the search filter and reset to the first page.
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search;
        self.page = 0;
        self
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_flags() {
        let page: Page<u32> = Page::new(vec![1, 2], 0, 2, 5, 3);
        assert!(page.is_first());
        assert!(!page.is_last());

        let page: Page<u32> = Page::new(vec![5], 2, 2, 5, 3);
        assert!(!page.is_first());
        assert!(page.is_last());
    }

    #[test]
    fn empty_collection_is_first_and_last() {
        let page: Page<u32> = Page::new(vec![], 0, 10, 0, 0);
        assert!(page.is_first());
        assert!(page.is_last());
        assert!(page.is_empty());
    }

    #[test]
    fn changing_size_resets_page() {
        let query = PageQuery::new(10).with_page(3).with_size(20);
        assert_eq!(query.page, 0);
        assert_eq!(query.size, 20);
    }

    #[test]
    fn changing_search_resets_page() {
        let query = PageQuery::new(6)
            .with_page(2)
            .with_search(Some("choir".to_owned()));
        assert_eq!(query.page, 0);
        assert_eq!(query.search.as_deref(), Some("choir"));
    }

    #[test]
    fn unchanged_queries_compare_equal() {
        let a = PageQuery::new(10).with_page(1);
        let b = PageQuery::new(10).with_page(1);
        assert_eq!(a, b);
    }
}

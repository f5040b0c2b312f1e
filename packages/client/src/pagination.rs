// ABOUTME: Pagination types for the paged list endpoints
// ABOUTME: Query parameter clamping plus the server's page envelope payload

use serde::{Deserialize, Serialize};

/// Default page size used by every entity list view
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Maximum page size to prevent oversized requests
pub const MAX_PAGE_SIZE: u32 = 100;

/// Minimum page number (1-indexed)
pub const MIN_PAGE: u32 = 1;

/// Query parameters for paged list requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub page_size: u32,
}

impl PageQuery {
    /// Create a query for the first page with the default page size
    pub fn new() -> Self {
        Self {
            page: MIN_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a query with explicit values, normalized into valid ranges
    pub fn with_page_and_size(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(MIN_PAGE),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Same query pointed at a different page
    pub fn at_page(self, page: u32) -> Self {
        Self {
            page: page.max(MIN_PAGE),
            ..self
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// One page of a collection plus paging metadata, as sent by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items for the current page; never more than `page_size`
    pub items: Vec<T>,

    /// Total number of items across all pages
    pub total_items: u64,

    /// Current page number (1-indexed)
    pub page: u32,

    /// Total number of pages; 1 for an empty collection
    pub total_pages: u32,

    /// Items per page
    pub page_size: u32,
}

impl<T> Page<T> {
    /// An empty first page, used when a list fetch fails
    pub fn empty(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            page: MIN_PAGE,
            total_pages: 1,
            page_size,
        }
    }

    /// Whether a later page exists
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists
    pub fn has_previous(&self) -> bool {
        self.page > MIN_PAGE
    }
}

/// Clamp a requested page number into `[1, total_pages]`
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(MIN_PAGE, total_pages.max(MIN_PAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_page_query() {
        let query = PageQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_query_normalization() {
        // Zero page snaps to 1
        let query = PageQuery::with_page_and_size(0, 10);
        assert_eq!(query.page, 1);

        // Oversized page size clamps down
        let query = PageQuery::with_page_and_size(1, 500);
        assert_eq!(query.page_size, MAX_PAGE_SIZE);

        // Zero page size clamps up
        let query = PageQuery::with_page_and_size(1, 0);
        assert_eq!(query.page_size, 1);
    }

    #[test]
    fn test_page_boundaries() {
        let page: Page<String> = Page {
            items: vec!["a".to_string(), "b".to_string()],
            total_items: 12,
            page: 2,
            total_pages: 3,
            page_size: 5,
        };

        assert!(page.has_next());
        assert!(page.has_previous());

        let last = Page::<String> { page: 3, ..page.clone() };
        assert!(!last.has_next());
        assert!(last.has_previous());

        let first = Page::<String> { page: 1, ..page };
        assert!(first.has_next());
        assert!(!first.has_previous());
    }

    #[test]
    fn test_empty_page_reports_one_total_page() {
        let page: Page<String> = Page::empty(5);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        // Degenerate total still yields a valid page
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_page_wire_shape() {
        let json = r#"{"items":[],"totalItems":12,"page":2,"totalPages":3,"pageSize":5}"#;
        let page: Page<serde_json::Value> = serde_json::from_str(json).unwrap();

        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page_size, 5);
    }
}

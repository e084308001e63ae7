//! Shared pagination and filtering contract for graph and ledger listings.

use serde::{Deserialize, Serialize};

/// Default page size for listings.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size for listings.
pub const MAX_PAGE_SIZE: i64 = 500;

/// 1-based page parameters, clamped into valid ranges.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageParams {
    /// Build from optional query values, clamping page ≥ 1 and
    /// 1 ≤ page_size ≤ [`MAX_PAGE_SIZE`].
    pub fn clamped(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// SQL OFFSET for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// SQL LIMIT for this page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// One page of a filtered listing.
///
/// `total_count` is the match count under the filter, pre-pagination; a
/// page past the end carries empty `items` with `total_count` unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
}

impl<T> Page<T> {
    /// Total pages under the given page size (`ceil(total / size)`).
    pub fn total_pages(&self, page_size: i64) -> i64 {
        if page_size <= 0 {
            return 0;
        }
        (self.total_count + page_size - 1) / page_size
    }
}

/// Normalize a free-text search term: trimmed, with empty/whitespace-only
/// input meaning "no filter".
pub fn normalize_search(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_and_page_size() {
        let p = PageParams::clamped(Some(0), Some(0));
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 1);

        let p = PageParams::clamped(Some(-5), Some(10_000));
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, MAX_PAGE_SIZE);

        let p = PageParams::clamped(None, None);
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn offset_is_zero_based() {
        let p = PageParams::clamped(Some(3), Some(20));
        assert_eq!(p.offset(), 40);
        assert_eq!(p.limit(), 20);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::<i32> {
            items: vec![],
            total_count: 45,
        };
        assert_eq!(page.total_pages(20), 3);

        let exact = Page::<i32> {
            items: vec![],
            total_count: 40,
        };
        assert_eq!(exact.total_pages(20), 2);

        let empty = Page::<i32> {
            items: vec![],
            total_count: 0,
        };
        assert_eq!(empty.total_pages(20), 0);
    }

    #[test]
    fn normalize_search_drops_blank_terms() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("")), None);
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(Some("  folha ")), Some("folha".to_string()));
    }
}

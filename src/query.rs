//! List Query State
//!
//! Search/filter/pagination state shared by every resource list, and the
//! generation tokens that reject stale fetch results.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::cell::Cell;
use std::rc::Rc;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current query for one resource list.
///
/// `page_index` is 0-based; the offset sent to the server is
/// `page_index * page_size`. Changing the search text or category filter
/// always returns to the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub search: String,
    pub category: Option<String>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    pub fn offset(&self) -> u64 {
        (self.page_index * self.page_size) as u64
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page_index = 0;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.page_index = 0;
    }

    /// Advance to the next page. Only permitted when the last fetch
    /// returned a full page; returns false (unchanged) otherwise.
    pub fn try_next(&mut self, last_page_len: usize) -> bool {
        if last_page_len == self.page_size {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    pub fn try_prev(&mut self) -> bool {
        if self.page_index > 0 {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Derived query string, e.g. `q=dune&category=scifi&limit=10&offset=20`.
    pub fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.trim().is_empty() {
            parts.push(format!(
                "q={}",
                utf8_percent_encode(self.search.trim(), NON_ALPHANUMERIC)
            ));
        }
        if let Some(category) = self.category.as_deref() {
            if !category.is_empty() {
                parts.push(format!(
                    "category={}",
                    utf8_percent_encode(category, NON_ALPHANUMERIC)
                ));
            }
        }
        parts.push(format!("limit={}", self.page_size));
        parts.push(format!("offset={}", self.offset()));
        parts.join("&")
    }
}

/// Opaque handle identifying one issued list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Single-slot staleness guard: at most one list fetch is "current" per
/// resource list. Beginning a new fetch supersedes all earlier tokens, so a
/// slow response that lands after a newer request can never overwrite the
/// newer result.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    current: Rc<Cell<u64>>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede any in-flight fetch and mark a new one current.
    pub fn begin(&self) -> FetchToken {
        let next = self.current.get() + 1;
        self.current.set(next);
        FetchToken(next)
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        self.current.get() == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_change_resets_page() {
        let mut query = PageQuery::default();
        query.try_next(DEFAULT_PAGE_SIZE);
        query.try_next(DEFAULT_PAGE_SIZE);
        assert_eq!(query.page_index, 2);

        query.set_search("Inception".to_string());
        assert_eq!(query.page_index, 0);
    }

    #[test]
    fn category_change_resets_page() {
        let mut query = PageQuery::default();
        query.try_next(DEFAULT_PAGE_SIZE);
        query.set_category(Some("thriller".to_string()));
        assert_eq!(query.page_index, 0);
    }

    #[test]
    fn next_requires_full_page() {
        let mut query = PageQuery::default();
        assert!(!query.try_next(3));
        assert_eq!(query.page_index, 0);
        assert!(query.try_next(DEFAULT_PAGE_SIZE));
        assert_eq!(query.page_index, 1);
    }

    #[test]
    fn prev_stops_at_first_page() {
        let mut query = PageQuery::default();
        assert!(!query.try_prev());
        query.try_next(DEFAULT_PAGE_SIZE);
        assert!(query.try_prev());
        assert_eq!(query.page_index, 0);
    }

    #[test]
    fn query_string_encodes_search_and_offset() {
        let mut query = PageQuery::default();
        query.set_search("dark knight".to_string());
        query.set_category(Some("action".to_string()));
        query.try_next(DEFAULT_PAGE_SIZE);
        assert_eq!(
            query.query_string(),
            "q=dark%20knight&category=action&limit=10&offset=10"
        );
    }

    #[test]
    fn query_string_omits_empty_filters() {
        let query = PageQuery::default();
        assert_eq!(query.query_string(), "limit=10&offset=0");
    }

    #[test]
    fn stale_token_is_rejected() {
        let guard = FetchGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }
}

//! Page/page-size normalization for list endpoints.
//!
//! Out-of-range values never error: they fall back to the defaults so a
//! listing request always succeeds.

use serde::Serialize;

/// First page, used when the requested page is absent or below 1.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the requested size is absent, unparsable or out of range.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A normalized page request. Construct via [`PageRequest::normalize`] or
/// [`PageRequest::from_raw`]; both guarantee `page >= 1` and
/// `1 <= page_size <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Apply defaults to already-parsed values.
    pub fn normalize(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p,
            _ => DEFAULT_PAGE,
        };
        let page_size = match page_size {
            Some(s) if (1..=MAX_PAGE_SIZE).contains(&s) => s,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    /// Normalize raw query-string values. Unparsable input is treated as absent.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|s| s.trim().parse::<i64>().ok());
        Self::normalize(parse(page), parse(page_size))
    }

    /// SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// SQL `OFFSET`: `(page - 1) * page_size`, saturating on absurd pages.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        let req = PageRequest::normalize(None, None);
        assert_eq!(req, PageRequest::default());
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 20);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn page_below_one_falls_back_to_first_page() {
        assert_eq!(PageRequest::normalize(Some(0), None).page, 1);
        assert_eq!(PageRequest::normalize(Some(-7), None).page, 1);
    }

    #[test]
    fn page_size_out_of_range_falls_back_to_default() {
        assert_eq!(PageRequest::normalize(None, Some(500)).page_size, 20);
        assert_eq!(PageRequest::normalize(None, Some(0)).page_size, 20);
        assert_eq!(PageRequest::normalize(None, Some(-1)).page_size, 20);
    }

    #[test]
    fn page_size_bounds_are_inclusive() {
        assert_eq!(PageRequest::normalize(None, Some(1)).page_size, 1);
        assert_eq!(PageRequest::normalize(None, Some(100)).page_size, 100);
        assert_eq!(PageRequest::normalize(None, Some(101)).page_size, 20);
    }

    #[test]
    fn offset_is_page_minus_one_times_size() {
        let req = PageRequest::normalize(Some(3), Some(25));
        assert_eq!(req.limit(), 25);
        assert_eq!(req.offset(), 50);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let req = PageRequest::normalize(Some(i64::MAX), Some(100));
        assert_eq!(req.offset(), i64::MAX);
    }

    #[test]
    fn raw_values_are_parsed() {
        let req = PageRequest::from_raw(Some("2"), Some("50"));
        assert_eq!(req, PageRequest { page: 2, page_size: 50 });
    }

    #[test]
    fn unparsable_raw_values_use_defaults() {
        let req = PageRequest::from_raw(Some("two"), Some("lots"));
        assert_eq!(req, PageRequest::default());
    }
}

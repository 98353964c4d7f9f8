//! Pagination utilities for service layer
//!
//! `Pagination` normalizes raw inputs; `PageResult` is the page envelope
//! returned by listing operations.

use serde::Serialize;

use crate::errors::ServiceError;

/// Hard upper bound on page size regardless of configuration.
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp page to >= 1 and page size to `MAX_PER_PAGE`, returning a
    /// 0-based page index. A zero page size is left alone; it is rejected
    /// when page counts are computed.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.min(MAX_PER_PAGE);
        ((page - 1) as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}

/// Number of pages needed for `total` items at `per_page` items each.
pub fn page_count(total: u64, per_page: u64) -> Result<u64, ServiceError> {
    let full = total
        .checked_div(per_page)
        .ok_or_else(|| ServiceError::Arithmetic("attempt to divide by zero: page size is 0".into()))?;
    let rest = total.checked_rem(per_page).unwrap_or(0);
    Ok(if rest == 0 { full } else { full + 1 })
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub records: Vec<T>,
    /// 1-based
    pub current: u64,
    pub pages: u64,
    pub size: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PageResult<T> {
    pub fn new(records: Vec<T>, current: u64, size: u64, total: u64) -> Result<Self, ServiceError> {
        let pages = page_count(total, size)?;
        Ok(Self {
            records,
            current,
            pages,
            size,
            total,
            has_next: current < pages,
            has_previous: current > 1,
        })
    }
}

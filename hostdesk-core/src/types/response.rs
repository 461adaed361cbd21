//! 分页相关类型定义

use serde::{Deserialize, Serialize};

/// Pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl PaginationParams {
    #[must_use]
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `>= 1`
    #[must_use]
    pub fn validated(&self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.max(1),
        }
    }
}

/// A paginated response wrapper.
///
/// Contains the current page of items along with pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// `ceil(total_count / page_size)`
    pub total_pages: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, automatically computing `total_pages` and `has_more`.
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let page_size = page_size.max(1);
        let has_more = u64::from(page) * u64::from(page_size) < u64::from(total_count);
        Self {
            items,
            page,
            page_size,
            total_count,
            total_pages: total_count.div_ceil(page_size),
            has_more,
        }
    }
}

impl<T: Clone> PaginatedResponse<T> {
    /// Cut one page out of an already ordered sequence.
    ///
    /// Pages past the end come back empty with the real totals.
    pub fn from_slice(all: &[T], params: PaginationParams) -> Self {
        let params = params.validated();
        let total_count = u32::try_from(all.len()).unwrap_or(u32::MAX);
        let start = (params.page as usize - 1).saturating_mul(params.page_size as usize);
        let items = all
            .iter()
            .skip(start)
            .take(params.page_size as usize)
            .cloned()
            .collect();
        Self::new(items, params.page, params.page_size, total_count)
    }
}

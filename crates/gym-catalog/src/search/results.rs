//! Pagination math.

use serde::{Deserialize, Serialize};

/// Pagination info for the catalog list.
///
/// Pages are 0-based internally; the address bar carries `page + 1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (0-indexed), clamped into range.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u64,
    /// Total number of pages, `ceil(total / per_page)`.
    pub total_pages: u32,
}

impl Pagination {
    /// Create pagination info, clamping `page` into `[0, total_pages - 1]`.
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page as u64).min(u32::MAX as u64) as u32;
        let page = page.min(total_pages.saturating_sub(1));

        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// The 1-based `offset` query value for the current page.
    pub fn offset_param(&self) -> u32 {
        self.page + 1
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// 1-based page labels to display around the current page.
    pub fn page_numbers(&self, max_visible: u32) -> Vec<u32> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let current = self.page + 1;
        let half = max_visible / 2;
        let start = current.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// 1-based number of the first item on this page.
    pub fn start_item(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            self.page as u64 * self.per_page as u64 + 1
        }
    }

    /// 1-based number of the last item on this page.
    pub fn end_item(&self) -> u64 {
        ((self.page as u64 + 1) * self.per_page as u64).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, crate::limits::PAGE_SIZE, 0)
    }
}

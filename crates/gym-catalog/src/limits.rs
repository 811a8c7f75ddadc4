//! Catalog sizing and validation constants.

use serde::{Deserialize, Serialize};

use crate::search::{Pagination, PriceRange};

/// Products per catalog page.
pub const PAGE_SIZE: u32 = 20;

/// Highest price accepted from the query string.
pub const PRICE_CEILING: f64 = 10_000.0;

/// Price slider position before the user touches it and after a reset.
pub const DEFAULT_PRICE_RANGE: PriceRange = PriceRange {
    from: 1000.0,
    to: 9000.0,
};

/// Viewports at or below this width get the mobile filter panel.
pub const MOBILE_BREAKPOINT: u32 = 820;

/// Limits injected into the catalog page container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogLimits {
    /// Products per page.
    pub page_size: u32,
    /// Inclusive upper bound for `priceFrom` / `priceTo`.
    pub price_ceiling: f64,
    /// Default slider range.
    pub default_price_range: PriceRange,
    /// Mobile layout breakpoint in pixels.
    pub mobile_breakpoint: u32,
}

impl Default for CatalogLimits {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            price_ceiling: PRICE_CEILING,
            default_price_range: DEFAULT_PRICE_RANGE,
            mobile_breakpoint: MOBILE_BREAKPOINT,
        }
    }
}

impl CatalogLimits {
    /// A query price bound is usable iff it is a finite number in `[0, ceiling]`.
    pub fn is_valid_price(&self, value: f64) -> bool {
        value.is_finite() && value >= 0.0 && value <= self.price_ceiling
    }

    /// Number of pages needed for `count` products.
    pub fn pages_count(&self, count: u64) -> u32 {
        Pagination::new(0, self.page_size, count).total_pages
    }

    /// Clamp a requested 0-based page into `[0, pages_count - 1]`.
    pub fn clamp_page(&self, requested: u32, count: u64) -> u32 {
        Pagination::new(requested, self.page_size, count).page
    }
}

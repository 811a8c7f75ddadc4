//! Sort modes and catalog service requests.

use serde::{Deserialize, Serialize};

use crate::search::FacetSet;

/// Query-string parameter names shared with the address bar.
pub mod params {
    /// 1-based page number.
    pub const OFFSET: &str = "offset";
    /// Sort mode.
    pub const FIRST: &str = "first";
    /// Lower price bound.
    pub const PRICE_FROM: &str = "priceFrom";
    /// Upper price bound.
    pub const PRICE_TO: &str = "priceTo";
    /// Gym manufacturer titles.
    pub const GYM: &str = "gym";
    /// Parts manufacturer titles.
    pub const PARTS: &str = "parts";

    /// Parameters owned by the filter panel.
    pub const FILTERS: [&str; 4] = [GYM, PARTS, PRICE_FROM, PRICE_TO];
}

/// Catalog service paths.
pub mod paths {
    /// Paginated, filterable part list.
    pub const PARTS: &str = "/gym-parts";
    /// Single part lookup prefix.
    pub const FIND: &str = "/gym-parts/find";
    /// Dashboard bestsellers.
    pub const BESTSELLERS: &str = "/gym-parts/bestsellers";
    /// Dashboard new arrivals.
    pub const NEW: &str = "/gym-parts/new";
}

/// Client-side ordering of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Price, low to high.
    #[default]
    Cheap,
    /// Price, high to low.
    Expensive,
    /// Popularity, high to low.
    Popular,
}

impl SortMode {
    /// All modes, in selector order.
    pub const ALL: [SortMode; 3] = [SortMode::Cheap, SortMode::Expensive, SortMode::Popular];

    /// Read the `first` parameter; missing or unknown values mean `cheap`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("expensive") => SortMode::Expensive,
            Some("popular") => SortMode::Popular,
            _ => SortMode::Cheap,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Cheap => "cheap",
            SortMode::Expensive => "expensive",
            SortMode::Popular => "popular",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Cheap => "Сначала дешевые",
            SortMode::Expensive => "Сначала дорогие",
            SortMode::Popular => "По популярности",
        }
    }
}

/// A request for one page of the part list.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRequest {
    /// Page size.
    pub limit: u32,
    /// 0-based page index.
    pub offset: u32,
    /// Facets restricting the result.
    pub facets: FacetSet,
}

impl CatalogRequest {
    /// Unfiltered request for a page.
    pub fn page(offset: u32, limit: u32) -> Self {
        Self {
            limit,
            offset,
            facets: FacetSet::none(),
        }
    }

    /// Restrict the request to the given facets.
    pub fn with_facets(mut self, facets: FacetSet) -> Self {
        self.facets = facets;
        self
    }

    /// Path and query understood by the catalog service.
    pub fn to_path(&self) -> String {
        let mut path = format!("{}?limit={}&offset={}", paths::PARTS, self.limit, self.offset);
        for (key, value) in self.facets.wire_params() {
            path.push('&');
            path.push_str(key);
            path.push('=');
            path.push_str(&value);
        }
        path
    }
}

/// Path for a single part lookup.
pub fn find_path(id: impl std::fmt::Display) -> String {
    format!("{}/{}", paths::FIND, id)
}

//! Catalog state and URL query reconciliation for the Gym Service storefront.
//!
//! This crate provides the client-side layer of the storefront:
//!
//! - **Catalog**: Products, listings, manufacturer filter entries
//! - **Search**: Query-string codec, filter facets, sort modes, pagination
//! - **Stores**: Manufacturer filters, product list with request tokens
//! - **Pages**: Catalog, part detail and dashboard containers
//! - **Panel**: Desktop/mobile filter panel view model
//!
//! Side effects go through three injected ports: [`CatalogApi`] (the remote
//! catalog service), [`Router`] (the address bar) and [`Notifier`] (toasts).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gym_catalog::prelude::*;
//!
//! let router = Arc::new(MemoryRouter::from_url("/catalog?offset=2&priceFrom=1500&priceTo=3000"));
//! let page = CatalogPage::new(api, router.clone(), notifier, CatalogLimits::default());
//!
//! page.mount().await;
//! assert_eq!(page.snapshot().price.range, PriceRange::new(1500.0, 3000.0));
//! ```

pub mod error;
pub mod ids;
pub mod limits;

pub mod api;
pub mod notify;
pub mod router;

pub mod catalog;
pub mod search;
pub mod store;

pub mod pages;
pub mod panel;
mod reconcile;

#[cfg(test)]
mod test_support;

pub use api::CatalogApi;
pub use error::{CatalogError, CatalogResult};
pub use ids::*;
pub use limits::CatalogLimits;
pub use notify::{Notification, NotificationLevel, NotificationLog, Notifier, INVALID_FILTER_URL};
pub use reconcile::{remove_filter_params, ApplyPlan};
pub use router::{MemoryRouter, Navigation, NavigationKind, Router};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::CatalogApi;
    pub use crate::error::{CatalogError, CatalogResult};
    pub use crate::ids::*;
    pub use crate::limits::CatalogLimits;
    pub use crate::notify::{Notification, NotificationLevel, NotificationLog, Notifier};
    pub use crate::router::{MemoryRouter, Router};

    // Catalog
    pub use crate::catalog::{ManufacturerEntry, ManufacturerList, Product, ProductListing};

    // Search
    pub use crate::search::{CatalogRequest, FacetSet, Pagination, PriceRange, QueryMap, SortMode};

    // Stores
    pub use crate::store::{
        FilteredProductListStore, ManufacturerFilterStore, PriceFilter, ProductListStore,
        RequestToken,
    };

    // Pages
    pub use crate::pages::{
        CatalogPage, CatalogState, DashboardPage, DashboardState, PartPage, PartView,
    };
    pub use crate::panel::{FilterPanel, ManufacturerChip, PanelLayout, PanelView};
}

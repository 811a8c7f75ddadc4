//! State stores.
//!
//! Plain owned containers; every mutation goes through a named operation.
//! The page containers own one of each behind a lock.

mod manufacturers;
mod products;

pub use manufacturers::{ManufacturerFilterStore, PriceFilter};
pub use products::{FilteredProductListStore, ProductListStore, RequestToken};

//! Catalog module.
//!
//! Contains products, listings and manufacturer filter entries.

mod manufacturer;
mod product;

pub use manufacturer::{
    seed_entries, ManufacturerEntry, ManufacturerList, GYM_MANUFACTURERS, PARTS_MANUFACTURERS,
};
pub use product::{format_price, Product, ProductListing};

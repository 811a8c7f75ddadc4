//! Page containers.
//!
//! Each container owns its state and talks to the outside world only
//! through the injected ports.

mod catalog;
mod dashboard;
mod part;

pub use catalog::{CatalogPage, CatalogState};
pub use dashboard::{DashboardPage, DashboardState};
pub use part::{PartPage, PartView};

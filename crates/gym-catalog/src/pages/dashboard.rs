//! Dashboard (landing) page.

use std::sync::{Arc, Mutex, PoisonError};

use crate::api::CatalogApi;
use crate::catalog::ProductListing;
use crate::notify::{Notification, Notifier};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub bestsellers: ProductListing,
    pub new_arrivals: ProductListing,
    pub spinner: bool,
}

/// Landing page with the bestseller and new-arrival sliders.
pub struct DashboardPage {
    api: Arc<dyn CatalogApi>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<DashboardState>,
}

impl DashboardPage {
    pub fn new(api: Arc<dyn CatalogApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            state: Mutex::new(DashboardState::default()),
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn update(&self, f: impl FnOnce(&mut DashboardState)) {
        f(&mut self.state.lock().unwrap_or_else(PoisonError::into_inner));
    }

    /// Fetch both sliders concurrently. On failure both stay empty.
    pub async fn load(&self) {
        self.update(|s| s.spinner = true);

        let result = futures::try_join!(self.api.bestsellers(), self.api.new_arrivals());
        match result {
            Ok((bestsellers, new_arrivals)) => self.update(|s| {
                s.bestsellers = bestsellers;
                s.new_arrivals = new_arrivals;
            }),
            Err(err) => {
                tracing::error!(error = %err, "Failed to load dashboard");
                self.notifier.notify(Notification::from(&err));
            }
        }

        self.update(|s| s.spinner = false);
    }
}

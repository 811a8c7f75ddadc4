//! Part detail page.

use std::sync::{Arc, Mutex, PoisonError};

use crate::api::CatalogApi;
use crate::catalog::Product;
use crate::ids::PartId;
use crate::notify::{Notification, Notifier};

/// Site name used in page titles.
pub const SITE_NAME: &str = "Gym Service";

/// What the detail page shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PartView {
    /// Nothing loaded yet, or the last load failed.
    #[default]
    Loading,
    Found(Box<Product>),
    /// The service has no part with this id.
    NotFound,
}

impl PartView {
    pub fn product(&self) -> Option<&Product> {
        match self {
            PartView::Found(product) => Some(product),
            _ => None,
        }
    }
}

pub struct PartPage {
    api: Arc<dyn CatalogApi>,
    notifier: Arc<dyn Notifier>,
    view: Mutex<PartView>,
}

impl PartPage {
    pub fn new(api: Arc<dyn CatalogApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            view: Mutex::new(PartView::default()),
        }
    }

    /// Fetch the part and update the view.
    ///
    /// A missing part renders the not-found view without a notification;
    /// a failed request notifies and keeps the previous view.
    pub async fn load(&self, id: PartId) -> PartView {
        match self.api.find_part(id).await {
            Ok(Some(product)) => self.set_view(PartView::Found(Box::new(product))),
            Ok(None) => {
                tracing::debug!(%id, "Part not found");
                self.set_view(PartView::NotFound)
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "Failed to load part");
                self.notifier.notify(Notification::from(&err));
                self.view()
            }
        }
    }

    pub fn view(&self) -> PartView {
        self.view.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_view(&self, view: PartView) -> PartView {
        *self.view.lock().unwrap_or_else(PoisonError::into_inner) = view.clone();
        view
    }

    /// Document title for the current view.
    pub fn title(&self) -> String {
        match self.view().product() {
            Some(product) => format!("{} | {}", SITE_NAME, product.name),
            None => SITE_NAME.to_string(),
        }
    }
}

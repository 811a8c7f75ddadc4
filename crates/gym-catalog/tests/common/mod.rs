//! Fakes shared by the page tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use gym_catalog::prelude::*;

pub fn part(id: i64, price: f64, popularity: i64) -> Product {
    Product {
        id: PartId::new(id),
        gym_manufacturer: "Technogym".to_string(),
        price,
        parts_manufacturer: "Grips".to_string(),
        vendor_code: format!("VC-{}", id),
        name: format!("Part {}", id),
        description: String::new(),
        images: "[]".to_string(),
        in_stock: 1,
        bestseller: false,
        is_new: false,
        popularity,
        compatibility: String::new(),
    }
}

pub fn titles(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// In-memory catalog of `total` parts that records every request path.
///
/// Part `n` costs `(n * 37) % 1000` and has popularity `n % 7`, so pages
/// arrive in neither price nor popularity order.
#[derive(Default)]
pub struct FakeCatalogApi {
    total: u64,
    requests: Mutex<Vec<String>>,
    failure: Mutex<Option<String>>,
    gates: Mutex<HashMap<u32, Arc<Notify>>>,
    parts: HashMap<i64, Product>,
}

impl FakeCatalogApi {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn with_part(mut self, product: Product) -> Self {
        self.parts.insert(product.id.get(), product);
        self
    }

    /// Make every following call fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Hold fetches of `page` until the returned handle is notified.
    pub fn gate_page(&self, page: u32) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(page, gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn check_failure(&self) -> CatalogResult<()> {
        match self.failure.lock().unwrap().clone() {
            Some(message) => Err(CatalogError::Fetch(message)),
            None => Ok(()),
        }
    }

    fn page_rows(&self, offset: u32, limit: u32) -> Vec<Product> {
        let start = offset as u64 * limit as u64;
        let end = (start + limit as u64).min(self.total);
        (start..end)
            .map(|i| {
                let id = i as i64 + 1;
                part(id, ((id * 37) % 1000) as f64, id % 7)
            })
            .collect()
    }
}

#[async_trait]
impl CatalogApi for FakeCatalogApi {
    async fn fetch_parts(&self, request: &CatalogRequest) -> CatalogResult<ProductListing> {
        self.requests.lock().unwrap().push(request.to_path());

        let gate = self.gates.lock().unwrap().get(&request.offset).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.check_failure()?;
        Ok(ProductListing::new(
            self.total,
            self.page_rows(request.offset, request.limit),
        ))
    }

    async fn find_part(&self, id: PartId) -> CatalogResult<Option<Product>> {
        self.requests
            .lock()
            .unwrap()
            .push(gym_catalog::search::find_path(id));
        self.check_failure()?;
        Ok(self.parts.get(&id.get()).cloned())
    }

    async fn bestsellers(&self) -> CatalogResult<ProductListing> {
        self.check_failure()?;
        Ok(ProductListing::new(2, vec![part(1, 100.0, 9), part(2, 200.0, 8)]))
    }

    async fn new_arrivals(&self) -> CatalogResult<ProductListing> {
        self.check_failure()?;
        Ok(ProductListing::new(1, vec![part(3, 300.0, 1)]))
    }
}

/// A catalog page wired to fakes.
pub struct Harness {
    pub api: Arc<FakeCatalogApi>,
    pub router: Arc<MemoryRouter>,
    pub notifications: Arc<NotificationLog>,
    pub page: Arc<CatalogPage>,
}

impl Harness {
    pub fn new(url: &str, total: u64) -> Self {
        Self::with_api(url, FakeCatalogApi::new(total))
    }

    pub fn with_api(url: &str, api: FakeCatalogApi) -> Self {
        let api = Arc::new(api);
        let router = Arc::new(MemoryRouter::from_url(url));
        let notifications = Arc::new(NotificationLog::new());
        let page = Arc::new(CatalogPage::new(
            api.clone(),
            router.clone(),
            notifications.clone(),
            CatalogLimits::default(),
        ));

        Self {
            api,
            router,
            notifications,
            page,
        }
    }

    pub fn checked(&self, list: ManufacturerList) -> Vec<String> {
        self.page.snapshot().manufacturers.checked_titles(list)
    }

    pub fn entry_id(&self, list: ManufacturerList, title: &str) -> ManufacturerId {
        self.page
            .snapshot()
            .manufacturers
            .entries(list)
            .iter()
            .find(|e| e.title == title)
            .map(|e| e.id.clone())
            .expect("seeded manufacturer")
    }

    pub fn check(&self, list: ManufacturerList, title: &str) {
        let id = self.entry_id(list, title);
        assert!(self.page.toggle_manufacturer(list, &id, true));
    }
}

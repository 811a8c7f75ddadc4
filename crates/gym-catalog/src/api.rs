//! Remote catalog service port.

use async_trait::async_trait;

use crate::catalog::{Product, ProductListing};
use crate::error::CatalogResult;
use crate::ids::PartId;
use crate::search::CatalogRequest;

/// The remote catalog service.
///
/// Implemented over HTTP by `gym-data`; tests use in-memory fakes.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of parts, optionally restricted by facets.
    async fn fetch_parts(&self, request: &CatalogRequest) -> CatalogResult<ProductListing>;

    /// Look up a single part. `Ok(None)` means the service has no such part.
    async fn find_part(&self, id: PartId) -> CatalogResult<Option<Product>>;

    /// Dashboard bestsellers.
    async fn bestsellers(&self) -> CatalogResult<ProductListing>;

    /// Dashboard new arrivals.
    async fn new_arrivals(&self) -> CatalogResult<ProductListing>;
}

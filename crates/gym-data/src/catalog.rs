//! [`CatalogApi`] over HTTP.

use async_trait::async_trait;
use gym_catalog::prelude::*;
use gym_catalog::search::{find_path, paths};

use crate::{FetchClient, FetchError};

/// The remote catalog service reached through a [`FetchClient`].
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: FetchClient,
}

impl HttpCatalogApi {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    async fn get_listing(&self, path: &str) -> Result<ProductListing, FetchError> {
        let listing: ProductListing = self
            .client
            .get(path)
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;

        tracing::debug!(path, count = listing.count, rows = listing.len(), "Fetched listing");
        Ok(listing)
    }

    /// Check that the service answers at all.
    pub async fn ping(&self) -> Result<u16, FetchError> {
        let response = self.client.head(paths::PARTS).send().await?;
        Ok(response.status)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_parts(&self, request: &CatalogRequest) -> CatalogResult<ProductListing> {
        Ok(self.get_listing(&request.to_path()).await?)
    }

    async fn find_part(&self, id: PartId) -> CatalogResult<Option<Product>> {
        let path = find_path(id);
        let part = self
            .client
            .get(path.as_str())
            .accept("application/json")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json_opt::<Product>())?;

        tracing::debug!(%id, found = part.is_some(), "Looked up part");
        Ok(part)
    }

    async fn bestsellers(&self) -> CatalogResult<ProductListing> {
        Ok(self.get_listing(paths::BESTSELLERS).await?)
    }

    async fn new_arrivals(&self) -> CatalogResult<ProductListing> {
        Ok(self.get_listing(paths::NEW).await?)
    }
}

//! HTTP client for the storefront catalog.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use storefront::products::{ProductDetails, ProductId, StockInfo};
use tracing::debug;

use crate::catalog::{CatalogError, CatalogService};

/// Configuration for connecting to the catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base address, e.g. `"http://localhost:3333"`.
    pub base_url: String,

    /// Upper bound on a single catalog request.
    pub timeout: Duration,
}

/// Catalog client speaking the `products/{id}` and `stock/{id}` JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    config: CatalogConfig,
    http: Client,
}

impl HttpCatalogClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &str,
        product: ProductId,
    ) -> Result<T, CatalogError> {
        let url = format!(
            "{}/{resource}/{product}",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(%url, "catalog request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(product));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedResponse(format!(
                "{resource} request failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogService for HttpCatalogClient {
    async fn product(&self, product: ProductId) -> Result<ProductDetails, CatalogError> {
        let details: ProductDetails = self.fetch("products", product).await?;

        if details.id != product {
            return Err(CatalogError::UnexpectedResponse(format!(
                "asked for product {product}, catalog returned {}",
                details.id
            )));
        }

        Ok(details)
    }

    async fn stock(&self, product: ProductId) -> Result<StockInfo, CatalogError> {
        self.fetch("stock", product).await
    }
}

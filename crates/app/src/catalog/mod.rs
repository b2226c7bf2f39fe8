//! Catalog Service

pub mod errors;
pub mod http;

use async_trait::async_trait;
use mockall::automock;
use storefront::products::{ProductDetails, ProductId, StockInfo};

pub use errors::CatalogError;
pub use http::{CatalogConfig, HttpCatalogClient};

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Resolve a product identifier to its catalog record.
    async fn product(&self, product: ProductId) -> Result<ProductDetails, CatalogError>;

    /// Current stock level for a product.
    async fn stock(&self, product: ProductId) -> Result<StockInfo, CatalogError>;
}

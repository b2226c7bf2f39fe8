//! Catalog errors.

use storefront::products::ProductId;
use thiserror::Error;

/// Errors that can occur when talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no record for the product.
    #[error("product {0} not found in catalog")]
    NotFound(ProductId),

    /// The catalog returned a non-2xx response or an unexpected body.
    #[error("unexpected response from catalog: {0}")]
    UnexpectedResponse(String),

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

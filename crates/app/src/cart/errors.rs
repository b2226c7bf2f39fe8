//! Cart store errors.

use storefront::{cart::CartError, codec::CodecError, products::ProductId};
use thiserror::Error;

use crate::{
    catalog::CatalogError,
    notifications::{CartOperation, NotificationKind},
    storage::StorageError,
};

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("product {0} is not in the cart")]
    NotFound(ProductId),

    #[error("requested {requested} units of product {product}, {available} in stock")]
    OutOfStock {
        product: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("catalog error")]
    Catalog(#[from] CatalogError),

    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("cart codec error")]
    Codec(#[from] CodecError),

    #[error("cart invariant violated")]
    Cart(#[source] CartError),

    #[error("cart store is closed")]
    Closed,
}

impl CartStoreError {
    /// Notification to publish when `operation` fails with this error.
    pub const fn notification(&self, operation: CartOperation) -> NotificationKind {
        match self {
            Self::OutOfStock { .. } => NotificationKind::OutOfStock,
            _ => operation.failure(),
        }
    }
}

impl From<CartError> for CartStoreError {
    fn from(error: CartError) -> Self {
        match error {
            CartError::ProductNotFound(product) => Self::NotFound(product),
            CartError::DuplicateProduct(_) | CartError::ZeroAmount(_) => Self::Cart(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_product_maps_to_not_found() {
        let error = CartStoreError::from(CartError::ProductNotFound(ProductId::new(3)));

        assert!(
            matches!(error, CartStoreError::NotFound(id) if id == ProductId::new(3)),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn out_of_stock_overrides_operation_notification() {
        let error = CartStoreError::OutOfStock {
            product: ProductId::new(1),
            requested: 5,
            available: 5,
        };

        assert_eq!(
            error.notification(CartOperation::UpdateProductAmount),
            NotificationKind::OutOfStock
        );
        assert_eq!(
            CartStoreError::Closed.notification(CartOperation::RemoveProduct),
            NotificationKind::RemoveProductFailed
        );
    }
}

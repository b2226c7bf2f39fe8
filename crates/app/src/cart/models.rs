//! Cart Store Models

use storefront::products::ProductId;

/// Key the cart blob is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "@storefront:cart";

/// Request to change the number of units held for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,

    /// Requested number of units. Zero is ignored.
    pub amount: u32,
}

/// Cart store settings.
#[derive(Debug, Clone)]
pub struct CartStoreConfig {
    /// Durable store key holding the serialized cart.
    pub storage_key: String,

    /// Commands that may queue up behind the one in progress.
    pub queue_capacity: usize,

    /// Notifications buffered for a slow subscriber before it lags.
    pub notification_capacity: usize,
}

impl Default for CartStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            queue_capacity: 64,
            notification_capacity: 16,
        }
    }
}

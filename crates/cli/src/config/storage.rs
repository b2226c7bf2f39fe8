//! Storage Config

use clap::Args;
use storefront_app::cart::DEFAULT_STORAGE_KEY;

/// Durable cart storage settings.
#[derive(Debug, Args)]
pub(crate) struct StorageArgs {
    /// File holding the durable key-value store
    #[arg(long, env = "CART_STORE_PATH", default_value = "cart.json")]
    pub store_path: String,

    /// Key the cart is stored under
    #[arg(long, env = "CART_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY)]
    pub storage_key: String,
}

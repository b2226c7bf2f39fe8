//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    cart::{CartStore, CartStoreConfig, CartStoreError},
    catalog::{CatalogConfig, CatalogError, HttpCatalogClient},
    storage::{JsonFileStore, StorageError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build catalog client")]
    Catalog(#[source] CatalogError),

    #[error("failed to open cart storage")]
    Storage(#[source] StorageError),

    #[error("failed to open cart store")]
    CartStore(#[source] CartStoreError),
}

/// Settings needed to wire up the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogConfig,

    /// File backing the durable key-value store.
    pub store_path: PathBuf,

    pub cart: CartStoreConfig,
}

#[derive(Debug, Clone)]
pub struct AppContext {
    pub cart: CartStore,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog client, the storage file or the cart store cannot be
    /// set up.
    pub async fn from_config(config: AppConfig) -> Result<Self, AppInitError> {
        let catalog = HttpCatalogClient::new(config.catalog).map_err(AppInitError::Catalog)?;

        let storage = JsonFileStore::open(config.store_path)
            .await
            .map_err(AppInitError::Storage)?;

        let cart = CartStore::open(Arc::new(catalog), Arc::new(storage), config.cart)
            .await
            .map_err(AppInitError::CartStore)?;

        Ok(Self { cart })
    }
}

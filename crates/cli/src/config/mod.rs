//! CLI configuration module

use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use storefront_app::{cart::CartStoreConfig, catalog::CatalogConfig, context::AppConfig};

use crate::config::{catalog::CatalogArgs, logging::LoggingConfig, storage::StorageArgs};

pub(crate) mod catalog;
pub(crate) mod logging;
pub(crate) mod storage;

/// Storefront cart client configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-cli", about = "Storefront cart client", long_about = None)]
pub(crate) struct CliConfig {
    /// Catalog service settings.
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Durable cart storage settings.
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Show the cart
    Show,

    /// Add one unit of a product
    Add {
        /// Catalog product id
        product: u64,
    },

    /// Remove a product from the cart
    Remove {
        /// Catalog product id
        product: u64,
    },

    /// Set the number of units held for a product already in the cart
    Update {
        /// Catalog product id
        product: u64,

        /// Requested number of units; zero leaves the cart untouched
        amount: u32,
    },
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Application wiring settings.
    pub(crate) fn app_config(&self) -> AppConfig {
        AppConfig {
            catalog: CatalogConfig {
                base_url: self.catalog.catalog_url.clone(),
                timeout: Duration::from_secs(self.catalog.catalog_timeout_seconds),
            },
            store_path: PathBuf::from(&self.storage.store_path),
            cart: CartStoreConfig {
                storage_key: self.storage.storage_key.clone(),
                ..CartStoreConfig::default()
            },
        }
    }
}

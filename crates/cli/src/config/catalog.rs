//! Catalog Config

use clap::Args;

/// Catalog service connection settings.
#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Catalog service base URL
    #[arg(long, env = "CATALOG_URL", default_value = "http://localhost:3333")]
    pub catalog_url: String,

    /// Catalog request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub catalog_timeout_seconds: u64,
}

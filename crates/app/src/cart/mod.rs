//! Cart Store

pub mod errors;
pub mod models;
pub mod service;
mod writer;

pub use errors::CartStoreError;
pub use models::{CartStoreConfig, DEFAULT_STORAGE_KEY, UpdateProductAmount};
pub use service::CartStore;

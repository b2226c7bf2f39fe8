//! Storage errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error")]
    Io(#[from] io::Error),

    #[error("storage file is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("value stored under {0} is not valid base64")]
    Encoding(String, #[source] base64::DecodeError),
}

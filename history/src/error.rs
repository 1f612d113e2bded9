use thiserror::Error;

use bitkit_store::StoreError;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("http error: {0}")]
    Http(String),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

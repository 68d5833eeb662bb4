//! Cart service errors.

use thiserror::Error;

use crate::storage::CartStoreError;

/// Errors from mutating the session cart.
#[derive(Debug, Error)]
pub enum CartServiceError {
    /// The cart store rejected the write.
    #[error("failed to persist cart")]
    Storage(#[from] CartStoreError),

    /// The cart could not be serialized.
    #[error("failed to encode cart")]
    Encode(#[from] serde_json::Error),
}

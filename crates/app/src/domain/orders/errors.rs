//! Orders service errors.

use lavanya::orders::{InvalidTransition, OrderId};
use thiserror::Error;

use crate::documents::DocumentStoreError;

/// Errors from the orders service.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// No stored order has this id.
    #[error("order {0} not found")]
    NotFound(OrderId),

    /// The status change is not allowed.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    /// The document store failed.
    #[error("order store error")]
    Store(#[from] DocumentStoreError),

    /// An order could not be converted to or from its document.
    #[error("failed to encode or decode order")]
    Codec(#[from] serde_json::Error),
}

//! Products service errors.

use lavanya::catalog::ProductValidationError;
use thiserror::Error;

use crate::documents::DocumentStoreError;

/// Errors from the products service.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// No product has the requested id.
    #[error("product not found")]
    NotFound,

    /// The admin form failed validation.
    #[error(transparent)]
    Invalid(#[from] ProductValidationError),

    /// The document store failed.
    #[error("product store error")]
    Store(#[from] DocumentStoreError),

    /// A product could not be converted to or from its document.
    #[error("failed to encode or decode product")]
    Codec(#[from] serde_json::Error),
}

//! Cart store errors.

use std::io;

use thiserror::Error;

/// Errors from reading or writing the persisted cart slot.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// Filesystem failure.
    #[error("cart storage i/o error")]
    Io(#[from] io::Error),

    /// The backing store refused the operation.
    #[error("cart storage unavailable: {0}")]
    Unavailable(String),
}

//! Document store errors.

use std::io;

use thiserror::Error;

/// Errors from the document store backends.
#[derive(Debug, Error)]
pub enum DocumentStoreError {
    /// The document to update does not exist.
    #[error("document {collection}/{id} not found")]
    NotFound {
        /// Collection name
        collection: String,
        /// Document id
        id: String,
    },

    /// Transport failure talking to the hosted store.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status, with the status and response body.
    #[error("unexpected response from document store: {0}")]
    UnexpectedResponse(String),

    /// Local file failure.
    #[error("document store i/o error")]
    Io(#[from] io::Error),

    /// Stored data is not valid JSON for the expected shape.
    #[error("malformed document data")]
    Json(#[from] serde_json::Error),

    /// Documents must be JSON objects.
    #[error("document data must be a JSON object")]
    NotAnObject,
}

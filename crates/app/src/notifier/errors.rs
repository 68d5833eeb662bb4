//! Notifier errors.

use thiserror::Error;

/// Errors from sending an order notification.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// Transport failure.
    #[error("notification request failed")]
    Http(#[from] reqwest::Error),

    /// Non-success status, with the status and response body.
    #[error("unexpected notification response: {0}")]
    UnexpectedResponse(String),
}

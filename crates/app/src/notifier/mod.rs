//! Order notifications
//!
//! Best-effort confirmation messages sent after an order is stored.

use async_trait::async_trait;
use lavanya::notifications::OrderNotification;
use mockall::automock;

mod emailjs;
mod errors;

pub use emailjs::{EMAILJS_SEND_URL, EmailJsConfig, EmailJsNotifier};
pub use errors::NotifierError;

/// Delivers order confirmations.
#[automock]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a confirmation for a stored order.
    ///
    /// # Errors
    ///
    /// Returns a [`NotifierError`] when the message could not be delivered.
    async fn notify_order(&self, notification: &OrderNotification) -> Result<(), NotifierError>;
}

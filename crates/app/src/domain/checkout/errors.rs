//! Checkout errors.

use std::time::Duration;

use lavanya::billing::ValidationError;
use thiserror::Error;

use crate::domain::orders::OrdersServiceError;

/// Shown when the cart has nothing to order.
pub const EMPTY_CART_MESSAGE: &str = "Cart is empty!";

/// Shown when the order could not be stored.
pub const ORDER_FAILED_MESSAGE: &str = "Could not place the order. Please try again.";

/// Reasons a checkout did not place an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart or billing form is incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The order store failed.
    #[error("order not placed")]
    OrderNotPlaced(#[source] OrdersServiceError),

    /// The order store did not answer in time.
    #[error("order not placed: store did not answer within {0:?}")]
    OrderTimedOut(Duration),
}

impl CheckoutError {
    /// Message shown to the shopper.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(ValidationError::EmptyCart) => EMPTY_CART_MESSAGE.to_string(),
            Self::Validation(error) => format!("Please fix the order form: {error}."),
            Self::OrderNotPlaced(_) | Self::OrderTimedOut(_) => ORDER_FAILED_MESSAGE.to_string(),
        }
    }

    /// Whether the cart was left untouched and the submission can be retried.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::OrderNotPlaced(_) | Self::OrderTimedOut(_))
    }
}

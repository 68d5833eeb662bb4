//! Checkout service.
//!
//! Turns the session cart and a billing form into a stored order. The order
//! write is the durability boundary: once it succeeds the submission counts
//! as placed, the confirmation is attempted and the cart is emptied. If it
//! fails the cart is left exactly as it was.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
    time::Duration,
};

use lavanya::{
    billing::{BillingDetails, validate_checkout},
    notifications::OrderNotification,
    orders::{OrderRecord, Submitter},
    pricing::DEFAULT_DELIVERY_CHARGE,
};
use rust_decimal::Decimal;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::{
    clock::Clock,
    domain::{carts::CartService, checkout::errors::CheckoutError, orders::OrdersService},
    identity::IdentityProvider,
    notifier::Notifier,
};

/// Default deadline for the order write.
pub const DEFAULT_ORDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Default deadline for the confirmation message.
pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Shown when the order is placed and confirmed.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully! We will contact you soon.";

/// Shown when the order is placed but the confirmation failed.
pub const ORDER_PLACED_UNCONFIRMED_MESSAGE: &str =
    "Order placed successfully! The confirmation email may not have been sent.";

/// Tunables for placing orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSettings {
    /// Flat delivery charge added to every order
    pub delivery_charge: Decimal,

    /// How long the order store may take to accept an order
    pub order_timeout: Duration,

    /// How long the notifier may take to send a confirmation
    pub notify_timeout: Duration,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            delivery_charge: Decimal::from(DEFAULT_DELIVERY_CHARGE),
            order_timeout: DEFAULT_ORDER_TIMEOUT,
            notify_timeout: DEFAULT_NOTIFY_TIMEOUT,
        }
    }
}

/// What happened to the confirmation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    /// The notifier accepted the message.
    Sent,

    /// No notifier is configured.
    Skipped,

    /// The notifier failed or timed out. The order is still placed.
    Failed,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    /// The stored order
    pub order: OrderRecord,

    /// Id the order store assigned to the order document
    pub document_id: String,

    /// Fate of the confirmation message
    pub notification: NotificationStatus,
}

impl CheckoutOutcome {
    /// Message shown to the shopper.
    pub fn message(&self) -> &'static str {
        match self.notification {
            NotificationStatus::Failed => ORDER_PLACED_UNCONFIRMED_MESSAGE,
            NotificationStatus::Sent | NotificationStatus::Skipped => ORDER_PLACED_MESSAGE,
        }
    }
}

/// Turns the session cart into a stored order.
pub struct CheckoutService {
    orders: Arc<dyn OrdersService>,
    notifier: Option<Arc<dyn Notifier>>,
    identity: Arc<dyn IdentityProvider>,
    clock: Arc<dyn Clock>,
    settings: CheckoutSettings,
}

impl CheckoutService {
    /// Create a checkout service. Without a notifier, confirmations are skipped.
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrdersService>,
        notifier: Option<Arc<dyn Notifier>>,
        identity: Arc<dyn IdentityProvider>,
        clock: Arc<dyn Clock>,
        settings: CheckoutSettings,
    ) -> Self {
        Self {
            orders,
            notifier,
            identity,
            clock,
            settings,
        }
    }

    /// Settings in effect.
    pub fn settings(&self) -> CheckoutSettings {
        self.settings
    }

    /// Place an order for everything in `cart`.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Validation`]: empty cart or incomplete billing form;
    ///   nothing is written.
    /// - [`CheckoutError::OrderNotPlaced`] / [`CheckoutError::OrderTimedOut`]:
    ///   the order write failed; the cart is unchanged.
    #[tracing::instrument(
        name = "checkout.service.submit",
        skip(self, cart, billing),
        fields(
            lines = cart.cart().len(),
            payment_method = %billing.payment_method,
            order_id = tracing::field::Empty
        ),
        err
    )]
    pub async fn submit(
        &self,
        cart: &mut CartService,
        billing: BillingDetails,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        validate_checkout(cart.cart(), &billing)?;

        let submitter = Submitter::from_user_id(
            self.identity
                .current_identity()
                .as_ref()
                .map(|identity| identity.uid.as_str()),
        );

        let order = OrderRecord::assemble(
            cart.cart(),
            billing,
            self.settings.delivery_charge,
            submitter,
            self.clock.now(),
        );

        tracing::Span::current().record("order_id", tracing::field::display(&order.order_id));

        let stored = timeout(
            self.settings.order_timeout,
            self.orders.create_order(&order),
        )
        .await;

        let document_id = match stored {
            Ok(Ok(document_id)) => document_id,
            Ok(Err(source)) => {
                error!(order_id = %order.order_id, "failed to store order: {source}");

                return Err(CheckoutError::OrderNotPlaced(source));
            }
            Err(_elapsed) => {
                error!(
                    order_id = %order.order_id,
                    timeout = ?self.settings.order_timeout,
                    "order store timed out"
                );

                return Err(CheckoutError::OrderTimedOut(self.settings.order_timeout));
            }
        };

        info!(order_id = %order.order_id, total = %order.total, "order placed");

        let notification = self.notify(&order).await;

        if let Err(clear_error) = cart.clear() {
            error!(
                order_id = %order.order_id,
                "order placed but cart was not cleared: {clear_error}"
            );
        }

        Ok(CheckoutOutcome {
            order,
            document_id,
            notification,
        })
    }

    async fn notify(&self, order: &OrderRecord) -> NotificationStatus {
        let Some(notifier) = &self.notifier else {
            return NotificationStatus::Skipped;
        };

        let notification = OrderNotification::from(order);

        let sent = timeout(
            self.settings.notify_timeout,
            notifier.notify_order(&notification),
        )
        .await;

        match sent {
            Ok(Ok(())) => NotificationStatus::Sent,
            Ok(Err(notify_error)) => {
                warn!(
                    order_id = %order.order_id,
                    error = %notify_error,
                    "order notification failed"
                );

                NotificationStatus::Failed
            }
            Err(_elapsed) => {
                warn!(
                    order_id = %order.order_id,
                    timeout = ?self.settings.notify_timeout,
                    "order notification timed out"
                );

                NotificationStatus::Failed
            }
        }
    }
}

impl Debug for CheckoutService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CheckoutService")
            .field("notifier", &self.notifier.is_some())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

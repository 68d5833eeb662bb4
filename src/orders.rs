//! Orders

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{billing::BillingDetails, cart::Cart, items::CartItem, pricing::Totals};

/// Submitter recorded for orders placed without signing in.
pub const GUEST_SUBMITTER: &str = "guest";

/// Prefix of generated order identifiers.
pub const ORDER_ID_PREFIX: &str = "ORD-";

/// Human-readable order identifier, `ORD-<unix millis>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Derive an identifier from the submission time.
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self(format!("{ORDER_ID_PREFIX}{}", timestamp.as_millisecond()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed, not yet handled.
    #[default]
    Pending,

    /// Being packed.
    Processing,

    /// Handed to the courier.
    Shipped,

    /// Received by the customer.
    Delivered,

    /// Abandoned before shipping.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in fulfilment order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Whether no further transitions are possible.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether `next` directly follows this status.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing | Self::Cancelled)
                | (Self::Processing, Self::Shipped | Self::Cancelled)
                | (Self::Shipped, Self::Delivered)
        )
    }

    /// Stored name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown order status.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl std::str::FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownOrderStatus(value.to_string()))
    }
}

/// Status change that the fulfilment rules forbid.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot move order from {from} to {to}")]
pub struct InvalidTransition {
    /// Current status
    pub from: OrderStatus,

    /// Requested status
    pub to: OrderStatus,
}

/// Who placed an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Submitter {
    /// Signed-in user, by identity-provider id.
    User(String),

    /// Anonymous checkout.
    Guest,
}

impl Submitter {
    /// Build a submitter from an optional user id.
    pub fn from_user_id(uid: Option<&str>) -> Self {
        match uid {
            Some(uid) if !uid.trim().is_empty() && uid != GUEST_SUBMITTER => {
                Self::User(uid.to_string())
            }
            _ => Self::Guest,
        }
    }
}

impl From<String> for Submitter {
    fn from(value: String) -> Self {
        Self::from_user_id(Some(&value))
    }
}

impl From<Submitter> for String {
    fn from(value: Submitter) -> Self {
        match value {
            Submitter::User(uid) => uid,
            Submitter::Guest => GUEST_SUBMITTER.to_string(),
        }
    }
}

/// Durable snapshot of a checkout submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Generated order identifier
    pub order_id: OrderId,

    /// Cart lines at submission time
    pub items: Vec<CartItem>,

    /// Sum of line totals
    pub subtotal: Decimal,

    /// Delivery surcharge
    pub delivery_charge: Decimal,

    /// Subtotal plus delivery charge
    pub total: Decimal,

    /// Billing details from the checkout form
    pub customer: BillingDetails,

    /// Fulfilment status
    pub status: OrderStatus,

    /// Submitting user or guest
    pub user_id: Submitter,

    /// Submission time
    pub created_at: Timestamp,
}

impl OrderRecord {
    /// Assemble a pending order from the current cart.
    pub fn assemble(
        cart: &Cart,
        customer: BillingDetails,
        delivery_charge: Decimal,
        submitter: Submitter,
        created_at: Timestamp,
    ) -> Self {
        let totals = Totals::for_cart(cart, delivery_charge);

        Self {
            order_id: OrderId::from_timestamp(created_at),
            items: cart.items().to_vec(),
            subtotal: totals.subtotal,
            delivery_charge: totals.delivery_charge,
            total: totals.total,
            customer,
            status: OrderStatus::Pending,
            user_id: submitter,
            created_at,
        }
    }

    /// Move the order to a new status.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when `next` does not directly follow the
    /// current status.
    pub fn transition(&mut self, next: OrderStatus) -> Result<(), InvalidTransition> {
        if !self.status.can_transition_to(next) {
            return Err(InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        self.status = next;

        Ok(())
    }
}

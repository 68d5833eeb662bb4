//! Pricing

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// Flat delivery charge added to every order, in Taka.
pub const DEFAULT_DELIVERY_CHARGE: u32 = 60;

/// Subtotal, delivery charge and grand total of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of line totals
    pub subtotal: Decimal,

    /// Delivery surcharge
    pub delivery_charge: Decimal,

    /// Subtotal plus delivery charge
    pub total: Decimal,
}

impl Totals {
    /// Compute the totals of a cart with the given delivery charge.
    pub fn for_cart(cart: &Cart, delivery_charge: Decimal) -> Self {
        let subtotal = cart.subtotal();

        Self {
            subtotal,
            delivery_charge,
            total: subtotal + delivery_charge,
        }
    }
}

/// Format an amount as Bangladeshi Taka, e.g. `৳510.00`.
///
/// Amounts outside the `i64` range of paisa fall back to the plain decimal.
pub fn format_taka(amount: Decimal) -> String {
    let minor = (amount * Decimal::ONE_HUNDRED).round().to_i64();

    match minor {
        Some(minor) => Money::from_minor(minor, iso::BDT).to_string(),
        None => format!("{amount} BDT"),
    }
}

//! Checkout Config

use clap::Args;
use lavanya::pricing::DEFAULT_DELIVERY_CHARGE;
use rust_decimal::Decimal;

/// Pricing settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Flat delivery charge added to every order, in Taka
    #[arg(long, env = "DELIVERY_CHARGE", default_value_t = Decimal::from(DEFAULT_DELIVERY_CHARGE))]
    pub delivery_charge: Decimal,
}

//! Lavanya prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    access::{AccessDecision, AccessPolicy, Identity, Redirect, RouteClass},
    billing::{BillingDetails, BillingField, PaymentMethod, ValidationError, validate_checkout},
    cart::Cart,
    catalog::{Categories, NewProduct, Product, ProductValidationError, filter_by_category},
    items::{CartItem, ItemId, NewCartItem},
    notifications::OrderNotification,
    orders::{InvalidTransition, OrderId, OrderRecord, OrderStatus, Submitter},
    pricing::{DEFAULT_DELIVERY_CHARGE, Totals, format_taka},
};

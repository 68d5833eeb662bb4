//! Lavanya
//!
//! Lavanya is the storefront core of a cosmetics shop: cart state, pricing,
//! billing validation, order records, notification summaries, catalog records
//! and route access rules.

pub mod access;
pub mod billing;
pub mod cart;
pub mod catalog;
pub mod items;
pub mod notifications;
pub mod orders;
pub mod prelude;
pub mod pricing;

//! Storefront domain services.

pub mod access;
pub mod carts;
pub mod checkout;
pub mod orders;
pub mod products;

//! Lavanya storefront services: session cart, checkout and the stores they
//! talk to.

pub mod clock;
pub mod config;
pub mod context;
pub mod documents;
pub mod domain;
pub mod identity;
pub mod notifier;
pub mod observability;
pub mod storage;

#[cfg(test)]
mod test;

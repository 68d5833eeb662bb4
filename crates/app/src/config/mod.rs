//! Storefront configuration
//!
//! Every setting can come from a flag or the environment; a `.env` file is
//! loaded first when present.

use clap::Args;

use crate::config::{
    access::AccessConfig,
    checkout::CheckoutConfig,
    logging::LoggingConfig,
    notifier::NotifierConfig,
    session::SessionConfig,
    store::StoreConfig,
};

pub mod access;
pub mod checkout;
pub mod logging;
pub mod notifier;
pub mod session;
pub mod store;

/// Lavanya storefront configuration
#[derive(Debug, Args)]
pub struct StorefrontConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Cart and document store settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Order confirmation settings.
    #[command(flatten)]
    pub notifier: NotifierConfig,

    /// Signed-in user for this session.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Admin allow-list.
    #[command(flatten)]
    pub access: AccessConfig,

    /// Pricing settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,
}

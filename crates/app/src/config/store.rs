//! Store Config

use std::{path::PathBuf, time::Duration};

use clap::Args;

/// Cart slot and document store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Directory holding the persisted cart and local documents
    #[arg(long, env = "CART_DIR", default_value = ".lavanya")]
    pub cart_dir: PathBuf,

    /// Hosted document store base URL; local files are used when unset
    #[arg(long, env = "DOCUMENT_STORE_URL")]
    pub document_store_url: Option<String>,

    /// Hosted document store API key
    #[arg(long, env = "DOCUMENT_STORE_API_KEY", hide_env_values = true)]
    pub document_store_api_key: Option<String>,

    /// Deadline for writing an order, in seconds
    #[arg(long, env = "ORDER_STORE_TIMEOUT_SECONDS", default_value_t = 10u64)]
    pub order_store_timeout_seconds: u64,
}

impl StoreConfig {
    #[must_use]
    pub fn order_timeout(&self) -> Duration {
        Duration::from_secs(self.order_store_timeout_seconds)
    }

    /// Directory for documents when no hosted store is configured.
    #[must_use]
    pub fn local_documents_dir(&self) -> PathBuf {
        self.cart_dir.join("data")
    }
}

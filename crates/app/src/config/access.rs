//! Access Config

use clap::Args;
use lavanya::access::AccessPolicy;

/// Admin settings.
#[derive(Debug, Args)]
pub struct AccessConfig {
    /// Comma separated admin user ids or email addresses
    #[arg(long, env = "ADMIN_ALLOW_LIST", default_value = "")]
    pub admin_allow_list: String,
}

impl AccessConfig {
    #[must_use]
    pub fn policy(&self) -> AccessPolicy {
        AccessPolicy::from_allow_list(&self.admin_allow_list)
    }
}

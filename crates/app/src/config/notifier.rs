//! Notifier Config

use std::time::Duration;

use clap::Args;

use crate::notifier::{EMAILJS_SEND_URL, EmailJsConfig};

/// Order confirmation settings. Confirmations are off unless every `EmailJS`
/// identifier is set.
#[derive(Debug, Args)]
pub struct NotifierConfig {
    /// `EmailJS` send endpoint
    #[arg(long, env = "EMAILJS_ENDPOINT", default_value = EMAILJS_SEND_URL)]
    pub emailjs_endpoint: String,

    /// `EmailJS` service id
    #[arg(long, env = "EMAILJS_SERVICE_ID")]
    pub emailjs_service_id: Option<String>,

    /// `EmailJS` template id
    #[arg(long, env = "EMAILJS_TEMPLATE_ID")]
    pub emailjs_template_id: Option<String>,

    /// `EmailJS` public key
    #[arg(long, env = "EMAILJS_PUBLIC_KEY", hide_env_values = true)]
    pub emailjs_public_key: Option<String>,

    /// Deadline for sending a confirmation, in seconds
    #[arg(long, env = "NOTIFIER_TIMEOUT_SECONDS", default_value_t = 5u64)]
    pub notifier_timeout_seconds: u64,
}

impl NotifierConfig {
    #[must_use]
    pub fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notifier_timeout_seconds)
    }

    /// `EmailJS` settings, when confirmations are configured.
    #[must_use]
    pub fn emailjs(&self) -> Option<EmailJsConfig> {
        Some(EmailJsConfig {
            endpoint: self.emailjs_endpoint.clone(),
            service_id: self.emailjs_service_id.clone()?,
            template_id: self.emailjs_template_id.clone()?,
            public_key: self.emailjs_public_key.clone()?,
        })
    }
}

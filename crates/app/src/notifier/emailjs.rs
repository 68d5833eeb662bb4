//! `EmailJS` client for order confirmations.

use async_trait::async_trait;
use lavanya::notifications::OrderNotification;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::notifier::{Notifier, NotifierError};

/// Public `EmailJS` send endpoint.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Configuration for the `EmailJS` template used for order confirmations.
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    /// Send endpoint, normally [`EMAILJS_SEND_URL`].
    pub endpoint: String,

    /// `EmailJS` service identifier.
    pub service_id: String,

    /// Template rendered for each order.
    pub template_id: String,

    /// Public key identifying the account.
    pub public_key: String,
}

/// HTTP client posting order confirmations to `EmailJS`.
#[derive(Debug, Clone)]
pub struct EmailJsNotifier {
    config: EmailJsConfig,
    http: Client,
}

impl EmailJsNotifier {
    #[must_use]
    pub fn new(config: EmailJsConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    #[must_use]
    pub fn with_client(config: EmailJsConfig, http: Client) -> Self {
        Self { config, http }
    }

    fn payload<'a>(&'a self, notification: &'a OrderNotification) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: notification,
        }
    }
}

#[async_trait]
impl Notifier for EmailJsNotifier {
    async fn notify_order(&self, notification: &OrderNotification) -> Result<(), NotifierError> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&self.payload(notification))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(NotifierError::UnexpectedResponse(format!(
                "send request failed with status {status}: {text}"
            )));
        }

        debug!(order_id = %notification.order_id, "order notification sent");

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a OrderNotification,
}

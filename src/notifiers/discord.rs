use crate::errors::{Result, StonksError};
use crate::models::message::NotificationMessage;
use crate::notifiers::base::Notifier;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Posts embeds to a Discord webhook URL
pub struct DiscordWebhook {
    client: Client,
    url: String,
}

impl DiscordWebhook {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        debug!("Posting {} embed(s) to webhook", message.embeds.len());

        let response = self.client
            .post(&self.url)
            .json(message)
            .send()
            .await
            .map_err(|e| StonksError::NotificationDeliveryFailed(e.to_string()))?;

        // Discord answers a successful webhook execution with 204 No Content.
        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            return Err(StonksError::NotificationDeliveryFailed(format!(
                "webhook responded with {}: {}",
                status.as_u16(),
                body
            )));
        }

        Ok(())
    }
}

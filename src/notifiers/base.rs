use crate::models::message::NotificationMessage;
use crate::errors::Result;
use async_trait::async_trait;

/// Delivers the finished market summary
#[async_trait]
pub trait Notifier {
    /// Send one message. Delivery problems come back as `NotificationDeliveryFailed`.
    async fn send(&self, message: &NotificationMessage) -> Result<()>;
}

use crate::errors::Result;
use crate::models::message::NotificationMessage;
use crate::notifiers::base::Notifier;
use async_trait::async_trait;

/// Prints the webhook payload to stdout instead of posting it (`run --dry-run`).
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(message)?);
        Ok(())
    }
}

use async_trait::async_trait;
use engine::{Notifier, NotifierError};
use model::Subject;

/// Reference `Notifier` that logs the message instead of delivering it over
/// a real chat transport; the transport itself is an external collaborator.
pub struct LoggingNotifier;

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn send(&self, subject: Subject, text: String) -> Result<(), NotifierError> {
        tracing::info!(subject, message = %text, "notification");
        Ok(())
    }
}

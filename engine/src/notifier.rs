use async_trait::async_trait;
use model::Subject;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("failed to deliver notification: {0}")]
    Failed(String),
}

/// Delivers a formatted opportunity to a subject's chat. Best-effort: the
/// worker logs a failure and moves on, it never retries.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, subject: Subject, text: String) -> Result<(), NotifierError>;
}

use async_trait::async_trait;
use model::{Settings, Subject};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("settings store unavailable: {0}")]
    Unavailable(String),
}

/// Persistent per-subject preferences. An unknown subject is not an error:
/// `get` returns `Ok(None)`.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, subject: Subject) -> Result<Option<Settings>, StoreError>;
    async fn set(&self, subject: Subject, settings: Settings) -> Result<(), StoreError>;
    async fn delete(&self, subject: Subject) -> Result<(), StoreError>;
}

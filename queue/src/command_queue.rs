use std::time::Duration;

use redis::AsyncCommands;
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::error::QueueError;
use crate::record::StartRecord;

const JOB_QUEUE_KEY: &str = "jobs:queue";
const ENQUEUE_DEADLINE: Duration = Duration::from_secs(5);
const POP_TIMEOUT_SECS: usize = 10;

/// Durable FIFO of start-analysis commands, backed by a Redis list.
/// `Stop` is never enqueued here — it is delivered synchronously through the
/// dispatcher, and `remove_queued_starts` is used to scrub any start still
/// queued for a subject being stopped.
pub struct CommandQueue {
    client: redis::Client,
    conn: Mutex<Option<redis::aio::MultiplexedConnection>>,
}

impl CommandQueue {
    pub fn new(redis_url: &str) -> Result<Self, QueueError> {
        let client = redis::Client::open(redis_url).map_err(|e| QueueError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            conn: Mutex::new(None),
        })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, QueueError> {
        let mut guard = self.conn.lock().await;
        if let Some(conn) = guard.as_ref() {
            return Ok(conn.clone());
        }
        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| QueueError::Unavailable(e.to_string()))?;
        *guard = Some(conn.clone());
        Ok(conn)
    }

    async fn drop_connection(&self) {
        *self.conn.lock().await = None;
    }

    pub async fn enqueue_start(&self, record: StartRecord) -> Result<(), QueueError> {
        let mut conn = self.connection().await?;
        let push = conn.rpush::<_, _, ()>(JOB_QUEUE_KEY, record.format());
        timeout(ENQUEUE_DEADLINE, push)
            .await
            .map_err(|_| QueueError::Unavailable("enqueue deadline exceeded".into()))?
            .map_err(|e| self.classify(e))
    }

    /// Blocks up to `POP_TIMEOUT_SECS` waiting for a record. Returns `None`
    /// on a plain timeout, which the caller should treat as "poll again".
    pub async fn blocking_pop(&self) -> Result<Option<String>, QueueError> {
        let mut conn = self.connection().await?;
        let result: redis::RedisResult<Option<(String, String)>> =
            conn.blpop(JOB_QUEUE_KEY, POP_TIMEOUT_SECS as f64).await;
        match result {
            Ok(Some((_, value))) => Ok(Some(value)),
            Ok(None) => Ok(None),
            Err(e) => Err(self.classify(e)),
        }
    }

    /// Removes any queued start record for `subject`, used when a subject is
    /// stopped so a stale queued start doesn't resurrect it later.
    pub async fn remove_queued_starts(&self, subject: model::Subject) -> Result<(), QueueError> {
        let mut conn = self.connection().await?;
        let suffix = format!(":{subject}");
        let entries: Vec<String> = conn
            .lrange(JOB_QUEUE_KEY, 0, -1)
            .await
            .map_err(|e| self.classify(e))?;

        for entry in entries.into_iter().filter(|e| e.ends_with(&suffix)) {
            let _: i64 = conn
                .lrem(JOB_QUEUE_KEY, 0, entry)
                .await
                .map_err(|e| self.classify(e))?;
        }
        Ok(())
    }

    fn classify(&self, err: redis::RedisError) -> QueueError {
        let message = err.to_string();
        if err.is_connection_dropped() || message.contains("READONLY") {
            QueueError::ReadOnly
        } else {
            QueueError::Unavailable(message)
        }
    }

    pub async fn handle_error(&self, err: &QueueError) {
        if matches!(err, QueueError::ReadOnly) {
            self.drop_connection().await;
        }
    }
}

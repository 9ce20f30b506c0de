use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("queue backing store unavailable: {0}")]
    Unavailable(String),

    #[error("queue connection is read-only, reconnecting")]
    ReadOnly,

    #[error("malformed queue record: {0}")]
    BadCommand(String),
}

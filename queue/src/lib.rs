mod command_queue;
mod error;
mod record;

pub use command_queue::CommandQueue;
pub use error::QueueError;
pub use record::StartRecord;

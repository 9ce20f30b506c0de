mod config;
mod deps;
mod dispatcher;
mod message;
mod notifier;
mod watchdog;
mod worker;

pub use config::EngineConfig;
pub use deps::WorkerDeps;
pub use dispatcher::{Dispatcher, EngineError};
pub use notifier::{Notifier, NotifierError};
pub use watchdog::run as run_watchdog;
pub use worker::WorkerHandle;

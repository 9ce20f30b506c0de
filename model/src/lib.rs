mod command;
mod error;
mod order;
mod opportunity;
mod pair;
mod permutation;
mod settings;
mod side;
mod venue;
mod worker_state;

pub use command::{Command, CommandAck, CommandEnvelope};
pub use error::ModelError;
pub use opportunity::{Opportunity, OpportunityFingerprint, OpportunityKind};
pub use order::{Order, OrderBookKey};
pub use pair::TradingPair;
pub use permutation::{PermutationConfig, SizeModel};
pub use settings::{AnalysisStep, Settings};
pub use side::Side;
pub use venue::Venue;
pub use worker_state::WorkerState;

/// Identifies a monitored subscriber. Mirrors the chat platform's user/chat id.
pub type Subject = i64;

mod factual;
mod pair_arbitrage;
mod pair_potential;
mod round;
mod types;

pub use factual::detect_factual;
pub use pair_arbitrage::detect_pair_arbitrage;
pub use pair_potential::detect_pair_potential;
pub use round::round2;
pub use types::{DetectError, DetectParams, EmitMode};

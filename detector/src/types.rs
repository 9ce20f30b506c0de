use rust_decimal::Decimal;
use thiserror::Error;

use model::{Subject, TradingPair, Venue, SizeModel};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DetectError {
    #[error("ask or bid book is empty")]
    EmptyBook,
}

/// Whether a sweep reports every qualifying level or only the last one seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    All,
    Last,
}

impl Default for EmitMode {
    fn default() -> Self {
        EmitMode::All
    }
}

/// The fee/size-accounting parameters for one ask-book/bid-book pairing,
/// plus the subject and threshold the sweep is being run for.
#[derive(Debug, Clone)]
pub struct DetectParams {
    pub subject: Subject,
    pub ask_venue: Venue,
    pub ask_pair: TradingPair,
    pub bid_venue: Venue,
    pub bid_pair: TradingPair,
    pub fee_ask: Decimal,
    pub fee_bid: Decimal,
    pub min_diff: Decimal,
    pub max_sum: Decimal,
    pub size_model_ask: SizeModel,
    pub size_model_bid: SizeModel,
    pub emit_mode: EmitMode,
}

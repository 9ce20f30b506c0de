use rust_decimal::Decimal;

use crate::{TradingPair, Venue};

/// Whether a venue publishes an authoritative running sum per level
/// (`Cumulative`, e.g. VenueA) or only the level's own size, requiring the
/// detector to accumulate it (`Incremental`, e.g. VenueG).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeModel {
    Cumulative,
    Incremental,
}

/// One ask-book/bid-book pairing the detector sweeps every tick, with the
/// fee and size-accounting rules that apply to each side.
#[derive(Debug, Clone)]
pub struct PermutationConfig {
    pub ask_venue: Venue,
    pub ask_pair: TradingPair,
    pub bid_venue: Venue,
    pub bid_pair: TradingPair,
    pub fee_ask: Decimal,
    pub fee_bid: Decimal,
    pub size_model_ask: SizeModel,
    pub size_model_bid: SizeModel,
}

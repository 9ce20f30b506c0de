use async_trait::async_trait;
use model::{Order, Side, TradingPair};

use crate::{FetchError, OrderBookFetcher};

/// Reference stub for VenueA's order book. The real implementation scrapes
/// VenueA's public book; that collection logic is an external collaborator
/// and out of scope here. This exists so the rest of the crate compiles and
/// can be exercised end to end.
pub struct VenueAFetcher;

#[async_trait]
impl OrderBookFetcher for VenueAFetcher {
    async fn fetch(&self, _pair: TradingPair, _side: Side) -> Result<Vec<Order>, FetchError> {
        Ok(Vec::new())
    }
}

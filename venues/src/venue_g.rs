use async_trait::async_trait;
use model::{Order, Side, TradingPair};

use crate::{FetchError, OrderBookFetcher};

/// Reference stub for VenueG's order book, mirroring `VenueAFetcher`.
pub struct VenueGFetcher;

#[async_trait]
impl OrderBookFetcher for VenueGFetcher {
    async fn fetch(&self, _pair: TradingPair, _side: Side) -> Result<Vec<Order>, FetchError> {
        Ok(Vec::new())
    }
}

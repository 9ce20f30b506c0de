use async_trait::async_trait;
use model::{Order, Side, TradingPair};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transient fetch failure: {0}")]
    Transient(String),

    #[error("fatal fetch failure: {0}")]
    Fatal(String),
}

/// An external order-book source for one venue. Implementations return the
/// top few levels of one side of the book, best price first.
#[async_trait]
pub trait OrderBookFetcher: Send + Sync {
    async fn fetch(&self, pair: TradingPair, side: Side) -> Result<Vec<Order>, FetchError>;
}

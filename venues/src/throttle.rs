use std::sync::Arc;

use async_trait::async_trait;
use model::{Order, Side, TradingPair};
use tokio::sync::Semaphore;

use crate::{FetchError, OrderBookFetcher};

/// Bounds the number of fetches in flight across the whole process,
/// regardless of how many distinct (venue, pair, side) keys are being
/// fetched concurrently.
pub struct ThrottledFetcher<F> {
    inner: F,
    semaphore: Arc<Semaphore>,
}

impl<F> ThrottledFetcher<F> {
    pub fn new(inner: F, semaphore: Arc<Semaphore>) -> Self {
        Self { inner, semaphore }
    }
}

#[async_trait]
impl<F> OrderBookFetcher for ThrottledFetcher<F>
where
    F: OrderBookFetcher,
{
    async fn fetch(&self, pair: TradingPair, side: Side) -> Result<Vec<Order>, FetchError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| FetchError::Fatal(e.to_string()))?;
        self.inner.fetch(pair, side).await
    }
}

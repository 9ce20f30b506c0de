use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use model::{Order, Side, TradingPair};

use crate::{FetchError, OrderBookFetcher};

/// Wraps a fetcher with a bounded number of attempts and a per-attempt
/// timeout. Only `FetchError::Transient` failures are retried.
pub struct RetryingFetcher<F> {
    inner: Arc<F>,
    attempts: u32,
    timeout: Duration,
}

impl<F> RetryingFetcher<F> {
    pub fn new(inner: F, attempts: u32, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            attempts: attempts.max(1),
            timeout,
        }
    }
}

#[async_trait]
impl<F> OrderBookFetcher for RetryingFetcher<F>
where
    F: OrderBookFetcher,
{
    async fn fetch(&self, pair: TradingPair, side: Side) -> Result<Vec<Order>, FetchError> {
        let mut last_err = None;
        for attempt in 0..self.attempts {
            let outcome = tokio::time::timeout(self.timeout, self.inner.fetch(pair, side)).await;
            match outcome {
                Ok(Ok(orders)) => return Ok(orders),
                Ok(Err(FetchError::Fatal(msg))) => return Err(FetchError::Fatal(msg)),
                Ok(Err(err @ FetchError::Transient(_))) => last_err = Some(err),
                Err(_) => {
                    last_err = Some(FetchError::Transient(format!(
                        "attempt {attempt} timed out after {:?}",
                        self.timeout
                    )))
                }
            }
        }
        Err(last_err.unwrap_or_else(|| FetchError::Transient("no attempts made".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FlakyFetcher {
        calls: AtomicU32,
        fail_times: u32,
    }

    #[async_trait]
    impl OrderBookFetcher for FlakyFetcher {
        async fn fetch(&self, _pair: TradingPair, _side: Side) -> Result<Vec<Order>, FetchError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_times {
                Err(FetchError::Transient("not ready yet".into()))
            } else {
                Ok(Vec::new())
            }
        }
    }

    struct AlwaysFatal;

    #[async_trait]
    impl OrderBookFetcher for AlwaysFatal {
        async fn fetch(&self, _pair: TradingPair, _side: Side) -> Result<Vec<Order>, FetchError> {
            Err(FetchError::Fatal("bad credentials".into()))
        }
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures_within_budget() {
        let fetcher = RetryingFetcher::new(
            FlakyFetcher {
                calls: AtomicU32::new(0),
                fail_times: 2,
            },
            3,
            Duration::from_secs(1),
        );

        let result = fetcher.fetch(TradingPair::UsdtRub, Side::Buy).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn exhausts_attempts_and_returns_transient_error() {
        let fetcher = RetryingFetcher::new(
            FlakyFetcher {
                calls: AtomicU32::new(0),
                fail_times: 10,
            },
            3,
            Duration::from_secs(1),
        );

        let result = fetcher.fetch(TradingPair::UsdtRub, Side::Buy).await;
        assert!(matches!(result, Err(FetchError::Transient(_))));
    }

    #[tokio::test]
    async fn fatal_errors_are_not_retried() {
        let fetcher = RetryingFetcher::new(AlwaysFatal, 5, Duration::from_secs(1));
        let result = fetcher.fetch(TradingPair::UsdtRub, Side::Buy).await;
        assert!(matches!(result, Err(FetchError::Fatal(_))));
    }
}

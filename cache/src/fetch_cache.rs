use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use model::{Order, OrderBookKey};
use parking_lot::Mutex as SyncMutex;
use tokio::sync::{Mutex as AsyncMutex, Notify};

struct Inner {
    orders: Vec<Order>,
    updated_at: Option<Instant>,
    updating: bool,
    last_error: Option<String>,
    generation: u64,
}

impl Inner {
    fn fresh() -> Self {
        Self {
            orders: Vec::new(),
            updated_at: None,
            updating: false,
            last_error: None,
            generation: 0,
        }
    }
}

struct KeyState {
    inner: AsyncMutex<Inner>,
    notify: Notify,
}

/// TTL cache over order-book fetches with per-key single-flight collapsing:
/// concurrent callers for the same key await one in-flight fetch instead of
/// issuing their own.
pub struct FetchCache {
    fresh_ttl: Duration,
    keys: SyncMutex<HashMap<OrderBookKey, Arc<KeyState>>>,
}

impl FetchCache {
    pub fn new(fresh_ttl: Duration) -> Self {
        Self {
            fresh_ttl,
            keys: SyncMutex::new(HashMap::new()),
        }
    }

    fn key_state(&self, key: OrderBookKey) -> Arc<KeyState> {
        let mut keys = self.keys.lock();
        keys.entry(key)
            .or_insert_with(|| {
                Arc::new(KeyState {
                    inner: AsyncMutex::new(Inner::fresh()),
                    notify: Notify::new(),
                })
            })
            .clone()
    }

    /// Returns the cached book for `key` if it is fresh, otherwise calls
    /// `fetch` (collapsing concurrent callers into a single in-flight call)
    /// and caches the result. A failing `fetch` leaves any prior cached
    /// orders untouched and is reported to every waiter of that attempt.
    pub async fn get_or_fetch<F, Fut>(&self, key: OrderBookKey, fetch: F) -> Result<Vec<Order>, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Order>, String>>,
    {
        let state = self.key_state(key);

        loop {
            let mut guard = state.inner.lock().await;

            if let Some(updated_at) = guard.updated_at {
                if updated_at.elapsed() < self.fresh_ttl {
                    return Ok(guard.orders.clone());
                }
            }

            if guard.updating {
                let seen_generation = guard.generation;
                drop(guard);
                state.notify.notified().await;
                let guard = state.inner.lock().await;
                if guard.generation > seen_generation && !guard.updating {
                    return Self::resolve(&guard);
                }
                continue;
            }

            guard.updating = true;
            drop(guard);

            let result = fetch().await;

            let mut guard = state.inner.lock().await;
            guard.updating = false;
            guard.generation = guard.generation.wrapping_add(1);
            match &result {
                Ok(orders) => {
                    guard.orders = orders.clone();
                    guard.updated_at = Some(Instant::now());
                    guard.last_error = None;
                }
                Err(err) => {
                    guard.last_error = Some(err.clone());
                }
            }
            drop(guard);
            state.notify.notify_waiters();
            return result;
        }
    }

    fn resolve(guard: &Inner) -> Result<Vec<Order>, String> {
        match &guard.last_error {
            Some(err) => Err(err.clone()),
            None => Ok(guard.orders.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Side, TradingPair, Venue};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn key() -> OrderBookKey {
        OrderBookKey {
            venue: Venue::VenueA,
            pair: TradingPair::UsdtRub,
            side: Side::Sell,
        }
    }

    fn sample_order() -> Order {
        Order::new(dec!(100), dec!(1), None, Side::Sell, Venue::VenueA, TradingPair::UsdtRub).unwrap()
    }

    #[tokio::test]
    async fn caches_within_ttl() {
        let cache = FetchCache::new(Duration::from_secs(60));
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = calls.clone();
            let orders = cache
                .get_or_fetch(key(), || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![sample_order()])
                })
                .await
                .unwrap();
            assert_eq!(orders.len(), 1);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_does_not_clear_prior_orders() {
        let cache = FetchCache::new(Duration::from_millis(0));

        cache
            .get_or_fetch(key(), || async { Ok(vec![sample_order()]) })
            .await
            .unwrap();

        let err = cache
            .get_or_fetch(key(), || async { Err::<Vec<Order>, _>("boom".to_string()) })
            .await
            .unwrap_err();
        assert_eq!(err, "boom");

        // internal state keeps the stale orders; a fresh fetch overwrites them.
        let refreshed = cache
            .get_or_fetch(key(), || async { Ok(Vec::new()) })
            .await
            .unwrap();
        assert!(refreshed.is_empty());
    }

    #[tokio::test]
    async fn concurrent_callers_collapse_into_one_fetch() {
        let cache = Arc::new(FetchCache::new(Duration::from_secs(60)));
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch(key(), || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok(vec![sample_order()])
                    })
                    .await
            }));
        }

        for h in handles {
            h.await.unwrap().unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

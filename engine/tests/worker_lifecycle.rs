use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cache::{DedupIndex, FetchCache};
use detector::EmitMode;
use engine::{Dispatcher, EngineConfig, Notifier, NotifierError, WorkerDeps};
use model::{AnalysisStep, Order, Settings, Side, Subject, TradingPair, Venue};
use rust_decimal_macros::dec;
use settings::{SettingsStore, StoreError};
use venues::{FetchError, OrderBookFetcher};

struct StubSettings {
    settings: std::sync::Mutex<Option<Settings>>,
}

#[async_trait]
impl SettingsStore for StubSettings {
    async fn get(&self, _subject: Subject) -> Result<Option<Settings>, StoreError> {
        Ok(self.settings.lock().unwrap().clone())
    }
    async fn set(&self, _subject: Subject, settings: Settings) -> Result<(), StoreError> {
        *self.settings.lock().unwrap() = Some(settings);
        Ok(())
    }
    async fn delete(&self, _subject: Subject) -> Result<(), StoreError> {
        *self.settings.lock().unwrap() = None;
        Ok(())
    }
}

struct StubFetcher {
    side_price: (&'static str, &'static str),
}

#[async_trait]
impl OrderBookFetcher for StubFetcher {
    async fn fetch(&self, pair: TradingPair, side: Side) -> Result<Vec<Order>, FetchError> {
        let price = match side {
            Side::Sell => self.side_price.0,
            Side::Buy => self.side_price.1,
        };
        Ok(vec![Order::new(
            price.parse().unwrap(),
            dec!(10),
            None,
            side,
            Venue::VenueA,
            pair,
        )
        .unwrap()])
    }
}

struct CountingNotifier {
    count: AtomicUsize,
}

#[async_trait]
impl Notifier for CountingNotifier {
    async fn send(&self, _subject: Subject, _text: String) -> Result<(), NotifierError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn worker_notifies_on_factual_arbitrage_and_stamps_heartbeat() {
    let settings_store = Arc::new(StubSettings {
        settings: std::sync::Mutex::new(Some(Settings {
            min_diff: dec!(0),
            max_sum: dec!(1000),
            step: AnalysisStep::ReadyToRun,
        })),
    });
    let notifier = Arc::new(CountingNotifier {
        count: AtomicUsize::new(0),
    });

    let mut fetchers: HashMap<Venue, Arc<dyn OrderBookFetcher>> = HashMap::new();
    fetchers.insert(
        Venue::VenueA,
        Arc::new(StubFetcher {
            side_price: ("100", "90"),
        }),
    );

    let deps = Arc::new(WorkerDeps {
        fetch_cache: Arc::new(FetchCache::new(Duration::from_secs(60))),
        dedup_index: Arc::new(DedupIndex::new(Duration::from_secs(3600))),
        settings_store,
        fetchers,
        notifier: notifier.clone(),
        config: EngineConfig {
            tick_interval: Duration::from_millis(50),
            message_pacing: Duration::from_millis(1),
            stale_threshold: Duration::from_secs(90),
            watchdog_interval: Duration::from_secs(15),
            permutations: vec![model::PermutationConfig {
                ask_venue: Venue::VenueA,
                ask_pair: TradingPair::UsdtRub,
                bid_venue: Venue::VenueA,
                bid_pair: TradingPair::UsdtRub,
                fee_ask: dec!(0),
                fee_bid: dec!(0),
                size_model_ask: model::SizeModel::Incremental,
                size_model_bid: model::SizeModel::Incremental,
            }],
            emit_mode: EmitMode::All,
        },
    });

    let dispatcher = Arc::new(Dispatcher::new(deps));
    dispatcher.start(1, dec!(0), dec!(1000)).await.unwrap();

    tokio::time::advance(Duration::from_millis(60)).await;
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(60)).await;
    tokio::task::yield_now().await;

    assert!(notifier.count.load(Ordering::SeqCst) >= 1);
    assert!(dispatcher.is_running(1).await);

    dispatcher.shutdown(1).await.unwrap();
}

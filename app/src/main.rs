mod config;
mod control;
mod notifier;
mod permutations;
mod queue_consumer;

use std::collections::HashMap;
use std::sync::Arc;

use cache::{DedupIndex, FetchCache};
use config::AppConfig;
use engine::{Dispatcher, EngineConfig, WorkerDeps};
use model::Venue;
use notifier::LoggingNotifier;
use queue::CommandQueue;
use settings::SqliteSettingsStore;
use venues::{OrderBookFetcher, RetryingFetcher, ThrottledFetcher, VenueAFetcher, VenueGFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    common::logger::init_tracing("arb-engine");

    let config = AppConfig::from_env();

    let settings_store: Arc<dyn settings::SettingsStore> =
        Arc::new(SqliteSettingsStore::new(&config.database_url).await?);

    let queue = Arc::new(CommandQueue::new(&config.redis_url)?);

    let fetch_semaphore = Arc::new(tokio::sync::Semaphore::new(config.fetch_parallelism));

    let mut fetchers: HashMap<Venue, Arc<dyn OrderBookFetcher>> = HashMap::new();
    fetchers.insert(
        Venue::VenueA,
        Arc::new(ThrottledFetcher::new(
            RetryingFetcher::new(VenueAFetcher, config.fetch_attempts, config.fetch_timeout),
            fetch_semaphore.clone(),
        )),
    );
    fetchers.insert(
        Venue::VenueG,
        Arc::new(ThrottledFetcher::new(
            RetryingFetcher::new(VenueGFetcher, config.fetch_attempts, config.fetch_timeout),
            fetch_semaphore.clone(),
        )),
    );

    let deps = Arc::new(WorkerDeps {
        fetch_cache: Arc::new(FetchCache::new(config.fresh_ttl)),
        dedup_index: Arc::new(DedupIndex::new(config.dedup_ttl)),
        settings_store: settings_store.clone(),
        fetchers,
        notifier: Arc::new(LoggingNotifier),
        config: EngineConfig {
            tick_interval: config.tick_interval,
            message_pacing: config.message_pacing,
            stale_threshold: config.stale_threshold,
            watchdog_interval: config.watchdog_interval,
            permutations: permutations::default_permutations(),
            emit_mode: config.emit_mode,
        },
    });

    let dispatcher = Arc::new(Dispatcher::new(deps));

    tokio::spawn(queue_consumer::run(
        queue.clone(),
        settings_store.clone(),
        dispatcher.clone(),
    ));

    tokio::spawn(engine::run_watchdog(
        dispatcher.clone(),
        settings_store.clone(),
        config.watchdog_interval,
        config.stale_threshold,
    ));

    tracing::info!("arb-engine started");
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received, stopping active subjects");

    for state in dispatcher.list().await {
        if let Err(err) = control::stop_subject(&dispatcher, &queue, state.subject).await {
            tracing::warn!(subject = state.subject, %err, "failed to stop subject during shutdown");
        }
    }

    Ok(())
}

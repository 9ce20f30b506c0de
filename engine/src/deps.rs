use std::collections::HashMap;
use std::sync::Arc;

use cache::{DedupIndex, FetchCache};
use model::Venue;
use settings::SettingsStore;
use venues::OrderBookFetcher;

use crate::config::EngineConfig;
use crate::notifier::Notifier;

/// The external collaborators and shared infrastructure every worker needs.
/// One instance is shared across all of a dispatcher's workers.
pub struct WorkerDeps {
    pub fetch_cache: Arc<FetchCache>,
    pub dedup_index: Arc<DedupIndex>,
    pub settings_store: Arc<dyn SettingsStore>,
    pub fetchers: HashMap<Venue, Arc<dyn OrderBookFetcher>>,
    pub notifier: Arc<dyn Notifier>,
    pub config: EngineConfig,
}

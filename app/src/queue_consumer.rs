use std::sync::Arc;

use engine::Dispatcher;
use model::AnalysisStep;
use queue::{CommandQueue, StartRecord};
use settings::SettingsStore;
use tokio::time::{sleep, Duration};

/// Drains `jobs:queue`, turning each valid, still-ready-to-run start record
/// into a dispatcher `start`. Malformed records and records for subjects
/// that are no longer ready are dropped. Transient queue errors back off
/// briefly rather than spinning or crashing the consumer task.
pub async fn run(queue: Arc<CommandQueue>, settings_store: Arc<dyn SettingsStore>, dispatcher: Arc<Dispatcher>) {
    loop {
        let popped = match queue.blocking_pop().await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "queue pop failed, backing off");
                queue.handle_error(&err).await;
                sleep(Duration::from_secs(2)).await;
                continue;
            }
        };

        let Some(raw) = popped else {
            continue;
        };

        let record = match StartRecord::parse(&raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(%err, raw, "dropping malformed queue record");
                continue;
            }
        };

        match settings_store.get(record.subject).await {
            Ok(Some(settings)) if settings.step == AnalysisStep::ReadyToRun => {
                if let Err(err) = dispatcher.start(record.subject, record.min, record.max).await {
                    tracing::warn!(subject = record.subject, %err, "dispatcher start failed");
                }
            }
            Ok(_) => {
                tracing::info!(subject = record.subject, "subject not ready, discarding queued start");
            }
            Err(err) => {
                tracing::warn!(subject = record.subject, %err, "settings lookup failed, discarding");
            }
        }
    }
}

use std::sync::Arc;
use std::time::{Duration, Instant};

use model::AnalysisStep;
use settings::SettingsStore;
use tokio::time::MissedTickBehavior;

use crate::dispatcher::Dispatcher;

/// Periodically restarts workers whose heartbeat has gone stale, which
/// indicates the worker's tick loop is stuck rather than merely idle.
pub async fn run(
    dispatcher: Arc<Dispatcher>,
    settings_store: Arc<dyn SettingsStore>,
    interval: Duration,
    stale_threshold: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        for state in dispatcher.list().await {
            if !state.running {
                continue;
            }
            let is_stale = match state.last_heartbeat {
                Some(hb) => Instant::now().duration_since(hb) > stale_threshold,
                None => false,
            };
            if !is_stale {
                continue;
            }

            tracing::warn!(subject = state.subject, "worker heartbeat stale, restarting");
            if let Err(err) = dispatcher.stop(state.subject).await {
                tracing::warn!(subject = state.subject, %err, "watchdog stop failed");
                continue;
            }

            match settings_store.get(state.subject).await {
                Ok(Some(settings)) if settings.step == AnalysisStep::ReadyToRun => {
                    if let Err(err) = dispatcher
                        .start(state.subject, state.current_min, state.current_max)
                        .await
                    {
                        tracing::warn!(subject = state.subject, %err, "watchdog restart failed");
                    }
                }
                _ => {
                    tracing::info!(subject = state.subject, "not active, skipping restart");
                }
            }
        }
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use common::logger::{child_span, root_span, warn_if_slow, TraceId};
use detector::{detect_factual, detect_pair_arbitrage, detect_pair_potential, DetectParams};
use model::{AnalysisStep, Command, CommandAck, CommandEnvelope, OpportunityFingerprint, Order, OrderBookKey, Side, Subject};
use parking_lot::Mutex as SyncMutex;
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::Instrument;

use crate::deps::WorkerDeps;
use crate::message::format_message;

/// A handle the dispatcher keeps for a running worker task. `running` and
/// `last_heartbeat` are readable without going through the command channel
/// so the watchdog can snapshot state cheaply.
pub struct WorkerHandle {
    pub subject: Subject,
    pub cmd_tx: mpsc::Sender<CommandEnvelope>,
    pub running: Arc<AtomicBool>,
    pub last_heartbeat: Arc<SyncMutex<Option<Instant>>>,
    pub current_bounds: Arc<SyncMutex<(Decimal, Decimal)>>,
}

pub fn spawn(subject: Subject, deps: Arc<WorkerDeps>) -> WorkerHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    let running = Arc::new(AtomicBool::new(false));
    let last_heartbeat = Arc::new(SyncMutex::new(None));
    let current_bounds = Arc::new(SyncMutex::new((Decimal::ZERO, Decimal::ZERO)));

    tokio::spawn(run(
        subject,
        cmd_rx,
        deps,
        running.clone(),
        last_heartbeat.clone(),
        current_bounds.clone(),
    ));

    WorkerHandle {
        subject,
        cmd_tx,
        running,
        last_heartbeat,
        current_bounds,
    }
}

fn ack(reply: Option<tokio::sync::oneshot::Sender<CommandAck>>) {
    if let Some(tx) = reply {
        let _ = tx.send(CommandAck(Ok(())));
    }
}

async fn run(
    subject: Subject,
    mut cmd_rx: mpsc::Receiver<CommandEnvelope>,
    deps: Arc<WorkerDeps>,
    running: Arc<AtomicBool>,
    last_heartbeat: Arc<SyncMutex<Option<Instant>>>,
    current_bounds: Arc<SyncMutex<(Decimal, Decimal)>>,
) {
    let mut ticker: Option<Interval> = None;

    loop {
        let next_tick = async {
            match ticker.as_mut() {
                Some(t) => {
                    t.tick().await;
                }
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            maybe_envelope = cmd_rx.recv() => {
                let Some(envelope) = maybe_envelope else { break };
                match envelope.command {
                    Command::Start { min, max, reply } => {
                        *current_bounds.lock() = (min, max);
                        running.store(true, Ordering::SeqCst);
                        if ticker.is_none() {
                            let mut interval = tokio::time::interval(deps.config.tick_interval);
                            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                            ticker = Some(interval);
                        }
                        ack(reply);
                    }
                    Command::Update { min, max, reply } => {
                        *current_bounds.lock() = (min, max);
                        ack(reply);
                    }
                    Command::Stop { reply } => {
                        running.store(false, Ordering::SeqCst);
                        ticker = None;
                        *last_heartbeat.lock() = None;
                        ack(reply);
                    }
                    Command::Shutdown { reply } => {
                        ack(reply);
                        break;
                    }
                }
            }
            _ = next_tick => {
                let (min, max) = *current_bounds.lock();
                let trace_id = TraceId::default();
                let span = root_span("worker_tick", &trace_id);
                let interval = deps.config.tick_interval;
                let executed = warn_if_slow(
                    "worker_tick",
                    interval,
                    run_tick(subject, min, max, &deps).instrument(span),
                )
                .await;
                if executed {
                    *last_heartbeat.lock() = Some(Instant::now());
                }
            }
        }
    }
}

/// Runs one tick's detection sweep. Returns `false` if the tick was skipped
/// (no settings, or the subject isn't ready) — a skipped tick must not
/// advance the heartbeat.
async fn run_tick(subject: Subject, min: Decimal, max: Decimal, deps: &WorkerDeps) -> bool {
    let settings = match deps.settings_store.get(subject).await {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            tracing::warn!(subject, "tick skipped: no settings");
            return false;
        }
        Err(err) => {
            tracing::warn!(subject, %err, "tick skipped: settings store error");
            return false;
        }
    };

    if settings.step != AnalysisStep::ReadyToRun {
        tracing::debug!(subject, step = %settings.step, "tick skipped: not ready to run");
        return false;
    }

    for perm in &deps.config.permutations {
        let span = child_span("permutation");
        run_permutation(subject, min, max, perm, deps)
            .instrument(span)
            .await;
    }

    true
}

async fn run_permutation(
    subject: Subject,
    min: Decimal,
    max: Decimal,
    perm: &model::PermutationConfig,
    deps: &WorkerDeps,
) {
    let ask_key = OrderBookKey {
        venue: perm.ask_venue,
        pair: perm.ask_pair,
        side: Side::Sell,
    };
    let bid_key = OrderBookKey {
        venue: perm.bid_venue,
        pair: perm.bid_pair,
        side: Side::Buy,
    };

    let asks = fetch(deps, ask_key).await;
    let bids = fetch(deps, bid_key).await;

    let params = DetectParams {
        subject,
        ask_venue: perm.ask_venue,
        ask_pair: perm.ask_pair,
        bid_venue: perm.bid_venue,
        bid_pair: perm.bid_pair,
        fee_ask: perm.fee_ask,
        fee_bid: perm.fee_bid,
        min_diff: min,
        max_sum: max,
        size_model_ask: perm.size_model_ask,
        size_model_bid: perm.size_model_bid,
        emit_mode: deps.config.emit_mode,
    };

    let mut opportunities = Vec::new();

    match detect_factual(&asks, &bids, &params) {
        Ok(Some(opp)) => opportunities.push(opp),
        Ok(None) => {}
        Err(err) => tracing::debug!(subject, %err, "factual detection skipped"),
    }

    match detect_pair_arbitrage(&asks, &bids, &params) {
        Ok(found) => opportunities.extend(found),
        Err(err) => tracing::debug!(subject, %err, "pair arbitrage detection skipped"),
    }

    match detect_pair_potential(&asks, &bids, &params) {
        Ok(found) => opportunities.extend(found),
        Err(err) => tracing::debug!(subject, %err, "pair potential detection skipped"),
    }

    for opp in opportunities {
        let fingerprint = OpportunityFingerprint::from(&opp);
        if !deps.dedup_index.mark_and_check(fingerprint) {
            continue;
        }

        let text = format_message(&opp);
        if let Err(err) = deps.notifier.send(subject, text).await {
            tracing::warn!(subject, %err, "notification delivery failed");
        }
        tokio::time::sleep(deps.config.message_pacing).await;
    }
}

async fn fetch(deps: &WorkerDeps, key: OrderBookKey) -> Vec<Order> {
    let Some(fetcher) = deps.fetchers.get(&key.venue) else {
        tracing::warn!(venue = %key.venue, "no fetcher registered for venue");
        return Vec::new();
    };
    let fetcher = fetcher.clone();
    let pair = key.pair;
    let side = key.side;

    deps.fetch_cache
        .get_or_fetch(key, || async move {
            fetcher.fetch(pair, side).await.map_err(|e| e.to_string())
        })
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(venue = %key.venue, pair = %key.pair, %err, "order book fetch failed");
            Vec::new()
        })
}

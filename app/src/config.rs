use std::time::Duration;

use detector::EmitMode;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub redis_url: String,

    /// How long a cached order book is served without re-fetching.
    pub fresh_ttl: Duration,
    /// How often a running worker re-evaluates its subject.
    pub tick_interval: Duration,
    /// How long a worker may go without a heartbeat before the watchdog
    /// considers it stuck.
    pub stale_threshold: Duration,
    /// How often the watchdog scans for stale workers.
    pub watchdog_interval: Duration,
    /// Upper bound on concurrent order-book fetches across the process.
    pub fetch_parallelism: usize,
    /// Retry attempts per fetch.
    pub fetch_attempts: u32,
    /// Per-attempt fetch timeout.
    pub fetch_timeout: Duration,
    /// How long a reported opportunity is suppressed from re-notification.
    pub dedup_ttl: Duration,
    /// Pacing between consecutive notification sends within one tick.
    pub message_pacing: Duration,
    /// Whether a sweep reports every qualifying level or only the last.
    pub emit_mode: EmitMode,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://arb_engine.db".to_string());
        let redis_url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());

        let emit_mode = match std::env::var("EMIT_MODE").as_deref() {
            Ok("LAST") => EmitMode::Last,
            _ => EmitMode::All,
        };

        Self {
            database_url,
            redis_url,
            fresh_ttl: env_secs("FRESH_TTL", 60),
            tick_interval: env_secs("TICK_INTERVAL", 20),
            stale_threshold: env_secs("STALE_THRESHOLD", 90),
            watchdog_interval: env_secs("WATCHDOG_INTERVAL", 15),
            fetch_parallelism: env_usize("FETCH_PARALLELISM", 1),
            fetch_attempts: env_usize("FETCH_ATTEMPTS", 3) as u32,
            fetch_timeout: env_secs("FETCH_TIMEOUT", 20),
            dedup_ttl: env_secs("DEDUP_TTL", 3600),
            message_pacing: Duration::from_millis(1500),
            emit_mode,
        }
    }
}

fn env_secs(name: &str, default_secs: u64) -> Duration {
    Duration::from_secs(env_usize(name, default_secs as usize) as u64)
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

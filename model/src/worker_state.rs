use std::time::Instant;

use rust_decimal::Decimal;

use crate::Subject;

/// A point-in-time snapshot of a worker, as returned by the dispatcher's
/// registry queries. Used by the watchdog to decide which workers are stale.
#[derive(Debug, Clone)]
pub struct WorkerState {
    pub subject: Subject,
    pub running: bool,
    pub last_heartbeat: Option<Instant>,
    pub current_min: Decimal,
    pub current_max: Decimal,
}

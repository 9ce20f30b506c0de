use std::time::Duration;

use detector::EmitMode;
use model::PermutationConfig;

/// Engine-wide knobs that apply to every subject's worker.
#[derive(Clone)]
pub struct EngineConfig {
    pub tick_interval: Duration,
    pub message_pacing: Duration,
    pub stale_threshold: Duration,
    pub watchdog_interval: Duration,
    pub permutations: Vec<PermutationConfig>,
    pub emit_mode: EmitMode,
}

use super::TraceId;
use std::time::{Duration, Instant};
use tracing::{Level, Span};

/// Create a root span for a tick / command / request.
pub fn root_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::span!(
        Level::INFO,
        name,
        trace_id = %trace_id.as_str()
    )
}

/// Create a child span (inherits the enclosing span's fields automatically).
pub fn child_span(name: &'static str) -> Span {
    tracing::span!(Level::INFO, name)
}

/// Runs `fut` and logs a warning if it takes longer than `threshold`.
pub async fn warn_if_slow<F, T>(label: &'static str, threshold: Duration, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let start = Instant::now();
    let out = fut.await;
    let elapsed = start.elapsed();
    if elapsed > threshold {
        tracing::warn!(label, ?elapsed, ?threshold, "operation exceeded threshold");
    }
    out
}

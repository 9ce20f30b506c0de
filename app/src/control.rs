use std::sync::Arc;

use engine::Dispatcher;
use model::Subject;
use queue::CommandQueue;

/// Stops a subject's worker and purges any queued `Start` left behind for
/// it, so a stale queue entry can't resurrect the subject later. This is
/// the synchronous counterpart to `queue_consumer::run`'s handling of
/// `Start`: callers issuing `Stop` go through here, never through the queue.
pub async fn stop_subject(
    dispatcher: &Dispatcher,
    queue: &CommandQueue,
    subject: Subject,
) -> anyhow::Result<()> {
    dispatcher.stop(subject).await?;
    if let Err(err) = queue.remove_queued_starts(subject).await {
        tracing::warn!(subject, %err, "failed to purge queued starts after stop");
    }
    Ok(())
}

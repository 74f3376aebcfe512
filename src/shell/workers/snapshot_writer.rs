// Background worker that persists published snapshots, one at a time.
//
// Responsibilities
// - Save the newest pending snapshot; snapshots published while a save is running
//   collapse into the next save.
// - Log failures and move on. Nothing is retried and no caller ever sees the error.
// - Exit after the final snapshot once the store (and its publisher) is dropped.

use crate::modules::matches::adapters::outbound::snapshot_publisher::PendingSnapshots;
use crate::modules::matches::core::ports::SnapshotStore;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub fn spawn_snapshot_writer<S>(snapshots: Arc<S>, pending: PendingSnapshots) -> JoinHandle<()>
where
    S: SnapshotStore + 'static,
{
    tokio::spawn(run_snapshot_writer(snapshots, pending))
}

pub async fn run_snapshot_writer<S>(snapshots: Arc<S>, mut pending: PendingSnapshots)
where
    S: SnapshotStore + ?Sized,
{
    while let Some(next) = pending.next().await {
        match snapshots.save(&next.snapshot).await {
            Ok(()) => tracing::debug!(
                revision = next.revision,
                matches = next.snapshot.matches.len(),
                "match snapshot saved"
            ),
            Err(err) => tracing::warn!(
                revision = next.revision,
                error = %err,
                "failed to save match snapshot"
            ),
        }
    }
    tracing::debug!("snapshot writer stopped");
}

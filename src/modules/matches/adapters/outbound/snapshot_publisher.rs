// Single-slot hand-off between the store and the snapshot writer.
//
// Purpose
// - Let mutations publish the full state without waiting on disk.
//
// Responsibilities
// - Keep only the newest pending snapshot. A snapshot carrying an older revision
//   than the one already pending is dropped, so a late publisher can never roll
//   the file back.
// - Signal the writer to drain and stop once every publisher is gone.

use crate::modules::matches::core::snapshot::MatchSnapshot;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSnapshot {
    pub revision: u64,
    pub snapshot: MatchSnapshot,
}

pub struct SnapshotPublisher {
    tx: watch::Sender<Option<PendingSnapshot>>,
}

pub struct PendingSnapshots {
    rx: watch::Receiver<Option<PendingSnapshot>>,
}

pub fn snapshot_channel() -> (SnapshotPublisher, PendingSnapshots) {
    let (tx, rx) = watch::channel(None);
    (SnapshotPublisher { tx }, PendingSnapshots { rx })
}

impl SnapshotPublisher {
    pub fn publish(&self, pending: PendingSnapshot) {
        self.tx.send_if_modified(|slot| match slot {
            Some(current) if current.revision >= pending.revision => false,
            _ => {
                *slot = Some(pending);
                true
            }
        });
    }
}

impl PendingSnapshots {
    /// Waits for a snapshot newer than the last one returned.
    /// Returns `None` once all publishers are dropped and nothing is left to take.
    pub async fn next(&mut self) -> Option<PendingSnapshot> {
        loop {
            self.rx.changed().await.ok()?;
            let latest = self.rx.borrow_and_update().clone();
            if latest.is_some() {
                return latest;
            }
        }
    }
}

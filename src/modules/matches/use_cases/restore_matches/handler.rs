use crate::modules::matches::core::ports::SnapshotStore;
use crate::modules::matches::core::snapshot::MatchSnapshot;

/// Loads the persisted snapshot for startup. Never fails: an absent snapshot
/// starts empty, an unreadable or out-of-range one is logged and also starts empty.
pub async fn restore_matches(snapshots: &impl SnapshotStore) -> MatchSnapshot {
    let restored = snapshots
        .load()
        .await
        .and_then(|loaded| loaded.map(MatchSnapshot::normalized).transpose());
    match restored {
        Ok(Some(snapshot)) => {
            tracing::info!(
                matches = snapshot.matches.len(),
                next_id = snapshot.next_id,
                "restored match snapshot"
            );
            snapshot
        }
        Ok(None) => {
            tracing::info!("no match snapshot found, starting empty");
            MatchSnapshot::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not restore match snapshot, starting empty");
            MatchSnapshot::default()
        }
    }
}

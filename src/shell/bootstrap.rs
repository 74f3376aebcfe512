use crate::modules::matches::adapters::outbound::match_store_in_memory::InMemoryMatchStore;
use crate::modules::matches::adapters::outbound::snapshot_file::JsonFileSnapshotStore;
use crate::modules::matches::adapters::outbound::snapshot_publisher::snapshot_channel;
use crate::modules::matches::use_cases::restore_matches::handler::restore_matches;
use crate::shell::config::Settings;
use crate::shell::state::AppState;
use crate::shell::workers::snapshot_writer::spawn_snapshot_writer;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct Application {
    pub state: AppState,
    snapshot_writer: Option<JoinHandle<()>>,
}

impl Application {
    /// Loads state synchronously so the service never serves a half-restored store.
    pub async fn build(settings: &Settings) -> Self {
        let Some(path) = &settings.storage_path else {
            tracing::info!("persistence disabled, matches are kept in memory only");
            return Self {
                state: AppState {
                    matches: Arc::new(InMemoryMatchStore::new()),
                },
                snapshot_writer: None,
            };
        };

        let snapshots = Arc::new(JsonFileSnapshotStore::new(path.clone()));
        let snapshot = restore_matches(snapshots.as_ref()).await;
        let (publisher, pending) = snapshot_channel();
        let snapshot_writer = spawn_snapshot_writer(snapshots, pending);
        tracing::info!(path = %path.display(), "persisting matches to file");

        Self {
            state: AppState {
                matches: Arc::new(
                    InMemoryMatchStore::from_snapshot(snapshot).with_publisher(publisher),
                ),
            },
            snapshot_writer: Some(snapshot_writer),
        }
    }

    /// Drops the store and waits for the writer to flush the last snapshot.
    /// Every clone of `state` (for example inside a router) must be gone first.
    pub async fn shutdown(self) {
        let Self {
            state,
            snapshot_writer,
        } = self;
        drop(state);
        let Some(writer) = snapshot_writer else {
            return;
        };
        if let Err(err) = writer.await {
            tracing::warn!(error = %err, "snapshot writer did not stop cleanly");
        }
    }
}

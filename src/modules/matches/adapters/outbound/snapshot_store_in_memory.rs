// In memory implementation of the SnapshotStore port.
//
// Purpose
// - Exercise restore and the snapshot writer without touching the filesystem.

use crate::modules::matches::core::ports::{SnapshotError, SnapshotStore};
use crate::modules::matches::core::snapshot::MatchSnapshot;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySnapshotStore {
    saved: RwLock<Option<MatchSnapshot>>,
    saves: RwLock<usize>,
    attempts: RwLock<usize>,
    failing_saves: RwLock<usize>,
    is_offline: bool,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: MatchSnapshot) -> Self {
        Self {
            saved: RwLock::new(Some(snapshot)),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Fails the next `count` saves, then behaves normally again.
    pub fn fail_next_saves(&mut self, count: usize) {
        self.failing_saves = RwLock::new(count);
    }

    pub async fn saved(&self) -> Option<MatchSnapshot> {
        self.saved.read().await.clone()
    }

    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }

    pub async fn attempt_count(&self) -> usize {
        *self.attempts.read().await
    }
}

#[async_trait::async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> Result<Option<MatchSnapshot>, SnapshotError> {
        if self.is_offline {
            return Err(SnapshotError::Backend("Snapshot store offline".into()));
        }
        Ok(self.saved.read().await.clone())
    }

    async fn save(&self, snapshot: &MatchSnapshot) -> Result<(), SnapshotError> {
        *self.attempts.write().await += 1;
        if self.is_offline {
            return Err(SnapshotError::Backend("Snapshot store offline".into()));
        }
        {
            let mut failing = self.failing_saves.write().await;
            if *failing > 0 {
                *failing -= 1;
                return Err(SnapshotError::Backend("Snapshot save failed".into()));
            }
        }
        *self.saved.write().await = Some(snapshot.clone());
        *self.saves.write().await += 1;
        Ok(())
    }
}

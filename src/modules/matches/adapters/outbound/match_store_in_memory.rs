// In memory implementation of the MatchRepository port.
//
// Responsibilities
// - Keep every record in one map behind a reader/writer lock.
// - Hand out ids from a counter that only moves forward, deletions included.
// - After each successful write, release the lock and then publish a snapshot
//   for the persistence worker, if one is attached.

use crate::modules::matches::adapters::outbound::snapshot_publisher::{
    PendingSnapshot, SnapshotPublisher,
};
use crate::modules::matches::core::incident::MatchIncident;
use crate::modules::matches::core::match_record::{Match, MatchId};
use crate::modules::matches::core::ports::MatchRepository;
use crate::modules::matches::core::snapshot::MatchSnapshot;
use tokio::sync::RwLock;

#[derive(Default)]
struct MatchTable {
    data: MatchSnapshot,
    revision: u64,
}

impl MatchTable {
    // Must be called with the write lock held, after the mutation.
    fn bump(&mut self, publish: bool) -> Option<PendingSnapshot> {
        self.revision += 1;
        publish.then(|| PendingSnapshot {
            revision: self.revision,
            snapshot: self.data.clone(),
        })
    }
}

#[derive(Default)]
pub struct InMemoryMatchStore {
    inner: RwLock<MatchTable>,
    publisher: Option<SnapshotPublisher>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot that fails normalization is logged and replaced by an empty store.
    pub fn from_snapshot(snapshot: MatchSnapshot) -> Self {
        let data = snapshot.normalized().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "discarding unusable match snapshot");
            MatchSnapshot::default()
        });
        Self {
            inner: RwLock::new(MatchTable {
                data,
                revision: 0,
            }),
            publisher: None,
        }
    }

    pub fn with_publisher(mut self, publisher: SnapshotPublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    fn publish(&self, pending: Option<PendingSnapshot>) {
        if let (Some(publisher), Some(pending)) = (&self.publisher, pending) {
            publisher.publish(pending);
        }
    }

    async fn record(&self, id: MatchId, incident: MatchIncident) -> Option<Match> {
        let (updated, pending) = {
            let mut table = self.inner.write().await;
            let record = table.data.matches.get_mut(&id)?;
            incident.apply(record);
            let updated = record.clone();
            (updated, table.bump(self.publisher.is_some()))
        };
        self.publish(pending);
        tracing::debug!(match_id = id, incident = incident.as_str(), "incident recorded");
        Some(updated)
    }
}

#[async_trait::async_trait]
impl MatchRepository for InMemoryMatchStore {
    async fn create(&self, record: Match) -> Match {
        let (created, pending) = {
            let mut table = self.inner.write().await;
            let id = table.data.next_id;
            let created = record.with_id(id);
            table.data.matches.insert(id, created.clone());
            // Restored counters start at or below i64::MAX, so this cannot overflow.
            table.data.next_id += 1;
            (created, table.bump(self.publisher.is_some()))
        };
        self.publish(pending);
        tracing::debug!(match_id = created.id, "match created");
        created
    }

    async fn list(&self) -> Vec<Match> {
        self.inner.read().await.data.matches.values().cloned().collect()
    }

    async fn get(&self, id: MatchId) -> Option<Match> {
        self.inner.read().await.data.matches.get(&id).cloned()
    }

    async fn update(&self, id: MatchId, record: Match) -> Option<Match> {
        let (updated, pending) = {
            let mut table = self.inner.write().await;
            let slot = table.data.matches.get_mut(&id)?;
            *slot = record.with_id(id);
            let updated = slot.clone();
            (updated, table.bump(self.publisher.is_some()))
        };
        self.publish(pending);
        tracing::debug!(match_id = id, "match replaced");
        Some(updated)
    }

    async fn delete(&self, id: MatchId) -> bool {
        let pending = {
            let mut table = self.inner.write().await;
            if table.data.matches.remove(&id).is_none() {
                return false;
            }
            table.bump(self.publisher.is_some())
        };
        self.publish(pending);
        tracing::debug!(match_id = id, "match deleted");
        true
    }

    async fn register_goal(&self, id: MatchId) -> Option<Match> {
        self.record(id, MatchIncident::Goal).await
    }

    async fn register_yellow_card(&self, id: MatchId) -> Option<Match> {
        self.record(id, MatchIncident::YellowCard).await
    }

    async fn register_red_card(&self, id: MatchId) -> Option<Match> {
        self.record(id, MatchIncident::RedCard).await
    }

    async fn set_extra_time(&self, id: MatchId) -> Option<Match> {
        self.record(id, MatchIncident::ExtraTime).await
    }

    async fn snapshot(&self) -> MatchSnapshot {
        self.inner.read().await.data.clone()
    }
}

// Ports define what the HTTP layer and the shell need from the outside world.
//
// Responsibilities
// - MatchRepository: sole owner of match state. Absent ids are a normal outcome
//   (None / false), never an error.
// - SnapshotStore: best-effort durable copy of the whole store.
//
// Testing guidance
// - In memory implementations live in adapters/outbound.

use crate::modules::matches::core::match_record::{Match, MatchId};
use crate::modules::matches::core::snapshot::MatchSnapshot;
use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn create(&self, record: Match) -> Match;
    async fn list(&self) -> Vec<Match>;
    async fn get(&self, id: MatchId) -> Option<Match>;
    async fn update(&self, id: MatchId, record: Match) -> Option<Match>;
    async fn delete(&self, id: MatchId) -> bool;
    async fn register_goal(&self, id: MatchId) -> Option<Match>;
    async fn register_yellow_card(&self, id: MatchId) -> Option<Match>;
    async fn register_red_card(&self, id: MatchId) -> Option<Match>;
    async fn set_extra_time(&self, id: MatchId) -> Option<Match>;
    async fn snapshot(&self) -> MatchSnapshot;
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot id {0} is outside the assignable range")]
    IdOutOfRange(MatchId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// `Ok(None)` when nothing has been persisted yet.
    async fn load(&self) -> Result<Option<MatchSnapshot>, SnapshotError>;
    async fn save(&self, snapshot: &MatchSnapshot) -> Result<(), SnapshotError>;
}

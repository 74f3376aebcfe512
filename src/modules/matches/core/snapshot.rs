// The complete store state as written to, and read from, the backing file.
//
// Layout
// - `matches`: map from id (as a JSON object key) to the full record.
// - `nextID`: the id the next create will receive.

use crate::modules::matches::core::match_record::{Match, MatchId};
use crate::modules::matches::core::ports::SnapshotError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FIRST_MATCH_ID: MatchId = 1;

/// Highest id a loaded snapshot may carry, as record key or as `nextID`.
/// Leaves the counter room to grow without overflowing.
pub const MAX_LOADED_MATCH_ID: MatchId = i64::MAX as MatchId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    #[serde(default)]
    pub matches: BTreeMap<MatchId, Match>,
    #[serde(rename = "nextID", default = "first_match_id")]
    pub next_id: MatchId,
}

fn first_match_id() -> MatchId {
    FIRST_MATCH_ID
}

impl Default for MatchSnapshot {
    fn default() -> Self {
        Self {
            matches: BTreeMap::new(),
            next_id: FIRST_MATCH_ID,
        }
    }
}

impl MatchSnapshot {
    /// Repairs a loaded snapshot so it can never hand out an id already in use:
    /// every record is keyed by its own id and `next_id` lies past the highest key.
    /// Ids beyond `MAX_LOADED_MATCH_ID` reject the whole snapshot.
    pub fn normalized(self) -> Result<Self, SnapshotError> {
        let highest = self.matches.keys().next_back().copied();
        if let Some(id) = highest.filter(|id| *id > MAX_LOADED_MATCH_ID) {
            return Err(SnapshotError::IdOutOfRange(id));
        }
        if self.next_id > MAX_LOADED_MATCH_ID {
            return Err(SnapshotError::IdOutOfRange(self.next_id));
        }
        let floor = highest.map_or(FIRST_MATCH_ID, |last| last + 1);
        let matches = self
            .matches
            .into_iter()
            .map(|(id, record)| (id, record.with_id(id)))
            .collect();
        Ok(Self {
            next_id: self.next_id.max(floor),
            matches,
        })
    }
}

// A football match record as stored and exchanged over HTTP.
//
// Boundaries
// - No input or output here. The store owns identity; callers only supply field values.

use serde::{Deserialize, Serialize};

pub type MatchId = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    pub id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub extra_time: bool,
}

impl Match {
    /// Returns the record re-keyed under `id`, whatever id the caller supplied.
    pub fn with_id(mut self, id: MatchId) -> Self {
        self.id = id;
        self
    }
}

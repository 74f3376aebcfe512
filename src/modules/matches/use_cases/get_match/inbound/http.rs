use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::modules::matches::adapters::inbound::http_error::{ApiError, found, match_id};
use crate::modules::matches::core::match_record::{Match, MatchId};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<MatchId>, PathRejection>,
) -> Result<Json<Match>, ApiError> {
    let id = match_id(path)?;
    found(id, state.matches.get(id).await)
}

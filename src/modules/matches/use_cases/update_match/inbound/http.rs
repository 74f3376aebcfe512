use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::modules::matches::adapters::inbound::http_error::{
    ApiError, found, match_body, match_id,
};
use crate::modules::matches::core::match_record::{Match, MatchId};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<MatchId>, PathRejection>,
    body: Result<Json<Match>, JsonRejection>,
) -> Result<Json<Match>, ApiError> {
    let id = match_id(path)?;
    let record = match_body(body)?;
    found(id, state.matches.update(id, record).await)
}

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::modules::matches::adapters::inbound::http_error::{ApiError, match_id};
use crate::modules::matches::core::match_record::MatchId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<MatchId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = match_id(path)?;
    if state.matches.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}

// PATCH handlers that record a single incident on an existing match.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::modules::matches::adapters::inbound::http_error::{ApiError, found, match_id};
use crate::modules::matches::core::incident::MatchIncident;
use crate::modules::matches::core::match_record::{Match, MatchId};
use crate::shell::state::AppState;

async fn record(
    state: AppState,
    path: Result<Path<MatchId>, PathRejection>,
    incident: MatchIncident,
) -> Result<Json<Match>, ApiError> {
    let id = match_id(path)?;
    let updated = match incident {
        MatchIncident::Goal => state.matches.register_goal(id).await,
        MatchIncident::YellowCard => state.matches.register_yellow_card(id).await,
        MatchIncident::RedCard => state.matches.register_red_card(id).await,
        MatchIncident::ExtraTime => state.matches.set_extra_time(id).await,
    };
    found(id, updated)
}

pub async fn register_goal(
    State(state): State<AppState>,
    path: Result<Path<MatchId>, PathRejection>,
) -> Result<Json<Match>, ApiError> {
    record(state, path, MatchIncident::Goal).await
}

pub async fn register_yellow_card(
    State(state): State<AppState>,
    path: Result<Path<MatchId>, PathRejection>,
) -> Result<Json<Match>, ApiError> {
    record(state, path, MatchIncident::YellowCard).await
}

pub async fn register_red_card(
    State(state): State<AppState>,
    path: Result<Path<MatchId>, PathRejection>,
) -> Result<Json<Match>, ApiError> {
    record(state, path, MatchIncident::RedCard).await
}

pub async fn set_extra_time(
    State(state): State<AppState>,
    path: Result<Path<MatchId>, PathRejection>,
) -> Result<Json<Match>, ApiError> {
    record(state, path, MatchIncident::ExtraTime).await
}

use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::matches::adapters::inbound::http_error::{ApiError, match_body};
use crate::modules::matches::core::match_record::Match;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Match>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let record = match_body(body)?;
    let created = state.matches.create(record).await;
    Ok((StatusCode::CREATED, Json(created)))
}

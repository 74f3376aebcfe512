// Error taxonomy of the HTTP surface and the extractor helpers that feed it.
//
// Responsibilities
// - Reject bad ids and bodies before the store is touched.
// - Render every failure as `{ "error": "<message>" }` with a client status.

use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::modules::matches::core::match_record::{Match, MatchId};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid match id: {0}")]
    InvalidId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("match {0} not found")]
    NotFound(MatchId),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn match_id(path: Result<Path<MatchId>, PathRejection>) -> Result<MatchId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::InvalidId(rejection.body_text()))
}

pub fn match_body(body: Result<Json<Match>, JsonRejection>) -> Result<Match, ApiError> {
    body.map(|Json(record)| record)
        .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))
}

pub fn found(id: MatchId, record: Option<Match>) -> Result<Json<Match>, ApiError> {
    record.map(Json).ok_or(ApiError::NotFound(id))
}

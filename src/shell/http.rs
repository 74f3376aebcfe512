use axum::{
    Router,
    http::Method,
    routing::{get, patch},
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::matches::use_cases::create_match::inbound::http as create_http;
use crate::modules::matches::use_cases::delete_match::inbound::http as delete_http;
use crate::modules::matches::use_cases::get_match::inbound::http as get_http;
use crate::modules::matches::use_cases::list_matches::inbound::http as list_http;
use crate::modules::matches::use_cases::record_incident::inbound::http as incident_http;
use crate::modules::matches::use_cases::update_match::inbound::http as update_http;
use crate::shell::state::AppState;

fn match_routes() -> Router<AppState> {
    Router::new()
        .route("/matches", get(list_http::handle).post(create_http::handle))
        .route(
            "/matches/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/matches/{id}/goals", patch(incident_http::register_goal))
        .route(
            "/matches/{id}/yellowcards",
            patch(incident_http::register_yellow_card),
        )
        .route(
            "/matches/{id}/redcards",
            patch(incident_http::register_red_card),
        )
        .route(
            "/matches/{id}/extratime",
            patch(incident_http::set_extra_time),
        )
}

// Any origin and any header are mirrored back so credentials stay allowed.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(match_routes())
        .nest("/api", match_routes())
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

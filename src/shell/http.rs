use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::remove_event::inbound::http as remove_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", post(create_http::handle).get(list_http::handle))
        .route(
            "/events/{id}",
            get(get_http::handle).delete(remove_http::handle),
        )
        .with_state(state)
}

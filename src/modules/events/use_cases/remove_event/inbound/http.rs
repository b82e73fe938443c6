use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::errors::into_http_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.events.remove_event(&id).await {
        Ok(()) => {
            tracing::info!(event_id = %id, "event removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => into_http_response(error),
    }
}

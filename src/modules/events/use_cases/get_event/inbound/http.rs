use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::errors::into_http_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.events.get_event(&id).await {
        Ok(event) => Json(event).into_response(),
        Err(error) => into_http_response(error),
    }
}

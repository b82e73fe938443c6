use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::errors::into_http_response;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEvent>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable create event body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    match state.events.create_event(command).await {
        Ok(event) => {
            tracing::info!(event_id = %event.id, "event created");
            (StatusCode::CREATED, Json(event)).into_response()
        }
        Err(error) => into_http_response(error),
    }
}

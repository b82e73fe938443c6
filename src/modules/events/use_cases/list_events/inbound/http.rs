use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::errors::into_http_response;
use crate::modules::events::use_cases::list_events::query::ListEvents;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Query(query): Query<ListEvents>,
) -> impl IntoResponse {
    match state.events.get_events(query).await {
        Ok(page) => Json(page).into_response(),
        Err(error) => into_http_response(error),
    }
}

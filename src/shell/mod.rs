// Composition root for the events bounded context.
//
// Responsibilities
// - Instantiate the store from settings, seeding it when a seed file is configured.
// - Wire the store into the HTTP and GraphQL routers.

pub mod graphql;
pub mod http;
pub mod state;

use std::fs;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::id_generator::UuidV7IdGenerator;
use crate::shell::state::AppState;

pub fn build_state(settings: &Settings) -> anyhow::Result<AppState> {
    let store = match &settings.seed_file {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading seed file {}", path.display()))?;
            let events: Vec<Event> = serde_json::from_str(&json)
                .with_context(|| format!("parsing seed file {}", path.display()))?;
            let count = events.len();
            let store = InMemoryEventStore::with_events(events, Arc::new(UuidV7IdGenerator))
                .with_context(|| format!("seeding events from {}", path.display()))?;
            tracing::info!(count, path = %path.display(), "event store seeded");
            store
        }
        None => InMemoryEventStore::new(),
    };
    Ok(AppState::new(Arc::new(store)))
}

pub fn app(state: AppState) -> Router {
    http::router(state.clone())
        .merge(graphql::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

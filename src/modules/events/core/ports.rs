// Ports define what the events module needs from a store, without implementing it.
//
// Responsibilities
// - Describe the four store operations as an object safe async trait.
// - Own the error kinds every store implementation reports.
//
// Boundaries
// - No concrete storage here. Adapters implement the trait in the adapters layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::commands::CreateEvent;
use crate::modules::events::core::event::{Event, EventPage};
use crate::modules::events::core::queries::ListEvents;
use crate::shared::core::interval::InvalidTimestamp;

pub const EVENT_ENTITY: &str = "event";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error(transparent)]
    InvalidTimestamp(#[from] InvalidTimestamp),

    #[error("date range {start_date} - {end_date} is unavailable, it conflicts with event {conflicting_id}")]
    DateRangeUnavailable {
        start_date: String,
        end_date: String,
        conflicting_id: String,
    },

    #[error("non existing {id} record in {entity}s")]
    RecordNotFound { id: String, entity: &'static str },

    #[error("duplicate {id} record in {entity}s")]
    DuplicateRecord { id: String, entity: &'static str },
}

impl EventStoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            id: id.into(),
            entity: EVENT_ENTITY,
        }
    }
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create_event(&self, command: CreateEvent) -> Result<Event, EventStoreError>;
    async fn get_event(&self, id: &str) -> Result<Event, EventStoreError>;
    async fn get_events(&self, query: ListEvents) -> Result<EventPage, EventStoreError>;
    async fn remove_event(&self, id: &str) -> Result<(), EventStoreError>;
}

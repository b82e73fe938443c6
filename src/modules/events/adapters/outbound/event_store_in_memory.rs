// In memory implementation of the EventStore port.
//
// Purpose
// - Hold the authoritative, insertion ordered schedule for the process.
//
// Responsibilities
// - Parse dates before taking any lock, so invalid input never touches the schedule.
// - Run the conflict scan, the id draw and the append under one write guard, so no
//   other write can slip in between them.
// - Never hand out an id the store has held before, seeded or created.
// - Hand out copies of events, never references into the schedule.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::events::core::commands::CreateEvent;
use crate::modules::events::core::event::{Event, EventPage};
use crate::modules::events::core::ports::{EVENT_ENTITY, EventStore, EventStoreError};
use crate::modules::events::core::queries::ListEvents;
use crate::modules::events::core::schedule::{ScheduledEvent, ensure_available, select_window};
use crate::shared::core::interval::TimeSpan;
use crate::shared::infrastructure::id_generator::{IdGenerator, UuidV7IdGenerator};

#[derive(Default)]
struct Ledger {
    schedule: Vec<ScheduledEvent>,
    issued: HashSet<String>,
}

impl Ledger {
    fn next_id(&mut self, ids: &dyn IdGenerator) -> String {
        loop {
            let id = ids.generate();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

pub struct InMemoryEventStore {
    ledger: RwLock<Ledger>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidV7IdGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ledger: RwLock::new(Ledger::default()),
            ids,
        }
    }

    /// Seeds the store with an existing collection, keeping the given ids.
    ///
    /// Every event is checked like a creation against the ones seeded before it.
    /// A repeated id is rejected as well. Seeded ids are never generated later.
    pub fn with_events(
        events: Vec<Event>,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<Self, EventStoreError> {
        let mut ledger = Ledger {
            schedule: Vec::with_capacity(events.len()),
            issued: HashSet::with_capacity(events.len()),
        };
        for event in events {
            if !ledger.issued.insert(event.id.clone()) {
                return Err(EventStoreError::DuplicateRecord {
                    id: event.id,
                    entity: EVENT_ENTITY,
                });
            }
            let scheduled = ScheduledEvent::parse(event)?;
            ensure_available(
                &ledger.schedule,
                &scheduled.span,
                &scheduled.event.start_date,
                &scheduled.event.end_date,
            )?;
            ledger.schedule.push(scheduled);
        }
        Ok(Self {
            ledger: RwLock::new(ledger),
            ids,
        })
    }

    pub async fn len(&self) -> usize {
        self.ledger.read().await.schedule.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ledger.read().await.schedule.is_empty()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create_event(&self, command: CreateEvent) -> Result<Event, EventStoreError> {
        let span = TimeSpan::parse(&command.start_date, &command.end_date)?;

        let mut ledger = self.ledger.write().await;
        ensure_available(&ledger.schedule, &span, &command.start_date, &command.end_date)?;

        let event = Event {
            id: ledger.next_id(self.ids.as_ref()),
            start_date: command.start_date,
            end_date: command.end_date,
            title: command.title,
        };
        ledger.schedule.push(ScheduledEvent::new(event.clone(), span));
        Ok(event)
    }

    async fn get_event(&self, id: &str) -> Result<Event, EventStoreError> {
        self.ledger
            .read()
            .await
            .schedule
            .iter()
            .find(|scheduled| scheduled.event.id == id)
            .map(|scheduled| scheduled.event.clone())
            .ok_or_else(|| EventStoreError::not_found(id))
    }

    async fn get_events(&self, query: ListEvents) -> Result<EventPage, EventStoreError> {
        let window = TimeSpan::parse(&query.start_date, &query.end_date)?;
        let ledger = self.ledger.read().await;
        Ok(select_window(&ledger.schedule, &window, query.offset, query.limit))
    }

    async fn remove_event(&self, id: &str) -> Result<(), EventStoreError> {
        let mut ledger = self.ledger.write().await;
        let position = ledger
            .schedule
            .iter()
            .position(|scheduled| scheduled.event.id == id)
            .ok_or_else(|| EventStoreError::not_found(id))?;
        ledger.schedule.remove(position);
        Ok(())
    }
}

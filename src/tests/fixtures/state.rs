// App state over a store seeded with the three fixture events.
// New events get `new-0001`, `new-0002`, ...

use std::sync::Arc;

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::events::scheduled_events::make_events;
use crate::tests::fixtures::id_generator::SequentialIdGenerator;

pub fn make_test_state() -> AppState {
    let store = InMemoryEventStore::with_events(
        make_events(),
        Arc::new(SequentialIdGenerator::new("new")),
    )
    .unwrap();
    AppState::new(Arc::new(store))
}

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::core::ports::{EventStore, EventStoreError};
use crate::modules::events::use_cases::list_events::query::ListEvents;
use crate::tests::fixtures::commands::create_event::CreateEventBuilder;
use crate::tests::fixtures::id_generator::SequentialIdGenerator;
use std::sync::Arc;

#[tokio::test]
async fn books_lists_and_cancels_a_week_of_events() {
    let store = InMemoryEventStore::with_id_generator(Arc::new(SequentialIdGenerator::new("ev")));

    let mut created = Vec::new();
    for day in 2..=6 {
        let event = store
            .create_event(
                CreateEventBuilder::new()
                    .start_date(format!("2017-01-0{day}T09:00:00.000Z"))
                    .end_date(format!("2017-01-0{day}T17:00:00.000Z"))
                    .title(format!("Day {day}"))
                    .build(),
            )
            .await
            .unwrap();
        created.push(event);
    }

    let overlapping = store
        .create_event(
            CreateEventBuilder::new()
                .start_date("2017-01-04T16:00:00.000Z")
                .end_date("2017-01-04T18:00:00.000Z")
                .build(),
        )
        .await;
    assert!(matches!(
        overlapping,
        Err(EventStoreError::DateRangeUnavailable { ref conflicting_id, .. })
            if conflicting_id == "ev-0003"
    ));

    store.remove_event(&created[2].id).await.unwrap();
    let rebooked = store
        .create_event(
            CreateEventBuilder::new()
                .start_date("2017-01-04T16:00:00.000Z")
                .end_date("2017-01-04T18:00:00.000Z")
                .title("Rebooked")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(rebooked.id, "ev-0006");

    let page = store
        .get_events(ListEvents::new("2017-01-01T00:00:00.000Z", "2017-01-31T00:00:00.000Z"))
        .await
        .unwrap();
    let titles: Vec<_> = page.events.iter().map(|event| event.title.as_str()).collect();
    assert_eq!(titles, vec!["Day 2", "Day 3", "Day 5", "Day 6", "Rebooked"]);
    assert_eq!(page.total_count, 5);
}

// Shared test fixture: three back to back free events inside the first ten days of 2017.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::schedule::ScheduledEvent;
use std::fs;

pub const EVENTS_JSON: &str = "./src/tests/fixtures/events/json/events.json";

pub fn make_events() -> Vec<Event> {
    let json_str = fs::read_to_string(EVENTS_JSON).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub fn make_scheduled_events() -> Vec<ScheduledEvent> {
    make_events()
        .into_iter()
        .map(|event| ScheduledEvent::parse(event).unwrap())
        .collect()
}

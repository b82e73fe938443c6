// Shared test fixture for the CreateEvent command.
// Compiled into the crate only during tests, see the `tests` module in `src/lib.rs`.

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use std::fs;

pub const CREATE_EVENT_JSON: &str = "./src/tests/fixtures/commands/json/create_event.json";

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(CREATE_EVENT_JSON).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn start_date(mut self, v: impl Into<String>) -> Self {
        self.inner.start_date = v.into();
        self
    }

    pub fn end_date(mut self, v: impl Into<String>) -> Self {
        self.inner.end_date = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}

#[cfg(test)]
mod create_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateEventBuilder::default().build();
        assert_eq!(built.start_date, "2017-01-02T14:00:00.000Z");
        assert_eq!(built.end_date, "2017-01-03T14:00:00.000Z");
        assert_eq!(built.title, "Super past event");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateEventBuilder::new()
            .start_date("2018-01-01")
            .end_date("2018-01-02")
            .title("custom")
            .build();
        assert_eq!(custom, CreateEvent::new("2018-01-01", "2018-01-02", "custom"));
    }
}

// Command data type for creating an event.
//
// Purpose
// - Express the intent to book a time range under a title.
//
// Responsibilities
// - Carry the dates exactly as received, the store validates and parses them.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub start_date: String,
    pub end_date: String,
    pub title: String,
}

impl CreateEvent {
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            title: title.into(),
        }
    }
}

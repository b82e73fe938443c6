// The scheduled event entity and the page returned by range queries.
//
// Responsibilities
// - Keep start and end dates exactly as the caller sent them, so responses echo them back.
// - Serialize with camelCase field names for every transport.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub title: String,
}

/// One page of a range query. `total_count` is the length of `events`, not the number of matches
/// before paging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    pub total_count: usize,
    pub events: Vec<Event>,
}

impl From<Vec<Event>> for EventPage {
    fn from(events: Vec<Event>) -> Self {
        Self {
            total_count: events.len(),
            events,
        }
    }
}

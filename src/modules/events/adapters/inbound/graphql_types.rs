use async_graphql::{ID, SimpleObject};

use crate::modules::events::core::event::{Event, EventPage};

#[derive(SimpleObject, Clone)]
#[graphql(name = "Event")]
pub struct GqlEvent {
    pub id: ID,
    pub start_date: String,
    pub end_date: String,
    pub title: String,
}

impl From<Event> for GqlEvent {
    fn from(v: Event) -> Self {
        Self {
            id: ID(v.id),
            start_date: v.start_date,
            end_date: v.end_date,
            title: v.title,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "EventPage")]
pub struct GqlEventPage {
    pub total_count: i64,
    pub events: Vec<GqlEvent>,
}

impl From<EventPage> for GqlEventPage {
    fn from(v: EventPage) -> Self {
        Self {
            total_count: i64::try_from(v.total_count).unwrap_or(i64::MAX),
            events: v.events.into_iter().map(Into::into).collect(),
        }
    }
}

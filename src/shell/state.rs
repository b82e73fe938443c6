use std::sync::Arc;

use crate::modules::events::core::ports::EventStore;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(events: Arc<dyn EventStore>) -> Self {
        Self { events }
    }
}

pub mod id_generator;
pub mod state;

pub mod commands {
    pub mod create_event;
}

pub mod events {
    pub mod scheduled_events;
}

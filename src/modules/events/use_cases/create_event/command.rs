// The create use case takes the core command as its input.

pub use crate::modules::events::core::commands::CreateEvent;

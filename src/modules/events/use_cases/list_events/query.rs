// The list use case takes the core query as its input.

pub use crate::modules::events::core::queries::{DEFAULT_LIMIT, DEFAULT_OFFSET, ListEvents};

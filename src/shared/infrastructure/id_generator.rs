// Unique identifiers for newly created records.
//
// Responsibilities
// - Hand out ids that never repeat during the process lifetime.
// - Let tests swap in a deterministic generator.

use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Time ordered UUIDs, the default for every store.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7IdGenerator;

impl IdGenerator for UuidV7IdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

// Deterministic ids for tests: `<prefix>-0001`, `<prefix>-0002`, ...

use crate::shared::infrastructure::id_generator::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n:04}", self.prefix)
    }
}

use crate::domain::ports::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Production id source: prefix plus the first segment of a random v4 uuid.
///
/// Uniqueness is best-effort; the 32-bit random suffix makes collisions
/// negligible for the volumes this crate handles.
#[derive(Default, Clone)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("{prefix}{}", &uuid[..8])
    }
}

/// Deterministic id source for tests: prefix plus a monotonically increasing
/// counter shared across all namespaces.
#[derive(Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}{n:08}")
    }
}

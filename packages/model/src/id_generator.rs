use crc32fast::Hasher;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh block and page ids.
///
/// Passed into every operation that creates blocks so tests can supply
/// deterministic ids. Any `FnMut() -> String` closure is an id generator.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Derive a short id seed from a name using CRC32
pub fn seed_for(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator: `<seed>-1`, `<seed>-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    seed: String,
    count: u32,
}

impl SequentialIds {
    pub fn new(name: &str) -> Self {
        Self::from_seed(seed_for(name))
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generator seeded from the wall clock and process id, for live
    /// editing sessions where ids must not collide with saved documents.
    pub fn for_session() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut hasher = Hasher::new();
        hasher.update(&nanos.to_le_bytes());
        hasher.update(&std::process::id().to_le_bytes());
        Self::from_seed(format!("{:x}", hasher.finalize()))
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }
}

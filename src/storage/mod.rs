//! Durable key-value slots (localStorage-like) and the ledger gateway on top.

pub mod file;
pub mod gateway;
pub mod memory;
pub mod slot;

pub use file::FileStore;
pub use gateway::{Loaded, PersistenceGateway};
pub use memory::MemoryStore;

use crate::errors::AppResult;

/// Slot key used when none is configured.
pub const DEFAULT_SLOT: &str = "minutesTrackerData";

/// String-to-string store with per-key slots.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

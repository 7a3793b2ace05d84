// ABOUTME: Persistence adapter - writes the wizard state blob to a durable key-value store
// The store is a trait so the file-backed and in-memory backends are interchangeable

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::wizard::WizardState;
use thiserror::Error;
use tracing::{debug, warn};

/// Fixed key the wizard state lives under
pub const STORAGE_KEY: &str = "setupWizardState";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize wizard state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Minimal durable string store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Reads and writes the single wizard record
pub struct WizardStorage {
    store: Box<dyn KeyValueStore>,
}

impl WizardStorage {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Raw saved record, if any. Read failures count as "nothing saved".
    pub fn load(&self) -> Option<String> {
        match self.store.get(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read saved wizard state: {}", e);
                None
            }
        }
    }

    pub fn save(&mut self, state: &WizardState) -> Result<(), StorageError> {
        let blob = serde_json::to_string(state)?;
        self.store.set(STORAGE_KEY, &blob)?;
        debug!(
            "Persisted wizard state (step {}, {} bytes)",
            state.current_step_index,
            blob.len()
        );
        Ok(())
    }

    /// Remove the saved record so the next start begins fresh
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(STORAGE_KEY)
    }
}

impl std::fmt::Debug for WizardStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardStorage").field("key", &STORAGE_KEY).finish_non_exhaustive()
    }
}

//! Where the persisted session record lives.
//!
//! The record is the raw JSON text of a `User`; parsing and consistency
//! checks belong to the store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::util::storage::{self, StorageError};

/// `localStorage` key holding the serialized user.
pub const SESSION_STORAGE_KEY: &str = "mindfulai_user";

/// Device storage for the single session record.
pub trait SessionStorage: Send + Sync {
    /// Raw record, or `None` when nothing is stored.
    fn load(&self) -> Option<String>;

    /// Replace the record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the record could not be written.
    fn save(&self, raw: &str) -> Result<(), StorageError>;

    /// Remove the record. Removing a missing record is not an error.
    fn clear(&self);
}

/// Browser `localStorage` under [`SESSION_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        storage::get_item(SESSION_STORAGE_KEY)
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        storage::set_item(SESSION_STORAGE_KEY, raw)
    }

    fn clear(&self) {
        storage::remove_item(SESSION_STORAGE_KEY);
    }
}

/// In-process record slot. Clones share the slot, so a test can hand one
/// clone to a store and inspect the record through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Storage pre-seeded with `raw`, as if left by an earlier visit.
    #[must_use]
    pub fn with_record(raw: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(raw.to_owned()))) }
    }

    /// Current raw record.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.raw()
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

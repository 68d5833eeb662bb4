//! In-memory cart slot.

use std::sync::{Mutex, PoisonError};

use crate::storage::{CartStore, CartStoreError};

/// Cart slot that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    slot: Mutex<Option<String>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose slot already holds `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(value.into())),
        }
    }

    /// Current slot contents.
    pub fn value(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Option<String>, CartStoreError> {
        Ok(self.value())
    }

    fn save(&self, value: &str) -> Result<(), CartStoreError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());

        Ok(())
    }
}

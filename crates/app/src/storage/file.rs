//! File-backed cart slot.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::storage::{CartStore, CartStoreError};

/// Keeps the cart slot in `<dir>/<key>.json`.
///
/// Writes go to a sibling temporary file which is then renamed over the slot,
/// so a reader never observes a half-written cart.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Location of the slot on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Result<Option<String>, CartStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&self, value: &str) -> Result<(), CartStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let staging = self.path.with_extension("json.tmp");

        fs::write(&staging, value)?;
        fs::rename(&staging, &self.path)?;

        debug!(path = %self.path.display(), bytes = value.len(), "cart slot written");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_slot_loads_as_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileCartStore::new(dir.path(), "cart");

        assert_eq!(store.load()?, None);

        Ok(())
    }

    #[test]
    fn saved_value_is_read_back_verbatim() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileCartStore::new(dir.path().join("nested"), "cart");

        store.save(r#"[{"id":"1"}]"#)?;

        assert_eq!(store.load()?.as_deref(), Some(r#"[{"id":"1"}]"#));
        assert!(store.path().ends_with("nested/cart.json"));

        Ok(())
    }

    #[test]
    fn save_replaces_previous_value() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileCartStore::new(dir.path(), "cart");

        store.save("[1]")?;
        store.save("[]")?;

        assert_eq!(store.load()?.as_deref(), Some("[]"));
        assert!(!dir.path().join("cart.json.tmp").exists());

        Ok(())
    }
}

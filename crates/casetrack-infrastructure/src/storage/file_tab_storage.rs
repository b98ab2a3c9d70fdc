//! File-backed `TabStorage`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use casetrack_core::error::Result;
use casetrack_core::session::TabStorage;

use super::atomic_toml::AtomicTomlFile;

/// Key/value storage persisted as a flat TOML table.
///
/// Every operation re-reads the file, so writes made by another process
/// sharing the same file are visible (last write wins). The mutex only
/// serializes read-modify-write cycles within this process.
pub struct FileTabStorage {
    file: AtomicTomlFile<BTreeMap<String, String>>,
    write_lock: Mutex<()>,
}

impl FileTabStorage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
            write_lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

impl TabStorage for FileTabStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.file.save(&items)?;
        tracing::debug!(key, path = %self.file.path().display(), "Persisted key");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.file.save(&items)?;
            tracing::debug!(key, path = %self.file.path().display(), "Removed key");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casetrack_core::session::{ROLE_KEY, Role, SessionRoleStore};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileTabStorage::new(temp_dir.path().join("tab.toml"));

        assert_eq!(storage.get_item("role").unwrap(), None);
        storage.set_item("role", "officer").unwrap();
        assert_eq!(storage.get_item("role").unwrap().as_deref(), Some("officer"));
        storage.remove_item("role").unwrap();
        assert_eq!(storage.get_item("role").unwrap(), None);
        storage.remove_item("role").unwrap();
    }

    #[test]
    fn test_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileTabStorage::new(temp_dir.path().join("tab.toml"));
        storage.set_item("role", "complainant").unwrap();
        storage.set_item("theme", "dark").unwrap();
        storage.remove_item("role").unwrap();
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_reload_within_tab_restores_role() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tabs").join("t1.toml");

        let store = SessionRoleStore::create(Arc::new(FileTabStorage::new(path.clone()))).unwrap();
        store.set_role(Role::Officer).unwrap();
        store.dispose();

        let reloaded = SessionRoleStore::create(Arc::new(FileTabStorage::new(path.clone()))).unwrap();
        assert_eq!(reloaded.get_role(), Some(Role::Officer));

        reloaded.clear().unwrap();
        let fresh = FileTabStorage::new(path);
        assert_eq!(fresh.get_item(ROLE_KEY).unwrap(), None);
    }

    #[test]
    fn test_separate_tabs_do_not_share_role() {
        let temp_dir = TempDir::new().unwrap();
        let tab_a = SessionRoleStore::create(Arc::new(FileTabStorage::new(
            temp_dir.path().join("a.toml"),
        )))
        .unwrap();
        let tab_b = SessionRoleStore::create(Arc::new(FileTabStorage::new(
            temp_dir.path().join("b.toml"),
        )))
        .unwrap();

        tab_a.set_role(Role::Officer).unwrap();
        assert_eq!(tab_b.refresh(), None);
    }
}

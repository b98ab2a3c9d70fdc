//! The current actor's role, backed by tab-scoped storage.

use std::str::FromStr;
use std::sync::{Arc, RwLock};

use super::role::Role;
use super::storage::TabStorage;
use crate::error::Result;

/// Storage key holding the role value.
pub const ROLE_KEY: &str = "role";

/// Holder of "who is logged in as what".
///
/// Constructed explicitly and shared by `Arc` with the route guard and the
/// views. It trusts whatever role it is given: legitimacy was established by
/// the login call that preceded [`SessionRoleStore::set_role`].
///
/// # Lifecycle
///
/// `create` restores the persisted value, `get_role`/`set_role`/`clear`
/// read and write it, and `dispose` drops the in-memory copy while leaving
/// the persisted key for the next process in the same tab.
pub struct SessionRoleStore {
    storage: Arc<dyn TabStorage>,
    role: RwLock<Option<Role>>,
}

impl SessionRoleStore {
    /// Creates the store and restores any role persisted for this tab.
    ///
    /// An unrecognized persisted value is treated as "no role".
    pub fn create(storage: Arc<dyn TabStorage>) -> Result<Self> {
        let restored = Self::read_persisted(storage.as_ref())?;
        if let Some(role) = restored {
            tracing::debug!(%role, "Restored persisted role");
        }

        Ok(Self {
            storage,
            role: RwLock::new(restored),
        })
    }

    fn read_persisted(storage: &dyn TabStorage) -> Result<Option<Role>> {
        let raw = storage.get_item(ROLE_KEY)?;
        Ok(raw.and_then(|value| match Role::from_str(&value) {
            Ok(role) => Some(role),
            Err(_) => {
                tracing::warn!(value = %value, "Ignoring unknown persisted role");
                None
            }
        }))
    }

    pub fn get_role(&self) -> Option<Role> {
        *self.role.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Persists `role` and makes it visible to subsequent reads.
    ///
    /// The in-memory value only changes once the write succeeded.
    pub fn set_role(&self, role: Role) -> Result<()> {
        self.storage.set_item(ROLE_KEY, role.as_ref())?;
        *self.role.write().unwrap_or_else(|e| e.into_inner()) = Some(role);
        tracing::info!(%role, "Role set");
        Ok(())
    }

    /// Removes the role and its persisted copy.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(ROLE_KEY)?;
        *self.role.write().unwrap_or_else(|e| e.into_inner()) = None;
        tracing::info!("Role cleared");
        Ok(())
    }

    /// Re-reads the persisted key and adopts it.
    ///
    /// Picks up a change made through the same storage by another holder
    /// (last write wins). If storage cannot be read the in-memory value is
    /// returned unchanged.
    pub fn refresh(&self) -> Option<Role> {
        match Self::read_persisted(self.storage.as_ref()) {
            Ok(persisted) => {
                let mut guard = self.role.write().unwrap_or_else(|e| e.into_inner());
                *guard = persisted;
                persisted
            }
            Err(e) => {
                tracing::warn!("Failed to refresh role from storage: {}", e);
                self.get_role()
            }
        }
    }

    /// Ends this store's lifetime. The persisted key is left in place.
    pub fn dispose(self) {
        tracing::debug!("Role store disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStorage {
        items: Mutex<HashMap<String, String>>,
    }

    impl TabStorage for MockStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            Ok(self.items.lock().unwrap().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.items
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<()> {
            self.items.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct FailingStorage;

    impl TabStorage for FailingStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(crate::error::CaseTrackError::storage("disk full"))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(crate::error::CaseTrackError::storage("disk full"))
        }
    }

    #[test]
    fn test_new_store_without_persisted_role() {
        let store = SessionRoleStore::create(Arc::new(MockStorage::default())).unwrap();
        assert_eq!(store.get_role(), None);
    }

    #[test]
    fn test_restores_persisted_role() {
        let storage = Arc::new(MockStorage::default());
        storage.set_item(ROLE_KEY, "officer").unwrap();

        let store = SessionRoleStore::create(storage).unwrap();
        assert_eq!(store.get_role(), Some(Role::Officer));
    }

    #[test]
    fn test_unknown_persisted_role_is_absent() {
        let storage = Arc::new(MockStorage::default());
        storage.set_item(ROLE_KEY, "superuser").unwrap();

        let store = SessionRoleStore::create(storage).unwrap();
        assert_eq!(store.get_role(), None);
    }

    #[test]
    fn test_last_call_wins_in_memory_and_storage() {
        let storage = Arc::new(MockStorage::default());
        let store = SessionRoleStore::create(storage.clone()).unwrap();

        let sequences: Vec<Vec<Option<Role>>> = vec![
            vec![Some(Role::Officer)],
            vec![Some(Role::Officer), None],
            vec![None, Some(Role::Complainant)],
            vec![Some(Role::Complainant), Some(Role::Officer)],
            vec![Some(Role::Officer), None, None, Some(Role::Complainant), None],
        ];

        for sequence in sequences {
            for step in &sequence {
                match step {
                    Some(role) => store.set_role(*role).unwrap(),
                    None => store.clear().unwrap(),
                }
            }
            let expected = *sequence.last().unwrap();
            assert_eq!(store.get_role(), expected);

            let persisted = storage.get_item(ROLE_KEY).unwrap();
            assert_eq!(persisted, expected.map(|r| r.to_string()));
        }
    }

    #[test]
    fn test_failed_write_leaves_role_unchanged() {
        let store = SessionRoleStore::create(Arc::new(FailingStorage)).unwrap();
        assert!(store.set_role(Role::Officer).is_err());
        assert_eq!(store.get_role(), None);
    }

    #[test]
    fn test_refresh_observes_shared_storage_clear() {
        let storage = Arc::new(MockStorage::default());
        let store = SessionRoleStore::create(storage.clone()).unwrap();
        store.set_role(Role::Complainant).unwrap();

        // Another holder of the same storage logs out.
        storage.remove_item(ROLE_KEY).unwrap();
        assert_eq!(store.get_role(), Some(Role::Complainant));
        assert_eq!(store.refresh(), None);
        assert_eq!(store.get_role(), None);
    }

    #[test]
    fn test_dispose_keeps_persisted_role() {
        let storage = Arc::new(MockStorage::default());
        let store = SessionRoleStore::create(storage.clone()).unwrap();
        store.set_role(Role::Officer).unwrap();
        store.dispose();

        let reloaded = SessionRoleStore::create(storage).unwrap();
        assert_eq!(reloaded.get_role(), Some(Role::Officer));
    }
}

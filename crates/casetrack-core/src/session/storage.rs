//! Persisted key/value storage trait.

use crate::error::Result;

/// String key/value storage with browser-`sessionStorage` semantics.
///
/// One instance is scoped to a single tab (or profile, for preferences).
/// Values are not versioned and not portable between installations.
pub trait TabStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

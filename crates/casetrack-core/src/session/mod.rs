//! Session domain module.
//!
//! # Module Structure
//!
//! - `role`: the two actor roles
//! - `storage`: the persisted key/value seam
//! - `store`: the injected role store
//! - `preference`: the light/dark display preference

mod preference;
mod role;
mod storage;
mod store;

pub use preference::{PreferenceStore, THEME_KEY, ThemePreference};
pub use role::Role;
pub use storage::TabStorage;
pub use store::{ROLE_KEY, SessionRoleStore};

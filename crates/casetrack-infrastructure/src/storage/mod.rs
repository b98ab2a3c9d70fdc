//! Persisted client state.

pub mod atomic_toml;
mod file_tab_storage;
mod memory;

pub use file_tab_storage::FileTabStorage;
pub use memory::MemoryTabStorage;

//! Path management for casetrack's configuration and persisted client state.
//!
//! ```text
//! ~/.config/casetrack/         # Config directory
//! └── config.toml              # Client configuration
//!
//! ~/.local/share/casetrack/    # Data directory (or `data_dir` override)
//! ├── profile.toml             # Profile-scoped preferences (theme)
//! └── tabs/
//!     └── <tab_id>.toml        # Tab-scoped session state (role)
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "casetrack";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
    /// Tab id would escape the tabs directory.
    InvalidTabId(String),
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
            PathError::InvalidTabId(id) => write!(f, "Invalid tab id: {:?}", id),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for casetrack_core::CaseTrackError {
    fn from(err: PathError) -> Self {
        casetrack_core::CaseTrackError::config(err.to_string())
    }
}

/// Resolves every on-disk location from an optional data root override.
#[derive(Debug, Clone)]
pub struct CaseTrackPaths {
    data_root: Option<PathBuf>,
}

impl CaseTrackPaths {
    pub fn new(data_root: Option<PathBuf>) -> Self {
        Self { data_root }
    }

    /// Returns the casetrack configuration directory (e.g. `~/.config/casetrack/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Data directory, honoring the override when one was given.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(root) = &self.data_root {
            return Ok(root.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn profile_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("profile.toml"))
    }

    /// File backing one tab's session state.
    pub fn tab_file(&self, tab_id: &str) -> Result<PathBuf, PathError> {
        if !is_valid_tab_id(tab_id) {
            return Err(PathError::InvalidTabId(tab_id.to_string()));
        }
        Ok(self.data_dir()?.join("tabs").join(format!("{}.toml", tab_id)))
    }
}

fn is_valid_tab_id(tab_id: &str) -> bool {
    !tab_id.is_empty()
        && tab_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && Path::new(tab_id).components().count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_root() {
        let paths = CaseTrackPaths::new(Some(PathBuf::from("/tmp/ct")));
        assert_eq!(paths.profile_file().unwrap(), PathBuf::from("/tmp/ct/profile.toml"));
        assert_eq!(
            paths.tab_file("tab-1").unwrap(),
            PathBuf::from("/tmp/ct/tabs/tab-1.toml")
        );
    }

    #[test]
    fn test_tab_id_cannot_escape() {
        let paths = CaseTrackPaths::new(Some(PathBuf::from("/tmp/ct")));
        assert!(paths.tab_file("../etc").is_err());
        assert!(paths.tab_file("").is_err());
        assert!(paths.tab_file("a/b").is_err());
    }
}

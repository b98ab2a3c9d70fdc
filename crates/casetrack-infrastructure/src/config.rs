//! Client configuration.
//!
//! Priority: explicit overrides > environment variables > config.toml > defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use casetrack_core::error::Result;

use crate::paths::CaseTrackPaths;
use crate::storage::atomic_toml::AtomicTomlFile;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

pub const ENV_API_URL: &str = "CASETRACK_API_URL";
pub const ENV_LOG: &str = "CASETRACK_LOG";
pub const ENV_TAB: &str = "CASETRACK_TAB";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every API path is appended to.
    pub api_url: String,
    /// Quiet period before a search input triggers a fetch.
    pub search_debounce_ms: u64,
    /// Tab whose session state this process resumes. Unset means a fresh
    /// tab per process.
    pub tab_id: Option<String>,
    /// `tracing` filter directive.
    pub log_level: String,
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            tab_id: None,
            log_level: "info".to_string(),
            data_dir: None,
        }
    }
}

impl ClientConfig {
    /// Loads from the default config path, then applies the environment.
    pub fn load() -> Result<Self> {
        let path = CaseTrackPaths::config_file()?;
        Self::load_from(&path)
    }

    /// Loads from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let from_file = AtomicTomlFile::<ClientConfig>::new(path.to_path_buf()).load()?;
        if from_file.is_none() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
        }
        let mut config = from_file.unwrap_or_default();
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Applies environment overrides through `lookup` so tests need not
    /// touch the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api_url = url;
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
        if let Some(tab) = lookup(ENV_TAB).filter(|v| !v.is_empty()) {
            self.tab_id = Some(tab);
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn paths(&self) -> CaseTrackPaths {
        CaseTrackPaths::new(self.data_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut config =
            AtomicTomlFile::<ClientConfig>::new(temp_dir.path().join("config.toml"))
                .load()
                .unwrap()
                .unwrap_or_default();
        config.apply_env(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "api_url = \"https://fir.example.pk/\"\nsearch_debounce_ms = 250\n").unwrap();

        let config = AtomicTomlFile::<ClientConfig>::new(path).load().unwrap().unwrap();
        assert_eq!(config.api_base(), "https://fir.example.pk");
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.tab_id, None);
    }

    #[test]
    fn test_env_overrides_file() {
        let env: HashMap<&str, &str> = [(ENV_API_URL, "http://10.0.0.5:8080"), (ENV_TAB, "tab-7")]
            .into_iter()
            .collect();
        let mut config = ClientConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.api_url, "http://10.0.0.5:8080");
        assert_eq!(config.tab_id.as_deref(), Some("tab-7"));
        assert_eq!(config.log_level, "info");
    }
}

//! In-process navigator that records every move.

use std::sync::RwLock;

use casetrack_core::navigation::{NavigationMode, Navigator};

/// Holds the current location in memory. Used by the CLI as the "address
/// bar" and by tests to assert redirects.
#[derive(Debug)]
pub struct InMemoryNavigator {
    state: RwLock<NavigatorState>,
}

#[derive(Debug, Default)]
struct NavigatorState {
    current: String,
    history: Vec<(String, NavigationMode)>,
}

impl InMemoryNavigator {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(NavigatorState {
                current: initial_path.into(),
                history: Vec::new(),
            }),
        }
    }

    /// Every navigation performed since construction.
    pub fn history(&self) -> Vec<(String, NavigationMode)> {
        self.state
            .read()
            .map(|s| s.history.clone())
            .unwrap_or_default()
    }

    /// Removes and returns the recorded moves.
    pub fn take_history(&self) -> Vec<(String, NavigationMode)> {
        self.state
            .write()
            .map(|mut s| std::mem::take(&mut s.history))
            .unwrap_or_default()
    }
}

impl Default for InMemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for InMemoryNavigator {
    fn current_path(&self) -> String {
        self.state
            .read()
            .map(|s| s.current.clone())
            .unwrap_or_else(|_| "/".to_string())
    }

    fn navigate(&self, to: &str, mode: NavigationMode) {
        tracing::debug!(to, ?mode, "Navigate");
        if let Ok(mut state) = self.state.write() {
            state.current = to.to_string();
            state.history.push((to.to_string(), mode));
        }
    }
}

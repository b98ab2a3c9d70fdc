//! Guarded navigation: resolves a path to a screen, or redirects.

use std::sync::Arc;

use casetrack_core::navigation::{GuardDecision, NavigationMode, Navigator, Route, RouteGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    Render(Route),
    /// The guard refused; the navigator already moved to the target.
    Redirect(String),
    /// No screen is registered for the path.
    NoMatch,
}

pub struct Shell {
    guard: RouteGuard,
    navigator: Arc<dyn Navigator>,
}

impl Shell {
    pub fn new(guard: RouteGuard, navigator: Arc<dyn Navigator>) -> Self {
        Self { guard, navigator }
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Navigates to `path`, checking the guard first for gated subtrees.
    pub fn visit(&self, path: &str) -> Visit {
        let Some(route) = Route::parse(path) else {
            if self.navigator.current_path() != path {
                self.navigator.navigate(path, NavigationMode::Push);
            }
            return Visit::NoMatch;
        };

        if let Some(required) = route.required_role() {
            if let GuardDecision::Redirect(target) = self.guard.evaluate(required) {
                tracing::info!(path, to = %target, "Guard redirect");
                self.navigator.navigate(&target, NavigationMode::Replace);
                return Visit::Redirect(target);
            }
        }

        if self.navigator.current_path() != path {
            self.navigator.navigate(path, NavigationMode::Push);
        }
        Visit::Render(route)
    }

    /// Re-resolves wherever the navigator currently points, e.g. after a
    /// full-load redirect.
    pub fn reload(&self) -> Visit {
        let path = self.navigator.current_path();
        self.visit(&path)
    }
}

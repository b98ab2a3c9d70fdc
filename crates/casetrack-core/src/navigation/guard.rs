//! Route guard.
//!
//! Advisory navigation gating only. The server rejects unauthorized requests
//! on its own; nothing here is relied on for access control.

use std::sync::Arc;

use crate::session::{Role, SessionRoleStore};

/// Where every rejected navigation is sent, whatever the mismatch was.
pub const GUARD_REDIRECT_TARGET: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// The guard policy as a pure function.
///
/// 1. no role → redirect to `/`
/// 2. role differs from `required` → redirect to `/`
/// 3. otherwise allow
pub fn decide(current: Option<Role>, required: Role) -> GuardDecision {
    match current {
        None => GuardDecision::Redirect(GUARD_REDIRECT_TARGET.to_string()),
        Some(role) if role != required => {
            GuardDecision::Redirect(GUARD_REDIRECT_TARGET.to_string())
        }
        Some(_) => GuardDecision::Allow,
    }
}

/// Evaluates [`decide`] against a live role store.
#[derive(Clone)]
pub struct RouteGuard {
    store: Arc<SessionRoleStore>,
}

impl RouteGuard {
    pub fn new(store: Arc<SessionRoleStore>) -> Self {
        Self { store }
    }

    /// Reads the store fresh on every call; never caches a previous answer.
    pub fn evaluate(&self, required: Role) -> GuardDecision {
        let current = self.store.refresh();
        let decision = decide(current, required);
        if let GuardDecision::Redirect(ref to) = decision {
            tracing::debug!(?current, %required, to = %to, "Guard redirect");
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_guard_truth_table() {
        let stored: Vec<Option<Role>> = std::iter::once(None)
            .chain(Role::iter().map(Some))
            .collect();

        for current in &stored {
            for required in Role::iter() {
                let decision = decide(*current, required);
                if *current == Some(required) {
                    assert_eq!(decision, GuardDecision::Allow);
                } else {
                    assert_eq!(decision, GuardDecision::Redirect("/".to_string()));
                }
            }
        }
    }
}

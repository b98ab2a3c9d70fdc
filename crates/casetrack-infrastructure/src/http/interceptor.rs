//! Response interceptors run by [`ApiClient`](super::ApiClient) before a
//! result is handed back to the caller.

use std::sync::Arc;

use casetrack_core::navigation::{NavigationMode, Navigator};
use casetrack_core::session::Role;

use super::transport::{HttpRequest, RawResponse};

/// A pipeline stage observing every completed response.
pub trait ResponseInterceptor: Send + Sync {
    fn on_response(&self, request: &HttpRequest, response: &RawResponse);
}

/// Decides where an unauthenticated user is sent, given the current path.
pub trait RedirectPolicy: Send + Sync {
    fn login_target(&self, current_path: &str) -> String;
}

/// Paths under the officer dashboard go to the officer login, everything
/// else to the complainant login at `/`.
#[derive(Debug, Clone)]
pub struct PathPrefixRedirectPolicy {
    prefix: String,
    prefixed_target: String,
    fallback_target: String,
}

impl Default for PathPrefixRedirectPolicy {
    fn default() -> Self {
        Self {
            prefix: "/officer".to_string(),
            prefixed_target: Role::Officer.login_path().to_string(),
            fallback_target: Role::Complainant.login_path().to_string(),
        }
    }
}

impl PathPrefixRedirectPolicy {
    pub fn new(
        prefix: impl Into<String>,
        prefixed_target: impl Into<String>,
        fallback_target: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            prefixed_target: prefixed_target.into(),
            fallback_target: fallback_target.into(),
        }
    }
}

impl RedirectPolicy for PathPrefixRedirectPolicy {
    fn login_target(&self, current_path: &str) -> String {
        if current_path.starts_with(&self.prefix) {
            self.prefixed_target.clone()
        } else {
            self.fallback_target.clone()
        }
    }
}

/// On HTTP 401 performs a full-load redirect to the policy's login page.
/// The failure still propagates to the caller afterwards.
pub struct AuthRedirectInterceptor {
    navigator: Arc<dyn Navigator>,
    policy: Arc<dyn RedirectPolicy>,
}

impl AuthRedirectInterceptor {
    pub fn new(navigator: Arc<dyn Navigator>, policy: Arc<dyn RedirectPolicy>) -> Self {
        Self { navigator, policy }
    }

    pub fn with_default_policy(navigator: Arc<dyn Navigator>) -> Self {
        Self::new(navigator, Arc::new(PathPrefixRedirectPolicy::default()))
    }
}

impl ResponseInterceptor for AuthRedirectInterceptor {
    fn on_response(&self, request: &HttpRequest, response: &RawResponse) {
        if response.status != 401 {
            return;
        }
        let current = self.navigator.current_path();
        let target = self.policy.login_target(&current);
        tracing::info!(url = %request.url, from = %current, to = %target, "Unauthorized, redirecting to login");
        self.navigator.navigate(&target, NavigationMode::FullLoad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_targets() {
        let policy = PathPrefixRedirectPolicy::default();
        assert_eq!(policy.login_target("/officer/dashboard/all-fir"), "/officer/login");
        assert_eq!(policy.login_target("/officer"), "/officer/login");
        assert_eq!(policy.login_target("/complainant/dashboard"), "/");
        assert_eq!(policy.login_target("/"), "/");
    }

    #[test]
    fn test_custom_policy() {
        let policy = PathPrefixRedirectPolicy::new("/staff", "/staff/sign-in", "/sign-in");
        assert_eq!(policy.login_target("/staff/home"), "/staff/sign-in");
        assert_eq!(policy.login_target("/officer/dashboard"), "/sign-in");
    }
}

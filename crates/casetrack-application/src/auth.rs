//! Login, logout and complainant self-registration.

use std::sync::Arc;

use casetrack_core::api::CaseApi;
use casetrack_core::error::{CaseTrackError, Result};
use casetrack_core::model::{LoginCredentials, NewComplainant};
use casetrack_core::navigation::{NavigationMode, Navigator};
use casetrack_core::session::{Role, SessionRoleStore};
use casetrack_core::ui::{Notification, Notifier};
use casetrack_core::validation::Validate;

use crate::list_view::failure_text;

pub struct AuthService {
    api: Arc<dyn CaseApi>,
    store: Arc<SessionRoleStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl AuthService {
    pub fn new(
        api: Arc<dyn CaseApi>,
        store: Arc<SessionRoleStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            store,
            navigator,
            notifier,
        }
    }

    /// Validates, authenticates, records the role and goes to the role's
    /// dashboard. Nothing is sent when validation fails.
    pub async fn login(&self, role: Role, credentials: &LoginCredentials) -> Result<()> {
        credentials.validate()?;

        let envelope = match self.api.login(role, credentials).await {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(%role, error = %err.message, "Login rejected");
                self.notifier
                    .notify(Notification::error(failure_text(&err, "Something went wrong")));
                return Err(CaseTrackError::Api(err));
            }
        };

        self.store.set_role(role)?;
        tracing::info!(%role, "Logged in");
        self.notifier
            .notify(Notification::success(envelope.message_or("Login successful")));
        self.navigator.navigate(role.home_path(), NavigationMode::Push);
        Ok(())
    }

    /// Ends the server session, forgets the role and returns to `/`.
    ///
    /// When no role is held there is no server session to end.
    pub async fn logout(&self) -> Result<()> {
        if let Some(role) = self.store.get_role() {
            match self.api.logout(role).await {
                Ok(envelope) => {
                    self.notifier
                        .notify(Notification::success(envelope.message_or("Logged out")));
                }
                Err(err) => {
                    self.notifier
                        .notify(Notification::error(failure_text(&err, "Logout failed")));
                    return Err(CaseTrackError::Api(err));
                }
            }
            tracing::info!(%role, "Logged out");
        }
        self.store.clear()?;
        self.navigator.navigate("/", NavigationMode::Push);
        Ok(())
    }

    /// Public complainant sign-up. Lands on the complainant login.
    pub async fn register_complainant(&self, complainant: &NewComplainant) -> Result<()> {
        complainant.validate()?;
        match self.api.create_complainant(complainant).await {
            Ok(envelope) => {
                self.notifier.notify(Notification::success(
                    envelope.message_or("Registration successful"),
                ));
                self.navigator
                    .navigate(Role::Complainant.login_path(), NavigationMode::Push);
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .notify(Notification::error(failure_text(&err, "Registration failed")));
                Err(CaseTrackError::Api(err))
            }
        }
    }
}

//! Profile screen for whichever role is logged in.

use std::sync::Arc;

use casetrack_core::api::CaseApi;
use casetrack_core::error::{CaseTrackError, Result};
use casetrack_core::model::Profile;
use casetrack_core::session::SessionRoleStore;
use casetrack_core::ui::{Notification, Notifier};

use crate::list_view::failure_text;

pub struct ProfileService {
    api: Arc<dyn CaseApi>,
    store: Arc<SessionRoleStore>,
    notifier: Arc<dyn Notifier>,
}

impl ProfileService {
    pub fn new(
        api: Arc<dyn CaseApi>,
        store: Arc<SessionRoleStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            store,
            notifier,
        }
    }

    pub async fn load(&self) -> Result<Profile> {
        let role = self
            .store
            .get_role()
            .ok_or_else(|| CaseTrackError::not_permitted("Not logged in"))?;

        match self.api.profile(role).await {
            Ok(envelope) => envelope
                .data
                .ok_or_else(|| CaseTrackError::not_found("profile", role.to_string())),
            Err(err) => {
                self.notifier
                    .notify(Notification::error(failure_text(&err, "Failed to load profile")));
                Err(CaseTrackError::Api(err))
            }
        }
    }
}

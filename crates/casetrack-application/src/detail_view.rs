//! FIR detail screen: the aggregate plus evidence, suspects, arrests and
//! history, and the officer-side mutations on them.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use casetrack_core::api::{ApiResult, CaseApi};
use casetrack_core::error::{ApiError, CaseTrackError, Result};
use casetrack_core::model::{
    Ack, Arrest, Evidence, Fir, FirStatus, HistoryEntry, NewArrest, NewEvidence, NewHistoryEntry,
    NewSuspect, Suspect,
};
use casetrack_core::navigation::{NavigationMode, Navigator};
use casetrack_core::ui::{Confirm, Notification, Notifier};
use casetrack_core::validation::Validate;

use crate::fetch_state::{FetchGate, FetchOutcome};
use crate::list_view::{RemoveOutcome, failure_text};

/// Where a deleted FIR sends the officer.
pub const FIR_LIST_PATH: &str = "/officer/dashboard/all-fir";

const DELETE_PROMPT: &str = "Are you sure you want to delete this FIR?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    /// Officer: every mutation is available.
    Manage,
    /// Complainant: view only.
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FirDetail {
    pub fir: Fir,
    pub evidence: Vec<Evidence>,
    pub suspects: Vec<Suspect>,
    pub arrests: Vec<Arrest>,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    /// The FIR could not be loaded. Offer a retry.
    Empty,
    Loaded(Box<FirDetail>),
}

impl DetailState {
    pub fn detail(&self) -> Option<&FirDetail> {
        match self {
            DetailState::Loaded(detail) => Some(detail.as_ref()),
            _ => None,
        }
    }
}

pub struct FirDetailView {
    api: Arc<dyn CaseApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    mode: DetailMode,
    fir_id: RwLock<String>,
    gate: FetchGate,
    state: RwLock<DetailState>,
}

impl FirDetailView {
    pub fn new(
        api: Arc<dyn CaseApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        mode: DetailMode,
        fir_id: impl Into<String>,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            mode,
            fir_id: RwLock::new(fir_id.into()),
            gate: FetchGate::new(),
            state: RwLock::new(DetailState::Loading),
        }
    }

    pub fn mode(&self) -> DetailMode {
        self.mode
    }

    pub async fn fir_id(&self) -> String {
        self.fir_id.read().await.clone()
    }

    pub async fn state(&self) -> DetailState {
        self.state.read().await.clone()
    }

    /// Switches to another FIR and loads it. Same key is a no-op.
    pub async fn set_key(&self, fir_id: impl Into<String>) -> Option<FetchOutcome> {
        let fir_id = fir_id.into();
        {
            let mut current = self.fir_id.write().await;
            if *current == fir_id {
                return None;
            }
            *current = fir_id;
        }
        Some(self.load().await)
    }

    /// Issues all five fetches concurrently.
    ///
    /// A failed dependent leaves only its own section empty. A failed or
    /// absent aggregate moves the view to [`DetailState::Empty`] and drops
    /// whatever the dependents returned.
    pub async fn load(&self) -> FetchOutcome {
        let ticket = self.gate.issue();
        let fir_id = self.fir_id().await;
        *self.state.write().await = DetailState::Loading;
        tracing::debug!(fir_id = %fir_id, "Loading FIR detail");

        let fetches = async {
            tokio::join!(
                self.api.get_fir(&fir_id),
                self.api.list_evidence(&fir_id),
                self.api.list_suspects(&fir_id),
                self.api.list_arrests(&fir_id),
                self.api.list_history(&fir_id),
            )
        };
        let Some((fir, evidence, suspects, arrests, history)) =
            self.gate.guard(ticket, fetches).await
        else {
            return FetchOutcome::Discarded;
        };

        let fir = match fir {
            Ok(envelope) => envelope.data,
            Err(err) => {
                self.notifier.notify(Notification::error(failure_text(
                    &err,
                    "Failed to fetch FIR details",
                )));
                None
            }
        };
        let Some(fir) = fir else {
            tracing::warn!(fir_id = %fir_id, "FIR not available");
            *self.state.write().await = DetailState::Empty;
            return FetchOutcome::Failed;
        };

        let detail = FirDetail {
            fir,
            evidence: self.section("evidence", evidence),
            suspects: self.section("suspects", suspects),
            arrests: self.section("arrests", arrests),
            history: self.section("history", history),
        };
        *self.state.write().await = DetailState::Loaded(Box::new(detail));
        FetchOutcome::Applied
    }

    /// Manual retry from the empty state.
    pub async fn retry(&self) -> FetchOutcome {
        self.load().await
    }

    fn section<T>(&self, name: &str, result: ApiResult<Vec<T>>) -> Vec<T> {
        match result {
            Ok(envelope) => envelope.into_items(),
            Err(err) => {
                tracing::warn!(section = name, error = %err.message, "Detail section failed");
                self.notifier.notify(Notification::error(failure_text(
                    &err,
                    &format!("Failed to fetch {name}"),
                )));
                Vec::new()
            }
        }
    }

    pub fn dispose(&self) {
        self.gate.dispose();
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub async fn update_status(&self, status: FirStatus) -> Result<()> {
        self.ensure_manage()?;
        let fir_id = self.fir_id().await;
        self.mutate(
            self.api.update_fir_status(&fir_id, status),
            "FIR status updated successfully",
            "Failed to update status",
        )
        .await
    }

    /// Deletes the FIR after confirmation and leaves for the FIR list.
    pub async fn delete(&self, confirm: &dyn Confirm) -> Result<RemoveOutcome> {
        self.ensure_manage()?;
        if !confirm.confirm(DELETE_PROMPT).await {
            return Ok(RemoveOutcome::Declined);
        }
        let fir_id = self.fir_id().await;
        match self.api.delete_fir(&fir_id).await {
            Ok(_) => {
                tracing::info!(fir_id = %fir_id, "FIR deleted");
                self.notifier
                    .notify(Notification::success("FIR deleted successfully"));
                self.dispose();
                self.navigator.navigate(FIR_LIST_PATH, NavigationMode::Push);
                Ok(RemoveOutcome::Removed)
            }
            Err(err) => Err(self.report(err, "Failed to delete FIR")),
        }
    }

    pub async fn add_evidence(&self, evidence: &NewEvidence) -> Result<()> {
        self.ensure_manage()?;
        evidence.validate()?;
        let fir_id = self.fir_id().await;
        self.mutate(
            self.api.add_evidence(&fir_id, evidence),
            "Evidence added",
            "Failed to add evidence",
        )
        .await
    }

    pub async fn add_suspect(&self, suspect: &NewSuspect) -> Result<()> {
        self.ensure_manage()?;
        suspect.validate()?;
        let fir_id = self.fir_id().await;
        self.mutate(
            self.api.add_suspect(&fir_id, suspect),
            "Suspect added",
            "Failed to add suspect",
        )
        .await
    }

    pub async fn verify_suspect(&self, suspect_id: &str) -> Result<()> {
        self.ensure_manage()?;
        self.mutate(
            self.api.verify_suspect(suspect_id),
            "Suspect verified",
            "Failed to verify suspect",
        )
        .await
    }

    /// `arrest.fir_id` is overwritten with this view's FIR.
    pub async fn add_arrest(&self, arrest: &NewArrest) -> Result<()> {
        self.ensure_manage()?;
        arrest.validate()?;
        let arrest = NewArrest {
            fir_id: self.fir_id().await,
            ..arrest.clone()
        };
        self.mutate(
            self.api.add_arrest(&arrest),
            "Arrest added",
            "Failed to add arrest",
        )
        .await
    }

    pub async fn add_history(&self, entry: &NewHistoryEntry) -> Result<()> {
        self.ensure_manage()?;
        entry.validate()?;
        let fir_id = self.fir_id().await;
        self.mutate(
            self.api.add_history(&fir_id, entry),
            "History added",
            "Failed to add history",
        )
        .await
    }

    fn ensure_manage(&self) -> Result<()> {
        match self.mode {
            DetailMode::Manage => Ok(()),
            DetailMode::ReadOnly => Err(CaseTrackError::not_permitted(
                "This FIR is read-only for complainants",
            )),
        }
    }

    /// Success: notify and reload everything. Failure: notify and leave the
    /// current state alone.
    async fn mutate<F>(&self, call: F, success: &str, fallback: &str) -> Result<()>
    where
        F: Future<Output = std::result::Result<Ack, ApiError>>,
    {
        match call.await {
            Ok(_) => {
                self.notifier.notify(Notification::success(success));
                self.load().await;
                Ok(())
            }
            Err(err) => Err(self.report(err, fallback)),
        }
    }

    fn report(&self, err: ApiError, fallback: &str) -> CaseTrackError {
        tracing::warn!(error = %err.message, "FIR mutation rejected");
        self.notifier
            .notify(Notification::error(failure_text(&err, fallback)));
        CaseTrackError::Api(err)
    }
}

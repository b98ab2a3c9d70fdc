//! Officer-side creation forms and the lookups that feed their selects.

use std::sync::Arc;
use std::time::Duration;

use casetrack_core::api::{ApiResult, CaseApi};
use casetrack_core::error::{ApiError, CaseTrackError, Result};
use casetrack_core::model::{
    Ack, CrimeCategory, CrimeType, NewComplainant, NewFir, NewOfficer, NewStation, Officer,
    PoliceStation,
};
use casetrack_core::ui::{Notification, Notifier};
use casetrack_core::validation::Validate;

use crate::debounce::Debouncer;
use crate::list_view::failure_text;

/// Choices for the register-FIR and add-officer selects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptions {
    pub stations: Vec<PoliceStation>,
    pub crime_types: Vec<CrimeType>,
    pub crime_categories: Vec<CrimeCategory>,
}

/// Choices behind the FIR list filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub stations: Vec<PoliceStation>,
    pub crime_types: Vec<CrimeType>,
    pub officers: Vec<Officer>,
}

pub struct FormService {
    api: Arc<dyn CaseApi>,
    notifier: Arc<dyn Notifier>,
    officer_search: Debouncer,
}

impl FormService {
    pub fn new(api: Arc<dyn CaseApi>, notifier: Arc<dyn Notifier>, search_debounce: Duration) -> Self {
        Self {
            api,
            notifier,
            officer_search: Debouncer::new(search_debounce),
        }
    }

    /// Loads every lookup concurrently. Failures only log and leave that
    /// list empty.
    pub async fn load_options(&self) -> FormOptions {
        let (stations, crime_types, crime_categories) = tokio::join!(
            self.api.list_stations(""),
            self.api.crime_types(),
            self.api.crime_categories(),
        );
        FormOptions {
            stations: best_effort("stations", stations),
            crime_types: best_effort("crime types", crime_types),
            crime_categories: best_effort("crime categories", crime_categories),
        }
    }

    /// Stations, crime types and officers for the FIR list filters. Same
    /// best-effort rule as [`FormService::load_options`].
    pub async fn filter_options(&self) -> FilterOptions {
        let (stations, crime_types, officers) = tokio::join!(
            self.api.list_stations(""),
            self.api.crime_types(),
            self.api.search_officers(""),
        );
        FilterOptions {
            stations: best_effort("stations", stations),
            crime_types: best_effort("crime types", crime_types),
            officers: best_effort("officers", officers),
        }
    }

    /// Debounced officer lookup for the officer select. Superseded calls
    /// return `None`.
    pub async fn search_officers(&self, text: impl Into<String>) -> Option<Vec<Officer>> {
        let text = self.officer_search.settle(text.into()).await?;
        Some(best_effort("officers", self.api.search_officers(&text).await))
    }

    pub async fn register_fir(&self, fir: &NewFir) -> Result<()> {
        fir.validate()?;
        let result = self.api.create_fir(fir).await;
        self.submitted(result, None, "Failed to submit FIR")
    }

    pub async fn create_officer(&self, officer: &NewOfficer) -> Result<()> {
        officer.validate()?;
        let result = self.api.create_officer(officer).await;
        self.submitted(
            result,
            Some("Officer created successfully"),
            "Failed to create officer",
        )
    }

    pub async fn create_station(&self, station: &NewStation) -> Result<()> {
        station.validate()?;
        let result = self.api.create_station(station).await;
        self.submitted(result, None, "Failed to create station")
    }

    pub async fn create_complainant(&self, complainant: &NewComplainant) -> Result<()> {
        complainant.validate()?;
        let result = self.api.create_complainant(complainant).await;
        self.submitted(
            result,
            Some("Complainant created successfully"),
            "Failed to create complainant",
        )
    }

    /// `fixed` overrides the server message on success; otherwise the
    /// server's message is shown.
    fn submitted(
        &self,
        result: std::result::Result<Ack, ApiError>,
        fixed: Option<&str>,
        fallback: &str,
    ) -> Result<()> {
        match result {
            Ok(envelope) => {
                let message = match fixed {
                    Some(text) => text.to_string(),
                    None => envelope.message_or("Saved successfully"),
                };
                self.notifier.notify(Notification::success(message));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err.message, "Form submission rejected");
                self.notifier
                    .notify(Notification::error(failure_text(&err, fallback)));
                Err(CaseTrackError::Api(err))
            }
        }
    }
}

fn best_effort<T>(what: &str, result: ApiResult<Vec<T>>) -> Vec<T> {
    match result {
        Ok(envelope) => envelope.into_items(),
        Err(err) => {
            tracing::warn!(lookup = what, error = %err.message, "Lookup fetch failed");
            Vec::new()
        }
    }
}

//! List sources for each collection screen.

use std::sync::Arc;

use async_trait::async_trait;

use casetrack_core::api::{ApiResult, CaseApi};
use casetrack_core::error::ApiError;
use casetrack_core::model::{
    Ack, Complainant, Fir, FirFilters, FirSearchRequest, Officer, PoliceStation,
};

use crate::list_view::{ListSource, RemovableSource, SearchQuery, TextQuery};

/// Officer-side FIR table filters plus the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirQuery {
    pub filters: FirFilters,
    pub search: String,
}

impl SearchQuery for FirQuery {
    fn search_text(&self) -> &str {
        &self.search
    }

    fn with_search(&self, text: &str) -> Self {
        Self {
            filters: self.filters.clone(),
            search: text.to_string(),
        }
    }
}

/// All FIRs, searched and filtered server-side.
pub struct FirSearchSource {
    api: Arc<dyn CaseApi>,
}

impl FirSearchSource {
    pub fn new(api: Arc<dyn CaseApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for FirSearchSource {
    type Item = Fir;
    type Query = FirQuery;

    fn fetch_failed_message(&self) -> &'static str {
        "Failed to fetch FIRs"
    }

    async fn fetch(&self, query: &FirQuery) -> ApiResult<Vec<Fir>> {
        let request = FirSearchRequest::new(query.filters.clone(), query.search.clone());
        self.api.search_firs(&request).await
    }
}

#[async_trait]
impl RemovableSource for FirSearchSource {
    fn removed_message(&self) -> &'static str {
        "FIR deleted successfully"
    }

    fn remove_failed_message(&self) -> &'static str {
        "Failed to delete FIR"
    }

    async fn remove(&self, id: &str) -> Result<Ack, ApiError> {
        self.api.delete_fir(id).await
    }
}

/// The logged-in complainant's own FIRs. No filters.
pub struct MyFirsSource {
    api: Arc<dyn CaseApi>,
}

impl MyFirsSource {
    pub fn new(api: Arc<dyn CaseApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for MyFirsSource {
    type Item = Fir;
    type Query = ();

    fn fetch_failed_message(&self) -> &'static str {
        "Failed to fetch FIRs"
    }

    async fn fetch(&self, _query: &()) -> ApiResult<Vec<Fir>> {
        self.api.my_firs().await
    }
}

/// Officer search plus an optional station filter. The server only knows
/// `?q=`; the station is matched against each row's joined station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficerQuery {
    pub search: String,
    pub station_id: Option<String>,
}

impl OfficerQuery {
    fn admits(&self, officer: &Officer) -> bool {
        match &self.station_id {
            None => true,
            Some(wanted) => officer
                .station
                .as_ref()
                .and_then(|station| station.station_id.as_deref())
                == Some(wanted.as_str()),
        }
    }
}

impl SearchQuery for OfficerQuery {
    fn search_text(&self) -> &str {
        &self.search
    }

    fn with_search(&self, text: &str) -> Self {
        Self {
            search: text.to_string(),
            station_id: self.station_id.clone(),
        }
    }
}

pub struct OfficerSource {
    api: Arc<dyn CaseApi>,
}

impl OfficerSource {
    pub fn new(api: Arc<dyn CaseApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for OfficerSource {
    type Item = Officer;
    type Query = OfficerQuery;

    fn fetch_failed_message(&self) -> &'static str {
        "Failed to fetch officers"
    }

    async fn fetch(&self, query: &OfficerQuery) -> ApiResult<Vec<Officer>> {
        let mut envelope = self.api.search_officers(&query.search).await?;
        envelope.data = envelope
            .data
            .take()
            .map(|officers| officers.into_iter().filter(|o| query.admits(o)).collect());
        Ok(envelope)
    }
}

#[async_trait]
impl RemovableSource for OfficerSource {
    fn removed_message(&self) -> &'static str {
        "Officer deleted"
    }

    fn remove_failed_message(&self) -> &'static str {
        "Failed to delete officer"
    }

    async fn remove(&self, id: &str) -> Result<Ack, ApiError> {
        self.api.delete_officer(id).await
    }
}

pub struct StationSource {
    api: Arc<dyn CaseApi>,
}

impl StationSource {
    pub fn new(api: Arc<dyn CaseApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for StationSource {
    type Item = PoliceStation;
    type Query = TextQuery;

    fn fetch_failed_message(&self) -> &'static str {
        "Failed to fetch stations"
    }

    async fn fetch(&self, query: &TextQuery) -> ApiResult<Vec<PoliceStation>> {
        self.api.list_stations(&query.0).await
    }
}

#[async_trait]
impl RemovableSource for StationSource {
    fn removed_message(&self) -> &'static str {
        "Station deleted successfully"
    }

    fn remove_failed_message(&self) -> &'static str {
        "Failed to delete station"
    }

    async fn remove(&self, id: &str) -> Result<Ack, ApiError> {
        self.api.delete_station(id).await
    }
}

pub struct ComplainantSource {
    api: Arc<dyn CaseApi>,
}

impl ComplainantSource {
    pub fn new(api: Arc<dyn CaseApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for ComplainantSource {
    type Item = Complainant;
    type Query = TextQuery;

    fn fetch_failed_message(&self) -> &'static str {
        "Failed to fetch complainants"
    }

    async fn fetch(&self, query: &TextQuery) -> ApiResult<Vec<Complainant>> {
        self.api.list_complainants(&query.0).await
    }
}

#[async_trait]
impl RemovableSource for ComplainantSource {
    fn removed_message(&self) -> &'static str {
        "Complainant deleted successfully"
    }

    fn remove_failed_message(&self) -> &'static str {
        "Failed to delete complainant"
    }

    async fn remove(&self, id: &str) -> Result<Ack, ApiError> {
        self.api.delete_complainant(id).await
    }
}

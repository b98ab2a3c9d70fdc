//! The server API surface consumed by the views.
//!
//! Each method maps to one endpoint. Implementations return the envelope
//! exactly as the server produced it; interpreting `data`/`success` is left
//! to the caller.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{
    Ack, AnalyticsDataset, AnalyticsRow, Arrest, Complainant, CrimeCategory, CrimeType, Envelope,
    Evidence, Fir, FirSearchRequest, FirStatus, HistoryEntry, LoginCredentials, NewArrest,
    NewComplainant, NewEvidence, NewFir, NewHistoryEntry, NewOfficer, NewStation, NewSuspect,
    Officer, PoliceStation, Profile, Suspect, TimeGranularity,
};
use crate::session::Role;

/// Result type of every endpoint call.
pub type ApiResult<T> = std::result::Result<Envelope<T>, ApiError>;

#[async_trait]
pub trait CaseApi: Send + Sync {
    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    async fn login(&self, role: Role, credentials: &LoginCredentials) -> ApiResult<serde_json::Value>;

    async fn logout(&self, role: Role) -> ApiResult<serde_json::Value>;

    async fn profile(&self, role: Role) -> ApiResult<Profile>;

    // ------------------------------------------------------------------
    // FIRs
    // ------------------------------------------------------------------

    async fn search_firs(&self, request: &FirSearchRequest) -> ApiResult<Vec<Fir>>;

    /// FIRs filed by the logged-in complainant.
    async fn my_firs(&self) -> ApiResult<Vec<Fir>>;

    async fn get_fir(&self, fir_id: &str) -> ApiResult<Fir>;

    async fn create_fir(&self, fir: &NewFir) -> std::result::Result<Ack, ApiError>;

    async fn update_fir_status(&self, fir_id: &str, status: FirStatus) -> std::result::Result<Ack, ApiError>;

    async fn delete_fir(&self, fir_id: &str) -> std::result::Result<Ack, ApiError>;

    // ------------------------------------------------------------------
    // FIR children
    // ------------------------------------------------------------------

    async fn list_evidence(&self, fir_id: &str) -> ApiResult<Vec<Evidence>>;

    async fn add_evidence(&self, fir_id: &str, evidence: &NewEvidence) -> std::result::Result<Ack, ApiError>;

    async fn list_suspects(&self, fir_id: &str) -> ApiResult<Vec<Suspect>>;

    async fn add_suspect(&self, fir_id: &str, suspect: &NewSuspect) -> std::result::Result<Ack, ApiError>;

    async fn verify_suspect(&self, suspect_id: &str) -> std::result::Result<Ack, ApiError>;

    async fn list_arrests(&self, fir_id: &str) -> ApiResult<Vec<Arrest>>;

    async fn add_arrest(&self, arrest: &NewArrest) -> std::result::Result<Ack, ApiError>;

    async fn list_history(&self, fir_id: &str) -> ApiResult<Vec<HistoryEntry>>;

    async fn add_history(&self, fir_id: &str, entry: &NewHistoryEntry) -> std::result::Result<Ack, ApiError>;

    // ------------------------------------------------------------------
    // Reference entities
    // ------------------------------------------------------------------

    /// Empty `query` lists every officer.
    async fn search_officers(&self, query: &str) -> ApiResult<Vec<Officer>>;

    async fn create_officer(&self, officer: &NewOfficer) -> std::result::Result<Ack, ApiError>;

    async fn delete_officer(&self, officer_id: &str) -> std::result::Result<Ack, ApiError>;

    async fn list_stations(&self, query: &str) -> ApiResult<Vec<PoliceStation>>;

    async fn create_station(&self, station: &NewStation) -> std::result::Result<Ack, ApiError>;

    async fn delete_station(&self, station_id: &str) -> std::result::Result<Ack, ApiError>;

    async fn list_complainants(&self, query: &str) -> ApiResult<Vec<Complainant>>;

    async fn create_complainant(&self, complainant: &NewComplainant) -> std::result::Result<Ack, ApiError>;

    async fn delete_complainant(&self, complainant_id: &str) -> std::result::Result<Ack, ApiError>;

    async fn crime_types(&self) -> ApiResult<Vec<CrimeType>>;

    async fn crime_categories(&self) -> ApiResult<Vec<CrimeCategory>>;

    // ------------------------------------------------------------------
    // Analytics
    // ------------------------------------------------------------------

    async fn analytics(
        &self,
        dataset: AnalyticsDataset,
        granularity: TimeGranularity,
    ) -> ApiResult<Vec<AnalyticsRow>>;
}

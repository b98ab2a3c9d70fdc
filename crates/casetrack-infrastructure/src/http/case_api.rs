//! [`CaseApi`] over HTTP.

use async_trait::async_trait;
use reqwest::Url;
use serde_json::{Value, json};

use casetrack_core::api::{ApiResult, CaseApi};
use casetrack_core::error::ApiError;
use casetrack_core::model::{
    Ack, AnalyticsDataset, AnalyticsRow, Arrest, Complainant, CrimeCategory, CrimeType, Evidence,
    Fir, FirSearchRequest, FirStatus, HistoryEntry, LoginCredentials, NewArrest, NewComplainant,
    NewEvidence, NewFir, NewHistoryEntry, NewOfficer, NewStation, NewSuspect, Officer,
    PoliceStation, Profile, StatusChange, Suspect, TimeGranularity,
};
use casetrack_core::session::Role;

use super::client::ApiClient;

pub struct HttpCaseApi {
    client: ApiClient,
}

impl HttpCaseApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

/// `path?key=value` with the value form-encoded.
fn with_query(path: &str, key: &str, value: &str) -> String {
    match Url::parse(&format!("http://localhost{path}")) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair(key, value);
            match url.query() {
                Some(query) => format!("{}?{}", url.path(), query),
                None => url.path().to_string(),
            }
        }
        Err(_) => format!("{path}?{key}="),
    }
}

#[async_trait]
impl CaseApi for HttpCaseApi {
    async fn login(&self, role: Role, credentials: &LoginCredentials) -> ApiResult<Value> {
        self.client
            .post(&format!("/api/{}/login", role.api_segment()), credentials)
            .await
    }

    async fn logout(&self, role: Role) -> ApiResult<Value> {
        self.client
            .get(&format!("/api/{}/logout", role.api_segment()))
            .await
    }

    async fn profile(&self, role: Role) -> ApiResult<Profile> {
        self.client
            .get(&format!("/api/{}/user", role.api_segment()))
            .await
    }

    async fn search_firs(&self, request: &FirSearchRequest) -> ApiResult<Vec<Fir>> {
        self.client.post("/api/firs/search", request).await
    }

    async fn my_firs(&self) -> ApiResult<Vec<Fir>> {
        self.client.get("/api/firs/user-firs").await
    }

    async fn get_fir(&self, fir_id: &str) -> ApiResult<Fir> {
        self.client.get(&format!("/api/firs/{fir_id}")).await
    }

    async fn create_fir(&self, fir: &NewFir) -> Result<Ack, ApiError> {
        self.client.post("/api/firs", fir).await
    }

    async fn update_fir_status(&self, fir_id: &str, status: FirStatus) -> Result<Ack, ApiError> {
        self.client
            .patch(&format!("/api/firs/{fir_id}/status"), &StatusChange { status })
            .await
    }

    async fn delete_fir(&self, fir_id: &str) -> Result<Ack, ApiError> {
        self.client.delete(&format!("/api/firs/{fir_id}")).await
    }

    async fn list_evidence(&self, fir_id: &str) -> ApiResult<Vec<Evidence>> {
        self.client.get(&format!("/api/evidence/firs/{fir_id}")).await
    }

    async fn add_evidence(&self, fir_id: &str, evidence: &NewEvidence) -> Result<Ack, ApiError> {
        self.client
            .post(&format!("/api/evidence/firs/{fir_id}"), evidence)
            .await
    }

    async fn list_suspects(&self, fir_id: &str) -> ApiResult<Vec<Suspect>> {
        self.client.get(&format!("/api/suspects/firs/{fir_id}")).await
    }

    async fn add_suspect(&self, fir_id: &str, suspect: &NewSuspect) -> Result<Ack, ApiError> {
        self.client
            .post(&format!("/api/suspects/firs/{fir_id}"), suspect)
            .await
    }

    async fn verify_suspect(&self, suspect_id: &str) -> Result<Ack, ApiError> {
        self.client
            .patch(&format!("/api/suspects/{suspect_id}/verify"), &json!({}))
            .await
    }

    async fn list_arrests(&self, fir_id: &str) -> ApiResult<Vec<Arrest>> {
        self.client.get(&format!("/api/arrests/firs/{fir_id}")).await
    }

    async fn add_arrest(&self, arrest: &NewArrest) -> Result<Ack, ApiError> {
        self.client.post("/api/arrests", arrest).await
    }

    async fn list_history(&self, fir_id: &str) -> ApiResult<Vec<HistoryEntry>> {
        self.client.get(&format!("/api/history/firs/{fir_id}")).await
    }

    async fn add_history(&self, fir_id: &str, entry: &NewHistoryEntry) -> Result<Ack, ApiError> {
        self.client
            .post(&format!("/api/history/firs/{fir_id}"), entry)
            .await
    }

    async fn search_officers(&self, query: &str) -> ApiResult<Vec<Officer>> {
        self.client
            .get(&with_query("/api/officers/search", "q", query))
            .await
    }

    async fn create_officer(&self, officer: &NewOfficer) -> Result<Ack, ApiError> {
        self.client.post("/api/officers", officer).await
    }

    async fn delete_officer(&self, officer_id: &str) -> Result<Ack, ApiError> {
        self.client
            .delete(&format!("/api/officers/{officer_id}"))
            .await
    }

    async fn list_stations(&self, query: &str) -> ApiResult<Vec<PoliceStation>> {
        self.client.get(&with_query("/api/stations", "q", query)).await
    }

    async fn create_station(&self, station: &NewStation) -> Result<Ack, ApiError> {
        self.client.post("/api/stations/", station).await
    }

    async fn delete_station(&self, station_id: &str) -> Result<Ack, ApiError> {
        self.client
            .delete(&format!("/api/stations/{station_id}"))
            .await
    }

    async fn list_complainants(&self, query: &str) -> ApiResult<Vec<Complainant>> {
        self.client
            .get(&with_query("/api/complainants", "q", query))
            .await
    }

    async fn create_complainant(&self, complainant: &NewComplainant) -> Result<Ack, ApiError> {
        self.client.post("/api/complainants", complainant).await
    }

    async fn delete_complainant(&self, complainant_id: &str) -> Result<Ack, ApiError> {
        self.client
            .delete(&format!("/api/complainants/{complainant_id}"))
            .await
    }

    async fn crime_types(&self) -> ApiResult<Vec<CrimeType>> {
        self.client.get("/api/crime/crime-types").await
    }

    async fn crime_categories(&self) -> ApiResult<Vec<CrimeCategory>> {
        self.client.get("/api/crime/crime-categories").await
    }

    async fn analytics(
        &self,
        dataset: AnalyticsDataset,
        granularity: TimeGranularity,
    ) -> ApiResult<Vec<AnalyticsRow>> {
        self.client.get(&dataset.endpoint(granularity)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::scripted::ScriptedTransport;
    use casetrack_core::model::FirFilters;
    use reqwest::Method;
    use std::sync::Arc;

    fn api(transport: Arc<ScriptedTransport>) -> HttpCaseApi {
        HttpCaseApi::new(ApiClient::new("http://localhost:3000/", transport))
    }

    #[test]
    fn test_with_query_encodes() {
        assert_eq!(with_query("/api/stations", "q", ""), "/api/stations?q=");
        assert_eq!(
            with_query("/api/officers/search", "q", "ali khan"),
            "/api/officers/search?q=ali+khan"
        );
    }

    #[tokio::test]
    async fn test_login_posts_identifier_as_email() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(
            Method::POST,
            "/api/complainants/login",
            200,
            json!({"data": {}, "message": "Login successful", "success": true}),
        );
        let api = api(transport.clone());

        let credentials = LoginCredentials {
            identifier: "35202-1234567-1".to_string(),
            password: "secret".to_string(),
        };
        let env = api.login(Role::Complainant, &credentials).await.unwrap();
        assert_eq!(env.message.as_deref(), Some("Login successful"));

        let sent = &transport.requests()[0];
        assert_eq!(
            sent.body,
            Some(json!({"email": "35202-1234567-1", "password": "secret"}))
        );
    }

    #[tokio::test]
    async fn test_search_firs_body() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(Method::POST, "/api/firs/search", 200, json!({"data": []}));
        let api = api(transport.clone());

        let filters = FirFilters {
            status: "pending".to_string(),
            ..FirFilters::default()
        };
        let firs = api
            .search_firs(&FirSearchRequest::new(filters, "theft"))
            .await
            .unwrap();
        assert!(firs.into_items().is_empty());

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["search"], "theft");
        assert_eq!(body["sortField"], "date_filed");
        assert_eq!(body["sortOrder"], "desc");
        assert_eq!(body["filters"]["status"], "pending");
        assert_eq!(body["filters"]["officer_id"], "");
    }

    #[tokio::test]
    async fn test_status_patch_and_crime_rate_filter() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(Method::PATCH, "/api/firs/12/status", 200, json!({"success": true}));
        transport.respond(
            Method::GET,
            "/api/analytics/crime-rate?filter=month",
            200,
            json!({"data": [{"period": "2024-01", "count": 4}]}),
        );
        let api = api(transport.clone());

        let ack = api.update_fir_status("12", FirStatus::Solved).await.unwrap();
        assert!(ack.reports_success());
        assert_eq!(transport.requests()[0].body, Some(json!({"status": "solved"})));

        let rows = api
            .analytics(AnalyticsDataset::CrimeRate, TimeGranularity::Month)
            .await
            .unwrap()
            .into_items();
        assert_eq!(rows[0]["count"], 4);
    }
}

//! Officer analytics dashboard.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::join_all;
use strum::IntoEnumIterator;
use tokio::sync::RwLock;

use casetrack_core::api::CaseApi;
use casetrack_core::model::{AnalyticsDataset, AnalyticsRow, TimeGranularity};

use crate::fetch_state::{FetchGate, FetchOutcome};

const STATUS_DATASET_FAILED: &str = "Failed to fetch FIR status data";
const ANALYTICS_FAILED: &str = "Failed to fetch analytics data";

/// Rows per dataset. Every dataset has an entry once ready.
pub type AnalyticsData = BTreeMap<AnalyticsDataset, Vec<AnalyticsRow>>;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsState {
    Loading,
    /// The batch failed; the message is shown in place of the charts.
    Failed(String),
    Ready(AnalyticsData),
}

pub struct AnalyticsView {
    api: Arc<dyn CaseApi>,
    gate: FetchGate,
    granularity: RwLock<TimeGranularity>,
    state: RwLock<AnalyticsState>,
}

impl AnalyticsView {
    pub fn new(api: Arc<dyn CaseApi>) -> Self {
        Self {
            api,
            gate: FetchGate::new(),
            granularity: RwLock::new(TimeGranularity::default()),
            state: RwLock::new(AnalyticsState::Loading),
        }
    }

    pub async fn state(&self) -> AnalyticsState {
        self.state.read().await.clone()
    }

    pub async fn granularity(&self) -> TimeGranularity {
        *self.granularity.read().await
    }

    /// Changing the crime-rate bucket re-issues the whole batch.
    pub async fn set_granularity(&self, granularity: TimeGranularity) -> FetchOutcome {
        *self.granularity.write().await = granularity;
        self.load().await
    }

    /// Fetches all seven datasets concurrently. The view becomes ready only
    /// when every request succeeded and the status dataset reports success.
    pub async fn load(&self) -> FetchOutcome {
        let ticket = self.gate.issue();
        let granularity = self.granularity().await;
        *self.state.write().await = AnalyticsState::Loading;

        let batch = join_all(AnalyticsDataset::iter().map(|dataset| {
            let api = self.api.clone();
            async move { (dataset, api.analytics(dataset, granularity).await) }
        }));
        let Some(results) = self.gate.guard(ticket, batch).await else {
            return FetchOutcome::Discarded;
        };

        let mut data = AnalyticsData::new();
        let mut failure = None;
        for (dataset, result) in results {
            match result {
                Ok(envelope) => {
                    if dataset == AnalyticsDataset::FirsByStatus && !envelope.reports_success() {
                        failure.get_or_insert_with(|| STATUS_DATASET_FAILED.to_string());
                    }
                    data.insert(dataset, envelope.into_items());
                }
                Err(err) => {
                    let message = if err.message.trim().is_empty() {
                        ANALYTICS_FAILED.to_string()
                    } else {
                        err.message
                    };
                    failure.get_or_insert(message);
                }
            }
        }

        let (state, outcome) = match failure {
            Some(message) => {
                tracing::warn!(%granularity, error = %message, "Analytics batch failed");
                (AnalyticsState::Failed(message), FetchOutcome::Failed)
            }
            None => (AnalyticsState::Ready(data), FetchOutcome::Applied),
        };
        *self.state.write().await = state;
        outcome
    }

    pub fn dispose(&self) {
        self.gate.dispose();
    }
}

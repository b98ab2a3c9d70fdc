mod common;

use casetrack_application::{AnalyticsState, AnalyticsView, FetchOutcome};
use casetrack_core::model::{AnalyticsDataset, TimeGranularity};
use casetrack_infrastructure::http::Method;
use common::Harness;
use serde_json::json;
use strum::IntoEnumIterator;

fn script_all(h: &Harness, granularity: TimeGranularity) {
    for dataset in AnalyticsDataset::iter() {
        let body = match dataset {
            AnalyticsDataset::FirsByStatus => json!({
                "data": [{"date": "2024-05-01", "pending": "3", "solved": "1"}],
                "success": true
            }),
            AnalyticsDataset::StationFirs => json!({"success": true}),
            _ => json!({"data": [{"label": dataset.as_ref(), "total": 2}], "success": true}),
        };
        h.transport
            .respond(Method::GET, &dataset.endpoint(granularity), 200, body);
    }
}

#[tokio::test]
async fn test_all_datasets_ready_with_missing_as_empty() {
    let h = Harness::at("/officer/dashboard");
    script_all(&h, TimeGranularity::Day);
    let view = AnalyticsView::new(h.api.clone());

    assert_eq!(view.load().await, FetchOutcome::Applied);
    let AnalyticsState::Ready(data) = view.state().await else {
        panic!("analytics should be ready");
    };
    assert_eq!(data.len(), 7);
    assert!(data[&AnalyticsDataset::StationFirs].is_empty());
    assert_eq!(data[&AnalyticsDataset::FirsByStatus][0]["pending"], "3");
    assert_eq!(h.transport.requests().len(), 7);
}

#[tokio::test]
async fn test_any_rejection_fails_the_batch() {
    let h = Harness::at("/officer/dashboard");
    h.transport.respond(
        Method::GET,
        "/api/analytics/officer-workload",
        500,
        json!({"message": "Aggregation timed out", "success": false, "statusCode": 500}),
    );
    script_all(&h, TimeGranularity::Day);
    let view = AnalyticsView::new(h.api.clone());

    assert_eq!(view.load().await, FetchOutcome::Failed);
    assert_eq!(
        view.state().await,
        AnalyticsState::Failed("Aggregation timed out".to_string())
    );
}

#[tokio::test]
async fn test_status_dataset_without_success_fails_the_batch() {
    let h = Harness::at("/officer/dashboard");
    h.transport.respond(
        Method::GET,
        "/api/analytics/firs-by-status",
        200,
        json!({"data": []}),
    );
    script_all(&h, TimeGranularity::Day);
    let view = AnalyticsView::new(h.api.clone());

    assert_eq!(view.load().await, FetchOutcome::Failed);
    assert_eq!(
        view.state().await,
        AnalyticsState::Failed("Failed to fetch FIR status data".to_string())
    );
}

#[tokio::test]
async fn test_granularity_change_reissues_whole_batch() {
    let h = Harness::at("/officer/dashboard");
    script_all(&h, TimeGranularity::Day);
    script_all(&h, TimeGranularity::Week);
    let view = AnalyticsView::new(h.api.clone());

    view.load().await;
    assert_eq!(
        view.set_granularity(TimeGranularity::Week).await,
        FetchOutcome::Applied
    );

    assert_eq!(h.transport.requests().len(), 14);
    assert_eq!(
        h.transport
            .count(Method::GET, "/api/analytics/crime-rate?filter=week"),
        1
    );
    assert_eq!(view.granularity().await, TimeGranularity::Week);
}

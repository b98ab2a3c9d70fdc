mod common;

use std::time::Duration;

use casetrack_application::FormService;
use casetrack_core::model::{NewFir, NewStation};
use casetrack_infrastructure::http::Method;
use common::Harness;
use serde_json::json;

fn forms(h: &Harness) -> FormService {
    FormService::new(h.api.clone(), h.notifier.clone(), Duration::from_millis(500))
}

#[tokio::test]
async fn test_lookup_failure_only_empties_that_list() {
    let h = Harness::at("/officer/dashboard/register-fir");
    h.transport.respond(
        Method::GET,
        "/api/stations?q=",
        200,
        json!({"data": [{"station_id": "S1", "name": "Saddar"}]}),
    );
    h.transport.respond(
        Method::GET,
        "/api/crime/crime-types",
        200,
        json!({"data": [{"type_id": "T1", "name": "Robbery"}]}),
    );
    h.transport
        .respond_raw(Method::GET, "/api/crime/crime-categories", 502, None);

    let options = forms(&h).load_options().await;

    assert_eq!(options.stations.len(), 1);
    assert_eq!(options.crime_types[0].name, "Robbery");
    assert!(options.crime_categories.is_empty());
    assert!(h.notifier.all().is_empty());
}

#[tokio::test]
async fn test_fir_filter_options_include_officers() {
    let h = Harness::at("/officer/dashboard/all-fir");
    h.transport.respond(
        Method::GET,
        "/api/stations?q=",
        200,
        json!({"data": [{"station_id": "S1", "name": "Saddar"}]}),
    );
    h.transport.respond(
        Method::GET,
        "/api/crime/crime-types",
        500,
        json!({"message": "Lookup down", "success": false, "statusCode": 500}),
    );
    h.transport.respond(
        Method::GET,
        "/api/officers/search?q=",
        200,
        json!({"data": [{"officer_id": "O1", "name": "SI Bilal"}]}),
    );

    let options = forms(&h).filter_options().await;

    assert_eq!(options.stations[0].station_id, "S1");
    assert!(options.crime_types.is_empty());
    assert_eq!(options.officers[0].officer_id, "O1");
    assert_eq!(h.transport.count(Method::GET, "/api/crime/crime-categories"), 0);
    assert!(h.notifier.all().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_officer_search_is_debounced() {
    let h = Harness::at("/officer/dashboard/register-fir");
    h.transport.respond(
        Method::GET,
        "/api/officers/search?q=raz",
        200,
        json!({"data": [{"officer_id": "O1", "name": "Inspector Raza"}]}),
    );
    let forms = forms(&h);

    let (early, late) = tokio::join!(forms.search_officers("ra"), async {
        tokio::time::sleep(Duration::from_millis(80)).await;
        forms.search_officers("raz").await
    });

    assert!(early.is_none());
    assert_eq!(late.unwrap()[0].officer_id, "O1");
    assert_eq!(h.transport.requests().len(), 1);
}

#[tokio::test]
async fn test_register_fir_shows_server_message() {
    let h = Harness::at("/officer/dashboard/register-fir");
    h.transport.respond(
        Method::POST,
        "/api/firs",
        201,
        json!({"message": "FIR registered successfully", "success": true}),
    );

    let incomplete = NewFir {
        complainant_id: "42231-5495533-9".to_string(),
        ..NewFir::default()
    };
    assert!(forms(&h).register_fir(&incomplete).await.unwrap_err().is_validation());
    assert!(h.transport.requests().is_empty());

    let fir = NewFir {
        officer_id: "O1".to_string(),
        station_id: "S1".to_string(),
        type_id: "T1".to_string(),
        description: "Motorcycle stolen from parking".to_string(),
        ..incomplete
    };
    forms(&h).register_fir(&fir).await.unwrap();
    assert_eq!(
        h.notifier.successes(),
        vec!["FIR registered successfully".to_string()]
    );
}

#[tokio::test]
async fn test_station_rejection_surfaces_message() {
    let h = Harness::at("/officer/dashboard/add-station");
    h.transport.respond(
        Method::POST,
        "/api/stations/",
        409,
        json!({"message": "Station already exists", "success": false, "statusCode": 409}),
    );

    let station = NewStation {
        name: "Saddar".to_string(),
        district: "Karachi South".to_string(),
        province: "Sindh".to_string(),
        city: "Karachi".to_string(),
    };
    assert!(forms(&h).create_station(&station).await.is_err());
    assert_eq!(h.notifier.errors(), vec!["Station already exists".to_string()]);
}

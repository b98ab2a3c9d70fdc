mod common;

use std::time::Duration;

use casetrack_application::{AuthService, ListView, MyFirsSource, ProfileService, Shell, Visit};
use casetrack_core::model::{LoginCredentials, NewComplainant};
use casetrack_core::navigation::{ComplainantScreen, Navigator, Route, RouteGuard};
use casetrack_core::session::Role;
use casetrack_infrastructure::http::Method;
use common::Harness;
use serde_json::json;

fn auth(h: &Harness) -> AuthService {
    AuthService::new(
        h.api.clone(),
        h.store.clone(),
        h.navigator.clone(),
        h.notifier.clone(),
    )
}

fn credentials(identifier: &str, password: &str) -> LoginCredentials {
    LoginCredentials {
        identifier: identifier.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_complainant_login_then_guarded_navigation() {
    let h = Harness::at("/");
    h.transport.respond(
        Method::POST,
        "/api/complainants/login",
        200,
        json!({"data": {}, "message": "Login successful", "success": true}),
    );
    h.transport.respond(
        Method::GET,
        "/api/firs/user-firs",
        200,
        json!({"data": [
            {"fir_id": "F-1", "description": "Stolen bike", "status": "pending"},
            {"fir_id": "F-2", "description": "Broken window", "status": "solved"}
        ]}),
    );

    // Log in
    auth(&h)
        .login(Role::Complainant, &credentials("35202-1234567-1", "secret"))
        .await
        .expect("login should succeed");
    assert_eq!(h.store.get_role(), Some(Role::Complainant));
    assert_eq!(h.navigator.current_path(), "/complainant/dashboard");
    assert_eq!(h.notifier.successes(), vec!["Login successful".to_string()]);

    // Officer area is refused
    let shell = Shell::new(RouteGuard::new(h.store.clone()), h.navigator.clone());
    assert_eq!(shell.visit("/officer/dashboard"), Visit::Redirect("/".to_string()));
    assert_eq!(h.navigator.current_path(), "/");

    // Own dashboard renders the FIR list
    assert_eq!(
        shell.visit("/complainant/dashboard"),
        Visit::Render(Route::Complainant(ComplainantScreen::MyFirs))
    );
    let list = ListView::new(
        MyFirsSource::new(h.api.clone()),
        h.notifier.clone(),
        Duration::from_millis(500),
    );
    list.mount().await;
    let ids: Vec<String> = list.items().await.into_iter().map(|f| f.fir_id).collect();
    assert_eq!(ids, vec!["F-1", "F-2"]);
}

#[tokio::test]
async fn test_invalid_credentials_never_reach_server() {
    let h = Harness::at("/officer/login");

    let err = auth(&h)
        .login(Role::Officer, &credentials("officer@police.pk", "ab"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(h.transport.requests().is_empty());
    assert_eq!(h.store.get_role(), None);
}

#[tokio::test]
async fn test_rejected_login_keeps_role_unset() {
    let h = Harness::at("/officer/login");
    h.transport.respond(
        Method::POST,
        "/api/officers/login",
        400,
        json!({"message": "Invalid credentials", "success": false, "statusCode": 400}),
    );

    let result = auth(&h)
        .login(Role::Officer, &credentials("officer@police.pk", "wrong-pass"))
        .await;

    assert!(result.is_err());
    assert_eq!(h.store.get_role(), None);
    assert_eq!(h.notifier.errors(), vec!["Invalid credentials".to_string()]);
    assert_eq!(h.navigator.current_path(), "/officer/login");
}

#[tokio::test]
async fn test_logout_clears_role_and_returns_home() {
    let h = Harness::at("/officer/dashboard/profile");
    h.store.set_role(Role::Officer).unwrap();
    h.transport.respond(
        Method::GET,
        "/api/officers/logout",
        200,
        json!({"message": "Logged out successfully", "success": true}),
    );

    auth(&h).logout().await.unwrap();

    assert_eq!(h.store.get_role(), None);
    assert_eq!(h.navigator.current_path(), "/");
    assert_eq!(h.transport.count(Method::GET, "/api/officers/logout"), 1);
}

#[tokio::test]
async fn test_expired_session_redirects_officer_to_login() {
    let h = Harness::at("/officer/dashboard/profile");
    h.store.set_role(Role::Officer).unwrap();
    h.transport.respond(
        Method::GET,
        "/api/officers/user",
        401,
        json!({"message": "Session expired", "success": false, "statusCode": 401}),
    );

    let profile = ProfileService::new(h.api.clone(), h.store.clone(), h.notifier.clone());
    let err = profile.load().await.unwrap_err();

    assert!(err.is_api());
    assert_eq!(h.navigator.current_path(), "/officer/login");
}

#[tokio::test]
async fn test_self_registration_validates_then_lands_on_login() {
    let h = Harness::at("/register-complainant");
    h.transport.respond(
        Method::POST,
        "/api/complainants",
        201,
        json!({"message": "Complainant registered", "success": true}),
    );

    let mut form = NewComplainant {
        name: "Ayesha Khan".to_string(),
        phone: "+92 300 1234567".to_string(),
        cnic: "42231-5495533-9".to_string(),
        email: "ayesha@example.pk".to_string(),
        password: "pass1".to_string(),
        address: "12 Mall Road, Lahore".to_string(),
    };

    // Bad phone is caught locally
    form.phone = "0300-1234567".to_string();
    assert!(auth(&h).register_complainant(&form).await.unwrap_err().is_validation());
    assert!(h.transport.requests().is_empty());

    form.phone = "+92 300 1234567".to_string();
    auth(&h).register_complainant(&form).await.unwrap();
    assert_eq!(h.navigator.current_path(), "/");
    assert_eq!(h.notifier.successes(), vec!["Complainant registered".to_string()]);
}

#[tokio::test]
async fn test_reload_of_same_screen_rechecks_role() {
    let h = Harness::at("/officer/dashboard/all-fir");
    h.store.set_role(Role::Officer).unwrap();
    let shell = Shell::new(RouteGuard::new(h.store.clone()), h.navigator.clone());

    assert!(matches!(shell.reload(), Visit::Render(_)));
    assert!(h.navigator.history().is_empty());

    // Another holder of the tab logs out
    h.store.clear().unwrap();

    assert_eq!(shell.reload(), Visit::Redirect("/".to_string()));
    assert_eq!(h.navigator.current_path(), "/");
}

use std::sync::Arc;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::config::RunMode;
use crate::state::header::HeaderState;
use crate::testing::{RecordingNavigator, StubBackend};

fn services(backend: &Arc<StubBackend>, nav: &Arc<RecordingNavigator>, mode: RunMode) -> SessionServices {
    let config = LandingConfig { run_mode: mode, ..LandingConfig::default() };
    SessionServices::new(backend.clone(), nav.clone(), config)
}

fn test_user_json() -> serde_json::Value {
    json!({ "Name": "Test User", "Email": "testuser@company.net", "AccountName": "corp\\tester" })
}

// =============================================================
// Pure interpretation
// =============================================================

#[test]
fn interpret_401_redirects_to_login() {
    let result = interpret_profile_response(&HttpResponse::new(401, "Unauthorized\n"), &LandingConfig::default());
    assert_eq!(result, ProbeResult::Redirected(Navigation::Replace("/login".to_owned())));
}

#[test]
fn interpret_nameless_profile_is_still_authenticated() {
    let resp = HttpResponse::new(200, r#"{"Email":"testuser@company.net"}"#);
    let ProbeResult::Authenticated(profile) = interpret_profile_response(&resp, &LandingConfig::default()) else {
        panic!("expected an authenticated result");
    };
    assert!(profile.name.is_empty());

    let mut header = HeaderState::default();
    header.apply_probe(&ProbeResult::Authenticated(profile));
    assert_eq!(header.welcome_text().as_deref(), Some("Welcome, "));
}

#[test]
fn interpret_other_failures_redirect_to_status_page() {
    let cfg = LandingConfig::default();
    assert_eq!(
        interpret_profile_response(&HttpResponse::new(500, ""), &cfg),
        ProbeResult::Redirected(Navigation::Replace("/500".to_owned()))
    );
    assert_eq!(
        interpret_profile_response(&HttpResponse::new(403, ""), &cfg),
        ProbeResult::Redirected(Navigation::Replace("/403".to_owned()))
    );
}

#[test]
fn interpret_uses_configured_login_path() {
    let cfg = LandingConfig { login_path: "/sso/login".to_owned(), ..LandingConfig::default() };
    assert_eq!(
        interpret_profile_response(&HttpResponse::new(401, ""), &cfg),
        ProbeResult::Redirected(Navigation::Replace("/sso/login".to_owned()))
    );
}

#[test]
fn interpret_null_body_is_anonymous() {
    assert_eq!(
        interpret_profile_response(&HttpResponse::new(200, "null"), &LandingConfig::default()),
        ProbeResult::Anonymous
    );
}

// =============================================================
// Live probe
// =============================================================

#[test]
fn success_returns_profile_without_navigation() {
    let backend = Arc::new(StubBackend::new().respond_json("/profile", 200, &test_user_json()));
    let nav = Arc::new(RecordingNavigator::default());
    let result = block_on(services(&backend, &nav, RunMode::Live).probe_session(&Liveness::new()));

    match result {
        ProbeResult::Authenticated(profile) => assert_eq!(profile.name, "Test User"),
        other => panic!("expected profile, got {other:?}"),
    }
    assert!(nav.is_empty());
    assert_eq!(backend.calls(), vec!["/profile".to_owned()]);
}

#[test]
fn unauthorized_replaces_with_login_and_stores_nothing() {
    let backend = Arc::new(StubBackend::new().respond("/profile", 401, "Unauthorized"));
    let nav = Arc::new(RecordingNavigator::default());
    let result = block_on(services(&backend, &nav, RunMode::Live).probe_session(&Liveness::new()));

    assert!(!matches!(result, ProbeResult::Authenticated(_)));
    assert_eq!(nav.history(), vec![Navigation::Replace("/login".to_owned())]);
}

#[test]
fn server_error_replaces_with_status_page() {
    let backend = Arc::new(StubBackend::new().respond("/profile", 500, "boom"));
    let nav = Arc::new(RecordingNavigator::default());
    block_on(services(&backend, &nav, RunMode::Live).probe_session(&Liveness::new()));

    assert_eq!(nav.history(), vec![Navigation::Replace("/500".to_owned())]);
}

#[test]
fn network_failure_is_reported_without_navigation() {
    let backend = Arc::new(StubBackend::new().fail("/profile", FetchError::Network("offline".to_owned())));
    let nav = Arc::new(RecordingNavigator::default());
    let result = block_on(services(&backend, &nav, RunMode::Live).probe_session(&Liveness::new()));

    assert_eq!(result, ProbeResult::Unreachable(FetchError::Network("offline".to_owned())));
    assert!(nav.is_empty());
}

#[test]
fn retired_owner_abandons_redirect() {
    let backend = Arc::new(StubBackend::new().respond("/profile", 401, ""));
    let nav = Arc::new(RecordingNavigator::default());
    let liveness = Liveness::new();
    liveness.retire();
    let result = block_on(services(&backend, &nav, RunMode::Live).probe_session(&liveness));

    assert_eq!(result, ProbeResult::Abandoned);
    assert!(nav.is_empty());
}

#[test]
fn harness_mode_makes_no_network_calls() {
    let backend = Arc::new(StubBackend::new().respond("/profile", 401, ""));
    let nav = Arc::new(RecordingNavigator::default());
    let result = block_on(services(&backend, &nav, RunMode::Harness).probe_session(&Liveness::new()));

    assert_eq!(result, ProbeResult::Skipped);
    assert_eq!(backend.call_count(), 0);
    assert!(nav.is_empty());
}

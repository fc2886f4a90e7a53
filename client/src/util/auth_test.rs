use super::*;
use crate::net::types::User;

fn signed_in() -> SessionState {
    SessionState {
        user: Some(User {
            id: "user-abc123def".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            profile_picture: String::new(),
        }),
        loading: false,
    }
}

fn signed_out() -> SessionState {
    SessionState { user: None, loading: false }
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&SessionState::pending()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

// =============================================================
// guard
// =============================================================

#[test]
fn guard_renders_protected_view_for_signed_in_user() {
    assert_eq!(guard(&signed_in(), RouteAccess::Protected, "/journal"), GuardDecision::Render);
}

#[test]
fn guard_redirects_signed_out_user_with_return_path() {
    assert_eq!(
        guard(&signed_out(), RouteAccess::Protected, "/journal"),
        GuardDecision::Redirect("/auth?from=%2Fjournal".to_owned())
    );
}

#[test]
fn guard_waits_while_session_is_loading() {
    assert_eq!(
        guard(&SessionState::pending(), RouteAccess::Protected, "/chat"),
        GuardDecision::Pending
    );
}

#[test]
fn guard_never_redirects_public_routes() {
    assert_eq!(guard(&signed_out(), RouteAccess::Public, "/"), GuardDecision::Render);
    assert_eq!(guard(&SessionState::pending(), RouteAccess::Public, "/auth"), GuardDecision::Render);
}

#[test]
fn guard_redirect_preserves_query_string() {
    assert_eq!(
        guard(&signed_out(), RouteAccess::Protected, "/profile?tab=notifications"),
        GuardDecision::Redirect("/auth?from=%2Fprofile%3Ftab%3Dnotifications".to_owned())
    );
}

// =============================================================
// return_target
// =============================================================

#[test]
fn return_target_defaults_to_dashboard() {
    assert_eq!(return_target(None), "/dashboard");
}

/// Decode the `from` value once, as the router's query map does.
fn query_from(location: &str) -> Option<String> {
    location
        .split_once("from=")
        .map(|(_, v)| urlencoding::decode(v).unwrap().into_owned())
}

fn round_trip(requested: &str) -> String {
    let GuardDecision::Redirect(location) = guard(&signed_out(), RouteAccess::Protected, requested) else {
        panic!("expected redirect");
    };
    return_target(query_from(&location).as_deref())
}

#[test]
fn return_target_keeps_decoded_path() {
    assert_eq!(return_target(Some("/journal")), "/journal");
    assert_eq!(return_target(Some("/profile?tab=notifications")), "/profile?tab=notifications");
}

#[test]
fn return_target_round_trips_guard_redirect() {
    assert_eq!(round_trip("/exercises"), "/exercises");
    assert_eq!(round_trip("/profile?tab=notifications"), "/profile?tab=notifications");
}

#[test]
fn return_target_preserves_literal_percent_escapes() {
    assert_eq!(return_target(Some("/journal?q=50%25")), "/journal?q=50%25");
    assert_eq!(round_trip("/journal?q=50%25"), "/journal?q=50%25");
}

#[test]
fn return_target_rejects_still_encoded_value() {
    assert_eq!(return_target(Some("%2Fjournal")), "/dashboard");
}

#[test]
fn return_target_rejects_offsite_locations() {
    assert_eq!(return_target(Some("https://evil.example")), "/dashboard");
    assert_eq!(return_target(Some("//evil.example/path")), "/dashboard");
    assert_eq!(return_target(Some("/\\evil.example")), "/dashboard");
    assert_eq!(return_target(Some("")), "/dashboard");
}

#[test]
fn return_target_rejects_auth_page_loops() {
    assert_eq!(return_target(Some("/auth")), "/dashboard");
    assert_eq!(return_target(Some("/auth?from=%2Fchat")), "/dashboard");
}

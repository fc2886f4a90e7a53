//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical redirect behavior, and the auth
//! page resolves the same return target the guard encoded. Both halves live
//! here as pure functions so the rules are testable without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionState;
use crate::util::routes::RouteAccess;

/// Entry point for signing in.
pub const AUTH_PATH: &str = "/auth";

/// Where a successful sign-in lands when no return path was carried.
pub const DEFAULT_RETURN_PATH: &str = "/dashboard";

/// What a guarded route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not settled yet; render nothing and do not redirect.
    Pending,
    /// Send the user to this location instead.
    Redirect(String),
    /// Render the requested view unchanged.
    Render,
}

/// Decide how to handle a request for `requested` under `access`.
#[must_use]
pub fn guard(state: &SessionState, access: RouteAccess, requested: &str) -> GuardDecision {
    if access == RouteAccess::Public {
        return GuardDecision::Render;
    }
    if state.loading {
        return GuardDecision::Pending;
    }
    if should_redirect_unauth(state) {
        return GuardDecision::Redirect(login_redirect(requested));
    }
    GuardDecision::Render
}

/// `true` once the session has settled without a user.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// Auth page location carrying `requested` as the return path.
#[must_use]
pub fn login_redirect(requested: &str) -> String {
    if requested.is_empty() || requested == "/" {
        return AUTH_PATH.to_owned();
    }
    format!("{AUTH_PATH}?from={}", urlencoding::encode(requested))
}

/// Resolve where to go after signing in.
///
/// `from` is the already-decoded query value; it is used as-is. Only
/// same-origin absolute paths are honored; anything else (missing,
/// protocol-relative, absolute URLs, the auth page itself) falls back to
/// [`DEFAULT_RETURN_PATH`].
#[must_use]
pub fn return_target(from: Option<&str>) -> String {
    let Some(raw) = from else {
        return DEFAULT_RETURN_PATH.to_owned();
    };
    let path = raw.trim();
    let same_origin = path.starts_with('/') && !path.starts_with("//") && !path.contains('\\');
    let is_auth = path == AUTH_PATH || path.starts_with("/auth?");
    if same_origin && !is_auth {
        path.to_owned()
    } else {
        DEFAULT_RETURN_PATH.to_owned()
    }
}

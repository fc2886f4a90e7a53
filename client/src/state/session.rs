//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Published by `session::SessionStore` and read by route guards and
//! identity-aware components to coordinate login redirects and rendering.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Current user and loading status.
///
/// Provided to components as an `RwSignal<SessionState>` that mirrors every
/// state the store publishes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// State before the persisted record has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display name of the signed-in user, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

//! Auth backend seam.
//!
//! DESIGN
//! ======
//! Every session operation goes through [`AuthBackend`] so a real identity
//! service can replace [`MockAuthBackend`] without touching the store or the
//! views. The mock accepts any well-shaped input after a fixed delay and
//! synthesizes the user locally.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use async_trait::async_trait;

use super::{AuthProvider, SessionError};
use crate::net::types::User;
use crate::util::delay;

/// Latency the mock backend simulates for every call.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Remote half of the session operations.
///
/// Futures are not `Send`: the store runs on the browser event loop.
#[async_trait(?Send)]
pub trait AuthBackend: Send + Sync {
    /// Exchange email + password for a user.
    async fn login(&self, email: &str, password: &str) -> Result<User, SessionError>;

    /// Create an account and return its user.
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, SessionError>;

    /// Sign in through a third-party identity provider.
    async fn social_login(&self, provider: AuthProvider) -> Result<User, SessionError>;

    /// Ask for a password reset email.
    async fn reset_password(&self, email: &str) -> Result<(), SessionError>;

    /// Tell the backend the session ended. Local sign-out does not wait on
    /// the outcome.
    async fn end_session(&self) -> Result<(), SessionError>;
}

/// Local stand-in for an identity service.
#[derive(Clone, Copy, Debug)]
pub struct MockAuthBackend {
    latency: Duration,
}

impl Default for MockAuthBackend {
    fn default() -> Self {
        Self { latency: SIMULATED_LATENCY }
    }
}

impl MockAuthBackend {
    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait(?Send)]
impl AuthBackend for MockAuthBackend {
    async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        delay::sleep(self.latency).await;
        if !is_valid_email(email) || !is_valid_password(password) {
            return Err(SessionError::InvalidCredentials);
        }
        Ok(synthesize_user(local_part(email), email, email))
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, SessionError> {
        delay::sleep(self.latency).await;
        let name = name.trim();
        if name.is_empty() || !is_valid_email(email) || !is_valid_password(password) {
            return Err(SessionError::InvalidRegistration);
        }
        Ok(synthesize_user(name, email, email))
    }

    async fn social_login(&self, provider: AuthProvider) -> Result<User, SessionError> {
        delay::sleep(self.latency).await;
        Ok(provider_user(provider))
    }

    async fn reset_password(&self, email: &str) -> Result<(), SessionError> {
        delay::sleep(self.latency).await;
        if !is_valid_email(email) {
            return Err(SessionError::InvalidEmail);
        }
        Ok(())
    }

    async fn end_session(&self) -> Result<(), SessionError> {
        delay::sleep(self.latency).await;
        Ok(())
    }
}

/// Backend-side email rule: an `@` somewhere in the address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

fn local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

/// `user-` plus nine characters of a random token.
fn generate_user_id() -> String {
    let token = uuid::Uuid::new_v4().simple().to_string();
    format!("user-{}", &token[..9])
}

fn avatar_url(seed: &str) -> String {
    format!("{AVATAR_BASE_URL}?seed={}", urlencoding::encode(seed))
}

fn synthesize_user(name: &str, email: &str, avatar_seed: &str) -> User {
    User {
        id: generate_user_id(),
        name: name.to_owned(),
        email: email.to_owned(),
        profile_picture: avatar_url(avatar_seed),
    }
}

fn provider_user(provider: AuthProvider) -> User {
    match provider {
        AuthProvider::Google => synthesize_user("Google User", "google.user@example.com", "google"),
        AuthProvider::Apple => synthesize_user("Apple User", "apple.user@example.com", "apple"),
        AuthProvider::Password => synthesize_user("Guest", "guest@example.com", "guest"),
    }
}

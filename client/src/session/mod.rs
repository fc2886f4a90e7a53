//! Session store: who is signed in, with write-through persistence.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is the single owner of session state. It delegates the
//! "network" half of each operation to an [`AuthBackend`] and the on-device
//! record to a [`SessionStorage`], then publishes the resulting
//! [`SessionState`](crate::state::session::SessionState) to subscribers.
//! The app provides one store through Leptos context; views never write
//! session state or storage themselves.

pub mod backend;
pub mod storage;
pub mod store;

pub use backend::{AuthBackend, MockAuthBackend};
pub use storage::{BrowserStorage, MemoryStorage, SessionStorage};
pub use store::SessionStore;

/// Identity provider used to open a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthProvider {
    Password,
    Google,
    Apple,
}

impl AuthProvider {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Password => "email",
            Self::Google => "Google",
            Self::Apple => "Apple",
        }
    }
}

/// Which session operation a result belongs to; drives toast titles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOp {
    Login,
    Register,
    Social(AuthProvider),
    ResetPassword,
    Logout,
}

impl SessionOp {
    /// Toast title shown when the operation fails.
    #[must_use]
    pub fn failure_title(self) -> &'static str {
        match self {
            Self::Login | Self::Social(AuthProvider::Password) => "Login failed",
            Self::Register => "Registration failed",
            Self::Social(AuthProvider::Google) => "Google login failed",
            Self::Social(AuthProvider::Apple) => "Apple login failed",
            Self::ResetPassword => "Password reset failed",
            Self::Logout => "Logout failed",
        }
    }
}

/// Session operation failures. None of them are fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Email without `@` or password shorter than six characters.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Empty name, malformed email, or short password on registration.
    #[error("Please provide valid information")]
    InvalidRegistration,

    /// Malformed email on password reset.
    #[error("Please provide a valid email")]
    InvalidEmail,

    /// The auth backend could not complete the request.
    #[error("An error occurred during sign-in: {0}")]
    Backend(String),

    /// The signed-in record could not be written to device storage.
    #[error("Could not save your session: {0}")]
    Persistence(String),
}

/// Confirmation signal returned by successful operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionNotice {
    SignedIn(AuthProvider),
    Registered,
    SignedOut,
    ResetEmailSent,
}

impl SessionNotice {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignedIn(AuthProvider::Password) => "Welcome back!",
            Self::SignedIn(_) => "Welcome!",
            Self::Registered => "Account created!",
            Self::SignedOut => "Logged out",
            Self::ResetEmailSent => "Password reset email sent",
        }
    }

    #[must_use]
    pub fn description(self) -> String {
        match self {
            Self::SignedIn(AuthProvider::Password) => "You have successfully logged in.".to_owned(),
            Self::SignedIn(provider) => format!("You have successfully signed in with {}.", provider.label()),
            Self::Registered => "Welcome to MindfulAI.".to_owned(),
            Self::SignedOut => "You have successfully logged out.".to_owned(),
            Self::ResetEmailSent => "Check your inbox for instructions to reset your password.".to_owned(),
        }
    }
}

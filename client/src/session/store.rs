//! The session store.
//!
//! DESIGN
//! ======
//! In-memory state and the persisted record are written together: a user is
//! published only after its record was saved, and sign-out clears the record
//! before publishing. `loading` is derived from an in-flight counter so
//! overlapping operations keep controls disabled until the last one settles;
//! the last operation to finish wins the `user` field.
//!
//! Subscribers receive every published state. The app bridges them into an
//! `RwSignal<SessionState>`; tests record them.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{AuthBackend, AuthProvider, SessionError, SessionNotice, SessionOp, SessionStorage};
use crate::net::types::User;
use crate::state::session::SessionState;

type Observer = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Single owner of session state and its persistence side effects.
///
/// Cheap to clone; clones share the same state, storage, and subscribers.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    storage: Box<dyn SessionStorage>,
    backend: Box<dyn AuthBackend>,
    state: Mutex<StoreState>,
    observers: Mutex<Vec<Observer>>,
}

#[derive(Default)]
struct StoreState {
    user: Option<User>,
    in_flight: usize,
    initialized: bool,
}

impl StoreState {
    fn snapshot(&self) -> SessionState {
        SessionState {
            user: self.user.clone(),
            loading: !self.initialized || self.in_flight > 0,
        }
    }
}

impl SessionStore {
    pub fn new<S, B>(storage: S, backend: B) -> Self
    where
        S: SessionStorage + 'static,
        B: AuthBackend + 'static,
    {
        Self {
            inner: Arc::new(StoreInner {
                storage: Box::new(storage),
                backend: Box::new(backend),
                state: Mutex::new(StoreState::default()),
                observers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Register `observer` and immediately hand it the current state.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        observer(&self.snapshot());
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(observer));
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.lock_state().snapshot()
    }

    /// Read the persisted record once per store lifetime.
    ///
    /// A well-formed record restores the user; an unreadable or incomplete
    /// one is removed so storage matches the signed-out state. Later calls
    /// return the current state without touching storage.
    pub fn initialize(&self) -> SessionState {
        let (loaded, published) = {
            let mut state = self.lock_state();
            let loaded = self.load_once(&mut state);
            (loaded, state.snapshot())
        };
        if loaded {
            self.publish(&published);
        }
        published
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidCredentials`] for a malformed email or short
    /// password; state and storage are left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionNotice, SessionError> {
        let attempt = self.inner.backend.login(email, password);
        self.sign_in(SessionOp::Login, attempt, SessionNotice::SignedIn(AuthProvider::Password))
            .await
    }

    /// Create an account and sign into it.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidRegistration`] for an empty name, malformed
    /// email, or short password; state and storage are left unchanged.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<SessionNotice, SessionError> {
        let attempt = self.inner.backend.register(name, email, password);
        self.sign_in(SessionOp::Register, attempt, SessionNotice::Registered).await
    }

    /// Sign in with Google.
    ///
    /// # Errors
    ///
    /// Only when a real backend or device storage fails.
    pub async fn login_with_google(&self) -> Result<SessionNotice, SessionError> {
        self.social_login(AuthProvider::Google).await
    }

    /// Sign in with Apple.
    ///
    /// # Errors
    ///
    /// Only when a real backend or device storage fails.
    pub async fn login_with_apple(&self) -> Result<SessionNotice, SessionError> {
        self.social_login(AuthProvider::Apple).await
    }

    async fn social_login(&self, provider: AuthProvider) -> Result<SessionNotice, SessionError> {
        let attempt = self.inner.backend.social_login(provider);
        self.sign_in(SessionOp::Social(provider), attempt, SessionNotice::SignedIn(provider))
            .await
    }

    /// Request a password reset email. Never touches session state or storage.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidEmail`] for a malformed email.
    pub async fn reset_password(&self, email: &str) -> Result<SessionNotice, SessionError> {
        self.begin();
        let outcome = self.inner.backend.reset_password(email).await;
        self.finish(|_| {});
        match outcome {
            Ok(()) => {
                log::info!("password reset requested");
                Ok(SessionNotice::ResetEmailSent)
            }
            Err(err) => {
                log::warn!("{}: {err}", SessionOp::ResetPassword.failure_title());
                Err(err)
            }
        }
    }

    /// End the session. Always succeeds and is idempotent.
    pub async fn logout(&self) -> SessionNotice {
        self.begin();
        if let Err(err) = self.inner.backend.end_session().await {
            log::warn!("backend sign-out failed, clearing local session anyway: {err}");
        }
        self.inner.storage.clear();
        self.finish(|state| state.user = None);
        log::info!("signed out");
        SessionNotice::SignedOut
    }

    async fn sign_in<F>(&self, op: SessionOp, attempt: F, notice: SessionNotice) -> Result<SessionNotice, SessionError>
    where
        F: Future<Output = Result<User, SessionError>>,
    {
        self.begin();
        let outcome = attempt.await.and_then(|user| self.persist(&user).map(|()| user));
        match outcome {
            Ok(user) => {
                log::info!("signed in as {} ({:?})", user.id, op);
                self.finish(|state| state.user = Some(user));
                Ok(notice)
            }
            Err(err) => {
                log::warn!("{}: {err}", op.failure_title());
                self.finish(|_| {});
                Err(err)
            }
        }
    }

    fn persist(&self, user: &User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user).map_err(|e| SessionError::Persistence(e.to_string()))?;
        self.inner
            .storage
            .save(&raw)
            .map_err(|e| SessionError::Persistence(e.to_string()))
    }

    /// Returns `true` if this call performed the one-time load.
    fn load_once(&self, state: &mut StoreState) -> bool {
        if state.initialized {
            return false;
        }
        state.initialized = true;
        state.user = self.restore();
        true
    }

    fn restore(&self) -> Option<User> {
        let raw = self.inner.storage.load()?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) if user.is_well_formed() => {
                log::info!("restored session for {}", user.id);
                Some(user)
            }
            Ok(_) => {
                log::warn!("discarding incomplete session record");
                self.inner.storage.clear();
                None
            }
            Err(err) => {
                log::warn!("discarding unreadable session record: {err}");
                self.inner.storage.clear();
                None
            }
        }
    }

    fn begin(&self) {
        self.update(|store, state| {
            store.load_once(state);
            state.in_flight += 1;
        });
    }

    fn finish(&self, apply: impl FnOnce(&mut StoreState)) {
        self.update(|_, state| {
            apply(state);
            state.in_flight = state.in_flight.saturating_sub(1);
        });
    }

    fn update(&self, apply: impl FnOnce(&Self, &mut StoreState)) {
        let published = {
            let mut state = self.lock_state();
            apply(self, &mut state);
            state.snapshot()
        };
        self.publish(&published);
    }

    fn publish(&self, state: &SessionState) {
        let observers = self.inner.observers.lock().unwrap_or_else(PoisonError::into_inner);
        for observer in observers.iter() {
            observer(state);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

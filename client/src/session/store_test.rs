use std::time::Duration;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::session::{MemoryStorage, MockAuthBackend};
use crate::util::storage::StorageError;

fn store_with(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(storage.clone(), MockAuthBackend::with_latency(Duration::ZERO))
}

fn fresh_store() -> (SessionStore, MemoryStorage) {
    let storage = MemoryStorage::default();
    let store = store_with(&storage);
    store.initialize();
    (store, storage)
}

fn record(store: &SessionStore) -> Arc<Mutex<Vec<SessionState>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |state| sink.lock().unwrap().push(state.clone()));
    seen
}

fn persisted_user(storage: &MemoryStorage) -> Option<User> {
    storage.raw().map(|raw| serde_json::from_str(&raw).unwrap())
}

struct FailingBackend;

#[async_trait(?Send)]
impl AuthBackend for FailingBackend {
    async fn login(&self, _email: &str, _password: &str) -> Result<User, SessionError> {
        Err(SessionError::Backend("offline".to_owned()))
    }
    async fn register(&self, _name: &str, _email: &str, _password: &str) -> Result<User, SessionError> {
        Err(SessionError::Backend("offline".to_owned()))
    }
    async fn social_login(&self, _provider: AuthProvider) -> Result<User, SessionError> {
        Err(SessionError::Backend("offline".to_owned()))
    }
    async fn reset_password(&self, _email: &str) -> Result<(), SessionError> {
        Err(SessionError::Backend("offline".to_owned()))
    }
    async fn end_session(&self) -> Result<(), SessionError> {
        Err(SessionError::Backend("offline".to_owned()))
    }
}

struct ReadOnlyStorage;

impl SessionStorage for ReadOnlyStorage {
    fn load(&self) -> Option<String> {
        None
    }
    fn save(&self, _raw: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    }
    fn clear(&self) {}
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_store_is_pending_until_initialized() {
    let storage = MemoryStorage::default();
    let store = store_with(&storage);
    assert_eq!(store.snapshot(), SessionState::pending());
    assert_eq!(store.initialize(), SessionState::default());
}

#[test]
fn initialize_restores_persisted_user() {
    let raw = r#"{"id":"user-abc","name":"kim","email":"kim@example.com","profilePicture":"https://x/y.svg"}"#;
    let storage = MemoryStorage::with_record(raw);
    let state = store_with(&storage).initialize();
    let user = state.user.unwrap();
    assert_eq!(user.email, "kim@example.com");
    assert_eq!(user.profile_picture, "https://x/y.svg");
    assert!(!state.loading);
}

#[test]
fn initialize_discards_unreadable_record() {
    let storage = MemoryStorage::with_record("{not json");
    let state = store_with(&storage).initialize();
    assert!(!state.is_authenticated());
    assert_eq!(storage.raw(), None);
}

#[test]
fn initialize_discards_incomplete_record() {
    let storage = MemoryStorage::with_record(r#"{"id":"","name":"x","email":"x@y.z"}"#);
    let state = store_with(&storage).initialize();
    assert!(!state.is_authenticated());
    assert_eq!(storage.raw(), None);
}

#[test]
fn initialize_runs_once() {
    let storage = MemoryStorage::default();
    let store = store_with(&storage);
    store.initialize();
    storage
        .save(r#"{"id":"user-late","name":"late","email":"late@example.com"}"#)
        .unwrap();
    assert!(!store.initialize().is_authenticated());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_scenario_authenticates_with_given_email() {
    let (store, _) = fresh_store();
    let notice = block_on(store.login("user@example.com", "secret1")).unwrap();
    assert_eq!(notice, SessionNotice::SignedIn(AuthProvider::Password));
    let state = store.snapshot();
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().email, "user@example.com");
}

#[test]
fn login_writes_through_to_storage() {
    let (store, storage) = fresh_store();
    block_on(store.login("user@example.com", "secret1")).unwrap();
    assert_eq!(persisted_user(&storage), store.snapshot().user);
}

#[test]
fn login_round_trips_through_initialize() {
    let (store, storage) = fresh_store();
    block_on(store.login("user@example.com", "secret1")).unwrap();
    let reopened = store_with(&storage).initialize();
    assert_eq!(reopened.user, store.snapshot().user);
}

#[test]
fn login_with_bad_email_is_rejected_without_changes() {
    let (store, storage) = fresh_store();
    let before = store.snapshot();
    assert_eq!(
        block_on(store.login("bad-email", "secret1")),
        Err(SessionError::InvalidCredentials)
    );
    assert_eq!(store.snapshot(), before);
    assert!(!store.snapshot().is_authenticated());
    assert_eq!(storage.raw(), None);
}

#[test]
fn failed_login_keeps_previous_session() {
    let (store, storage) = fresh_store();
    block_on(store.login("first@example.com", "secret1")).unwrap();
    let before = store.snapshot();
    let raw_before = storage.raw();
    assert!(block_on(store.login("second@example.com", "123")).is_err());
    assert_eq!(store.snapshot(), before);
    assert_eq!(storage.raw(), raw_before);
}

#[test]
fn login_overwrites_previous_user() {
    let (store, storage) = fresh_store();
    block_on(store.login("first@example.com", "secret1")).unwrap();
    block_on(store.login("second@example.com", "secret2")).unwrap();
    assert_eq!(store.snapshot().user.unwrap().email, "second@example.com");
    assert_eq!(persisted_user(&storage).unwrap().email, "second@example.com");
}

#[test]
fn login_toggles_loading_around_the_operation() {
    let (store, _) = fresh_store();
    let seen = record(&store);
    block_on(store.login("user@example.com", "secret1")).unwrap();
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(!seen[0].loading);
    assert!(seen[1].loading);
    assert!(!seen[1].is_authenticated());
    assert!(!seen[2].loading);
    assert!(seen[2].is_authenticated());
}

#[test]
fn failed_login_still_clears_loading() {
    let (store, _) = fresh_store();
    let seen = record(&store);
    let _ = block_on(store.login("bad-email", "x"));
    let seen = seen.lock().unwrap();
    assert!(seen.iter().any(|s| s.loading));
    assert!(!seen.last().unwrap().loading);
}

#[test]
fn operation_before_initialize_loads_record_first() {
    let raw = r#"{"id":"user-abc","name":"kim","email":"kim@example.com"}"#;
    let storage = MemoryStorage::with_record(raw);
    let store = store_with(&storage);
    let _ = block_on(store.login("bad-email", "secret1"));
    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.user.unwrap().id, "user-abc");
}

// =============================================================
// register / social / reset
// =============================================================

#[test]
fn register_scenario_rejects_empty_name() {
    let (store, storage) = fresh_store();
    assert_eq!(
        block_on(store.register("", "a@b.com", "123456")),
        Err(SessionError::InvalidRegistration)
    );
    assert!(!store.snapshot().is_authenticated());
    assert_eq!(storage.raw(), None);
}

#[test]
fn register_persists_named_user() {
    let (store, storage) = fresh_store();
    let notice = block_on(store.register("Robin", "robin@example.com", "123456")).unwrap();
    assert_eq!(notice, SessionNotice::Registered);
    assert_eq!(persisted_user(&storage).unwrap().name, "Robin");
}

#[test]
fn social_logins_always_succeed() {
    let (store, storage) = fresh_store();
    block_on(store.login_with_google()).unwrap();
    assert_eq!(store.snapshot().user.unwrap().name, "Google User");
    block_on(store.login_with_apple()).unwrap();
    assert_eq!(persisted_user(&storage).unwrap().name, "Apple User");
}

#[test]
fn reset_password_scenario_leaves_state_unchanged() {
    let (store, storage) = fresh_store();
    let before = store.snapshot();
    assert_eq!(block_on(store.reset_password("a@b.com")), Ok(SessionNotice::ResetEmailSent));
    assert_eq!(store.snapshot(), before);
    assert_eq!(storage.raw(), None);
}

#[test]
fn reset_password_rejects_bad_email() {
    let (store, _) = fresh_store();
    assert_eq!(block_on(store.reset_password("nobody")), Err(SessionError::InvalidEmail));
}

#[test]
fn reset_password_never_touches_storage() {
    let (store, storage) = fresh_store();
    block_on(store.login("user@example.com", "secret1")).unwrap();
    let raw_before = storage.raw();
    block_on(store.reset_password("user@example.com")).unwrap();
    assert_eq!(storage.raw(), raw_before);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_state_and_storage() {
    let (store, storage) = fresh_store();
    block_on(store.login("user@example.com", "secret1")).unwrap();
    assert_eq!(block_on(store.logout()), SessionNotice::SignedOut);
    assert!(!store.snapshot().is_authenticated());
    assert_eq!(storage.raw(), None);
}

#[test]
fn logout_twice_matches_logout_once() {
    let (store, storage) = fresh_store();
    block_on(store.login("user@example.com", "secret1")).unwrap();
    block_on(store.logout());
    let once = (store.snapshot(), storage.raw());
    block_on(store.logout());
    assert_eq!((store.snapshot(), storage.raw()), once);
}

#[test]
fn logout_when_signed_out_is_harmless() {
    let (store, storage) = fresh_store();
    block_on(store.logout());
    assert_eq!(store.snapshot(), SessionState::default());
    assert_eq!(storage.raw(), None);
}

// =============================================================
// failing collaborators
// =============================================================

#[test]
fn backend_failure_leaves_state_untouched() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(storage.clone(), FailingBackend);
    store.initialize();
    assert!(matches!(block_on(store.login_with_google()), Err(SessionError::Backend(_))));
    assert_eq!(store.snapshot(), SessionState::default());
    assert_eq!(storage.raw(), None);
}

#[test]
fn logout_succeeds_even_when_backend_fails() {
    let storage = MemoryStorage::with_record(r#"{"id":"user-a","name":"a","email":"a@b.c"}"#);
    let store = SessionStore::new(storage.clone(), FailingBackend);
    assert!(store.initialize().is_authenticated());
    block_on(store.logout());
    assert!(!store.snapshot().is_authenticated());
    assert_eq!(storage.raw(), None);
}

#[test]
fn storage_failure_does_not_publish_user() {
    let store = SessionStore::new(ReadOnlyStorage, MockAuthBackend::with_latency(Duration::ZERO));
    store.initialize();
    let result = block_on(store.login("user@example.com", "secret1"));
    assert!(matches!(result, Err(SessionError::Persistence(_))));
    assert!(!store.snapshot().is_authenticated());
    assert!(!store.snapshot().loading);
}

// =============================================================
// notices
// =============================================================

#[test]
fn notices_carry_toast_copy() {
    assert_eq!(SessionNotice::SignedIn(AuthProvider::Password).title(), "Welcome back!");
    assert_eq!(
        SessionNotice::SignedIn(AuthProvider::Google).description(),
        "You have successfully signed in with Google."
    );
    assert_eq!(SessionOp::Social(AuthProvider::Apple).failure_title(), "Apple login failed");
    assert_eq!(SessionError::InvalidCredentials.to_string(), "Invalid credentials");
}

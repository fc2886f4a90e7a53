use futures::executor::block_on;

use super::*;

fn backend() -> MockAuthBackend {
    MockAuthBackend::with_latency(Duration::ZERO)
}

// =============================================================
// Validation rules
// =============================================================

#[test]
fn email_rule_only_requires_at_sign() {
    assert!(is_valid_email("a@b"));
    assert!(!is_valid_email("bad-email"));
    assert!(!is_valid_email(""));
}

#[test]
fn password_rule_requires_six_characters() {
    assert!(is_valid_password("secret"));
    assert!(!is_valid_password("12345"));
    assert!(is_valid_password("ñññððð"));
}

#[test]
fn default_latency_is_one_second() {
    assert_eq!(MockAuthBackend::default().latency(), SIMULATED_LATENCY);
    assert_eq!(SIMULATED_LATENCY, Duration::from_millis(1000));
}

// =============================================================
// login
// =============================================================

#[test]
fn login_derives_name_and_avatar_from_email() {
    let user = block_on(backend().login("user@example.com", "secret1")).unwrap();
    assert_eq!(user.name, "user");
    assert_eq!(user.email, "user@example.com");
    assert_eq!(
        user.profile_picture,
        "https://api.dicebear.com/7.x/avataaars/svg?seed=user%40example.com"
    );
}

#[test]
fn login_generates_prefixed_random_ids() {
    let first = block_on(backend().login("user@example.com", "secret1")).unwrap();
    let second = block_on(backend().login("user@example.com", "secret1")).unwrap();
    assert!(first.id.starts_with("user-"));
    assert_eq!(first.id.len(), "user-".len() + 9);
    assert_ne!(first.id, second.id);
}

#[test]
fn login_rejects_malformed_input() {
    assert_eq!(
        block_on(backend().login("bad-email", "secret1")),
        Err(SessionError::InvalidCredentials)
    );
    assert_eq!(
        block_on(backend().login("user@example.com", "short")),
        Err(SessionError::InvalidCredentials)
    );
}

// =============================================================
// register / reset / social
// =============================================================

#[test]
fn register_keeps_trimmed_name() {
    let user = block_on(backend().register("  Robin ", "robin@example.com", "123456")).unwrap();
    assert_eq!(user.name, "Robin");
}

#[test]
fn register_rejects_empty_name() {
    assert_eq!(
        block_on(backend().register("", "a@b.com", "123456")),
        Err(SessionError::InvalidRegistration)
    );
    assert_eq!(
        block_on(backend().register("   ", "a@b.com", "123456")),
        Err(SessionError::InvalidRegistration)
    );
}

#[test]
fn reset_password_checks_email_only() {
    assert_eq!(block_on(backend().reset_password("a@b.com")), Ok(()));
    assert_eq!(block_on(backend().reset_password("nobody")), Err(SessionError::InvalidEmail));
}

#[test]
fn social_login_produces_provider_users() {
    let google = block_on(backend().social_login(AuthProvider::Google)).unwrap();
    assert_eq!(google.name, "Google User");
    assert_eq!(google.email, "google.user@example.com");
    assert!(google.profile_picture.ends_with("seed=google"));

    let apple = block_on(backend().social_login(AuthProvider::Apple)).unwrap();
    assert_eq!(apple.name, "Apple User");
    assert_eq!(apple.email, "apple.user@example.com");
}

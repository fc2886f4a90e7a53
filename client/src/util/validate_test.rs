use super::*;

#[test]
fn email_shape_needs_local_domain_and_tld() {
    assert!(looks_like_email("a@b.co"));
    assert!(looks_like_email("first.last@mail.example.org"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.com"));
    assert!(!looks_like_email("a@.com"));
    assert!(!looks_like_email("a@b."));
    assert!(!looks_like_email("a b@c.com"));
}

#[test]
fn check_email_distinguishes_missing_from_invalid() {
    assert_eq!(check_email("   "), Err("Email is required"));
    assert_eq!(check_email("bad-email"), Err("Email is invalid"));
    assert_eq!(check_email(" user@example.com "), Ok(()));
}

#[test]
fn check_password_enforces_minimum_length() {
    assert_eq!(check_password(""), Err("Password is required"));
    assert_eq!(check_password("12345"), Err("Password must be at least 6 characters"));
    assert_eq!(check_password("123456"), Ok(()));
}

#[test]
fn check_name_rejects_blank() {
    assert_eq!(check_name(" \t"), Err("Name is required"));
    assert_eq!(check_name("Robin"), Ok(()));
}

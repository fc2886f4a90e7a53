//! Form field validation shared by the auth and profile views.
//!
//! These rules are stricter than the session backend's (`x@y.z` rather than
//! just an `@`) because they only drive field-level messages.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::session::backend::MIN_PASSWORD_LEN;

/// Field-level message for a rejected input.
pub type FieldError = &'static str;

/// `true` for `local@domain.tld` shapes without whitespace.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// # Errors
///
/// "Email is required" or "Email is invalid".
pub fn check_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Email is required");
    }
    if !looks_like_email(value) {
        return Err("Email is invalid");
    }
    Ok(())
}

/// # Errors
///
/// "Password is required" or "Password must be at least 6 characters".
pub fn check_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err("Password is required");
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// # Errors
///
/// "Name is required" for blank input.
pub fn check_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err("Name is required");
    }
    Ok(())
}

//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the session
//! store and theme preference do not repeat web-sys glue. Outside the browser
//! reads return `None` and writes report `StorageError::Unavailable`.

/// Failure writing to browser storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No window or `localStorage` (SSR, private mode, sandboxed frame).
    #[error("local storage unavailable")]
    Unavailable,

    /// The browser refused the write (quota, security policy).
    #[error("local storage write failed: {0}")]
    Write(String),
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the raw string stored under `key`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`.
///
/// # Errors
///
/// Returns a [`StorageError`] when storage is missing or rejects the write.
pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Err(StorageError::Unavailable)
    }
}

/// Remove `key`, ignoring missing storage.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

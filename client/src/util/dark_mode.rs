//! Theme preference initialization and toggle.
//!
//! Reads the stored preference from `localStorage` (key `theme`, values
//! `"dark"` / `"light"`) and applies the `dark` class plus a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to storage.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

const STORAGE_KEY: &str = "theme";

/// Resolve the theme from a stored value and the system preference.
///
/// A stored `"dark"` or `"light"` wins; anything else defers to the system.
#[must_use]
pub fn parse_preference(stored: Option<&str>, system_dark: bool) -> bool {
    match stored.map(str::trim) {
        Some("dark") => true,
        Some("light") => false,
        _ => system_dark,
    }
}

#[must_use]
pub fn stored_value(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Read the dark mode preference.
pub fn read_preference() -> bool {
    parse_preference(storage::get_item(STORAGE_KEY).as_deref(), system_prefers_dark())
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the theme to the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", stored_value(enabled));
            let classes = el.class_list();
            let _ = if enabled { classes.add_1("dark") } else { classes.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = storage::set_item(STORAGE_KEY, stored_value(next)) {
        log::debug!("theme preference not saved: {e}");
    }
    next
}

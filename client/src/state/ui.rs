//! Local UI chrome state (theme, menus).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! `chat`, `journal`) so layout controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the theme and the collapsible menus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub user_menu_open: bool,
}

impl UiState {
    /// Close every open menu, e.g. after navigating.
    pub fn close_menus(&mut self) {
        self.mobile_menu_open = false;
        self.user_menu_open = false;
    }
}

use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_menus_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
    assert!(!state.user_menu_open);
}

// =============================================================
// close_menus
// =============================================================

#[test]
fn close_menus_keeps_theme() {
    let mut state = UiState {
        dark_mode: true,
        mobile_menu_open: true,
        user_menu_open: true,
    };
    state.close_menus();
    assert_eq!(
        state,
        UiState {
            dark_mode: true,
            ..UiState::default()
        }
    );
}

//! Layout for signed-in app screens: floating header controls, page body,
//! bottom navigation.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::user_menu::UserMenu;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <main class="app-layout__main">
                <div class="app-layout__controls">
                    <ThemeToggle/>
                    <UserMenu/>
                </div>
                <div class="page-container">{children()}</div>
            </main>
            <NavBar/>
        </div>
    }
}

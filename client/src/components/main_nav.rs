//! Top navigation of the public layout.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::components::user_menu::UserMenu;
use crate::state::ui::UiState;
use crate::util::routes::{START_JOURNEY, TOP_NAV};

#[component]
pub fn MainNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let links = move || {
        TOP_NAV
            .iter()
            .map(|item| {
                view! {
                    <a href=item.href class="main-nav__link" on:click=move |_| ui.update(UiState::close_menus)>
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="main-nav">
            <div class="main-nav__inner">
                <a href="/" class="main-nav__brand">"MindfulAI"</a>
                <nav class="main-nav__links">{links}</nav>
                <div class="main-nav__actions">
                    <ThemeToggle/>
                    <UserMenu/>
                    <a href=START_JOURNEY.href class="button button--primary">{START_JOURNEY.label}</a>
                    <button
                        class="main-nav__menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
                    >
                        {move || if ui.get().mobile_menu_open { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>
            <Show when=move || ui.get().mobile_menu_open>
                <nav class="main-nav__mobile">
                    {links}
                    <a href=START_JOURNEY.href class="button button--primary" on:click=move |_| ui.update(UiState::close_menus)>
                        {START_JOURNEY.label}
                    </a>
                </nav>
            </Show>
        </header>
    }
}

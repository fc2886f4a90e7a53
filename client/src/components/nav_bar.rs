//! Bottom navigation of the app layout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::routes::{BOTTOM_NAV, is_active};

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="bottom-nav">
            {BOTTOM_NAV
                .iter()
                .map(|item| {
                    let item = *item;
                    let class = move || {
                        if is_active(&item, &location.pathname.get()) {
                            "nav-item active"
                        } else {
                            "nav-item"
                        }
                    };
                    view! {
                        <a href=item.href class=class>
                            <span class=format!("icon icon--{}", item.icon) aria-hidden="true"></span>
                            <span class="nav-item__label">{item.label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

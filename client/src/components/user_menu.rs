//! Header user menu: sign-in link or avatar dropdown.

#[cfg(test)]
#[path = "user_menu_test.rs"]
mod user_menu_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::toaster::report_session;
use crate::session::{SessionOp, SessionStore};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// First character of `name`, or `U` when empty.
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn UserMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        ui.update(UiState::close_menus);
        navigate("/", NavigateOptions::default());
        let store = store.clone();
        leptos::task::spawn_local(async move {
            let notice = store.logout().await;
            report_session(toasts, SessionOp::Logout, &Ok(notice));
        });
    };

    move || {
        let Some(user) = session.get().user else {
            return view! {
                <a href="/auth" class="button button--outline user-menu__login">"Login / Register"</a>
            }
            .into_any();
        };
        let initial = avatar_initial(&user.name);
        let name = user.name;
        let email = user.email;
        let picture = (!user.profile_picture.is_empty()).then_some(user.profile_picture);
        let avatar = match picture {
            Some(src) => view! { <img class="avatar" src=src alt=name.clone()/> }.into_any(),
            None => view! { <span class="avatar avatar--fallback">{initial}</span> }.into_any(),
        };
        let on_logout = on_logout.clone();
        view! {
            <div class="user-menu">
                <button
                    class="user-menu__trigger"
                    title=name.clone()
                    on:click=move |_| ui.update(|u| u.user_menu_open = !u.user_menu_open)
                >
                    {avatar}
                </button>
                <Show when=move || ui.get().user_menu_open>
                    <div class="user-menu__dropdown" on:click=move |_| ui.update(UiState::close_menus)>
                        <div class="user-menu__label">
                            <p class="user-menu__name">{name.clone()}</p>
                            <p class="user-menu__email">{email.clone()}</p>
                        </div>
                        <hr/>
                        <a href="/profile" class="user-menu__item">"Profile"</a>
                        <a href="/profile?tab=notifications" class="user-menu__item">"Settings"</a>
                        <hr/>
                        <button class="user-menu__item user-menu__item--danger" on:click=on_logout.clone()>
                            "Log out"
                        </button>
                    </div>
                </Show>
            </div>
        }
        .into_any()
    }
}

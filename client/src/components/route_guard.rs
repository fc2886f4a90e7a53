//! Route guard for signed-in-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps each protected route in `app.rs`. The decision itself lives in
//! `util::auth::guard`; this component only maps it onto the router.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, guard};
use crate::util::routes::AppRoute;

/// Render `children` only for a signed-in user.
///
/// While the session is loading nothing is rendered; a settled session
/// without a user is redirected to the auth page with the requested path.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        let search = search.trim_start_matches('?');
        let requested = if search.is_empty() { path.clone() } else { format!("{path}?{search}") };
        session.with(|state| guard(state, AppRoute::from_path(&path).access(), &requested))
    });

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="route-pending" aria-busy="true"></div> }.into_any(),
        GuardDecision::Redirect(to) => {
            log::debug!("redirecting signed-out visitor to {to}");
            view! { <Redirect path=to/> }.into_any()
        }
        GuardDecision::Render => children().into_any(),
    }
}

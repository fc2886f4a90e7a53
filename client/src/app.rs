//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` creates one `SessionStore` (browser storage + mock backend) and
//! mirrors every state it publishes into an `RwSignal<SessionState>`.
//! Components read the signal; only the store writes session state.
//! Protected routes are wrapped in `RequireAuth`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RequireAuth;
use crate::components::toaster::Toaster;
use crate::pages::{
    auth::AuthPage, chat::ChatPage, dashboard::DashboardPage, exercises::ExercisesPage, home::HomePage,
    journal::JournalPage, not_found::NotFoundPage, profile::ProfilePage,
};
use crate::session::{BrowserStorage, MockAuthBackend, SessionStore};
use crate::state::{chat::ChatState, journal::JournalState, session::SessionState, toast::ToastState, ui::UiState};
use crate::util::dark_mode;
use crate::util::routes::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Pending until the persisted record is read on the client, so the
    // server never renders protected content or redirects.
    let session = RwSignal::new(SessionState::pending());
    let store = SessionStore::new(BrowserStorage, MockAuthBackend::default());
    store.subscribe(move |state| session.set(state.clone()));

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let chat = RwSignal::new(ChatState::default());
    let journal = RwSignal::new(JournalState::default());

    provide_context(session);
    provide_context(store.clone());
    provide_context(ui);
    provide_context(toasts);
    provide_context(chat);
    provide_context(journal);

    // Effects only run in the browser.
    Effect::new(move |_| {
        store.initialize();
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    let guarded = |page: fn() -> AnyView| {
        move || view! { <RequireAuth>{page()}</RequireAuth> }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/mindful.css"/>
        <Title text=AppRoute::Home.title()/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                <Route path=StaticSegment(AppRoute::Auth.segment()) view=AuthPage/>
                <Route path=StaticSegment(AppRoute::Chat.segment()) view=guarded(|| view! { <ChatPage/> }.into_any())/>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=guarded(|| view! { <DashboardPage/> }.into_any())/>
                <Route path=StaticSegment(AppRoute::Journal.segment()) view=guarded(|| view! { <JournalPage/> }.into_any())/>
                <Route path=StaticSegment(AppRoute::Exercises.segment()) view=guarded(|| view! { <ExercisesPage/> }.into_any())/>
                <Route path=StaticSegment(AppRoute::Profile.segment()) view=guarded(|| view! { <ProfilePage/> }.into_any())/>
            </Routes>
        </Router>
        <Toaster/>
    }
}

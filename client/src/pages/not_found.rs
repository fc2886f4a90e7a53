//! Fallback for unmatched paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <a href="/" class="button button--primary">"Return to Home"</a>
        </div>
    }
}

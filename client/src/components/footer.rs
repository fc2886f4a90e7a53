//! Public-site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <p class="footer__name">"MindfulAI"</p>
                    <p class="footer__tagline">"Your companion for everyday mental wellbeing."</p>
                </div>
                <nav class="footer__links">
                    <a href="/#features">"Features"</a>
                    <a href="/exercises">"Exercises"</a>
                    <a href="/#help">"Help"</a>
                    <a href="/auth">"Sign in"</a>
                </nav>
                <p class="footer__notice">
                    "MindfulAI is not a substitute for professional care. If you are in crisis, call or text 988."
                </p>
            </div>
        </footer>
    }
}

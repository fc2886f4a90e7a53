//! "Need professional help?" panel.

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::state::toast::{ToastState, ToastVariant};

/// Crisis line offered by the call button.
pub const HELPLINE_NUMBER: &str = "988";

#[component]
pub fn TherapistConnect() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_book = move |_| {
        notify(
            toasts,
            "Booking requested",
            "A care coordinator will reach out to schedule your session.",
            ToastVariant::Default,
        );
    };

    view! {
        <section class="therapist-connect">
            <h3>"Need professional help?"</h3>
            <p class="muted">
                "Connect with licensed therapists and mental health professionals for personalized support."
            </p>
            <div class="therapist-connect__actions">
                <a class="therapist-connect__action" href=format!("tel:{HELPLINE_NUMBER}")>
                    <span class="icon icon--phone" aria-hidden="true"></span>
                    <span>"Call Helpline"</span>
                </a>
                <button class="therapist-connect__action" on:click=on_book>
                    <span class="icon icon--calendar" aria-hidden="true"></span>
                    <span>"Book Session"</span>
                </button>
                <a class="therapist-connect__action" href=format!("sms:{HELPLINE_NUMBER}")>
                    <span class="icon icon--message-square" aria-hidden="true"></span>
                    <span>"Text Support"</span>
                </a>
            </div>
        </section>
    }
}

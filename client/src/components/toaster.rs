//! Toast viewport and the helpers every view uses to raise toasts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session outcomes and chat failures are surfaced here rather than inline,
//! so pages only decide *what* to say. Toasts auto-dismiss after
//! [`TOAST_LIFETIME`].

use std::time::Duration;

use leptos::prelude::*;

use crate::session::{SessionError, SessionNotice, SessionOp};
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::delay;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Queue a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) {
    let mut id = 0;
    toasts.update(|t| id = t.push(title, description, variant));
    leptos::task::spawn_local(async move {
        delay::sleep(TOAST_LIFETIME).await;
        toasts.update(|t| t.dismiss(id));
    });
}

/// Toast the outcome of a session operation. Returns `true` on success.
pub fn report_session(toasts: RwSignal<ToastState>, op: SessionOp, result: &Result<SessionNotice, SessionError>) -> bool {
    match result {
        Ok(notice) => {
            notify(toasts, notice.title(), notice.description(), ToastVariant::Default);
            true
        }
        Err(err) => {
            notify(toasts, op.failure_title(), err.to_string(), ToastVariant::Destructive);
            false
        }
    }
}

/// Fixed-position stack of active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    let description = (!toast.description.is_empty())
                        .then(|| view! { <p class="toast__description">{toast.description}</p> });
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                {description}
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

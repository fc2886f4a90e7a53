//! Companion chat transcript and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `RwSignal<ChatState>`; each send is one
//! `POST /api/chat` round trip on the transcript's own thread. Failures
//! never leave the composer stuck: a destructive toast is raised and a
//! fallback assistant line appended.

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::net::api;
use crate::state::chat::{ChatMessage, ChatState};
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::speech;

#[component]
pub fn ChatInterface() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let input = RwSignal::new(String::new());

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outgoing = None;
        chat.update(|c| outgoing = c.push_user(&input.get_untracked()));
        let Some(message) = outgoing else {
            return;
        };
        input.set(String::new());
        let thread_id = chat.with_untracked(|c| c.thread_id.clone());

        leptos::task::spawn_local(async move {
            match api::send_chat_message(&message, Some(&thread_id)).await {
                Ok(reply) => {
                    if chat.get_untracked().speak_replies {
                        speech::speak(&reply);
                    }
                    chat.update(|c| c.push_reply(reply));
                }
                Err(e) => {
                    log::warn!("chat request failed: {e}");
                    notify(
                        toasts,
                        "Connection problem",
                        "We couldn't reach your companion. Please try again.",
                        ToastVariant::Destructive,
                    );
                    chat.update(ChatState::push_fallback);
                }
            }
        });
    };

    let on_toggle_voice = move |_| {
        chat.update(|c| c.speak_replies = !c.speak_replies);
        if !chat.get_untracked().speak_replies {
            speech::cancel();
        }
    };

    let send_disabled = move || !chat.with(|c| c.can_send(&input.get()));

    view! {
        <div class="chat">
            <div class="chat__transcript">
                <For
                    each=move || chat.get().messages
                    key=|m| m.id
                    children=move |m: ChatMessage| {
                        let row = if m.is_user() { "chat__row chat__row--user" } else { "chat__row" };
                        let bubble = match (m.is_user(), m.emotion) {
                            (true, _) => "chat-bubble-user".to_owned(),
                            (false, Some(tone)) => format!("chat-bubble-ai {}", tone.class()),
                            (false, None) => "chat-bubble-ai".to_owned(),
                        };
                        view! {
                            <div class=row>
                                <div class=bubble>{m.content}</div>
                            </div>
                        }
                    }
                />
                <Show when=move || chat.get().awaiting_reply>
                    <div class="chat__row">
                        <div class="chat-bubble-ai chat-bubble-ai--pending" aria-label="Waiting for reply">
                            <span class="spinner"></span>
                        </div>
                    </div>
                </Show>
            </div>
            <form class="chat__composer" on:submit=on_send>
                <button
                    type="button"
                    class=move || if chat.get().speak_replies { "chat__voice chat__voice--on" } else { "chat__voice" }
                    title="Read replies aloud"
                    on:click=on_toggle_voice
                >
                    "\u{1f50a}"
                </button>
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="chat__send" type="submit" disabled=send_disabled>
                    "Send"
                </button>
            </form>
        </div>
    }
}

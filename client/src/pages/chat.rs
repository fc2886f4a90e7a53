//! Companion chat page.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::components::chat_interface::ChatInterface;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <AppLayout>
            <h1 class="page-title">"AI Assistant"</h1>
            <ChatInterface/>
        </AppLayout>
    }
}

//! Journal page: entry list plus editor.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::components::toaster::notify;
use crate::state::journal::{JournalEntry, JournalState, MoodLevel};
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::clock;

#[component]
pub fn JournalPage() -> impl IntoView {
    let journal = expect_context::<RwSignal<JournalState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let mood = RwSignal::new(None::<MoodLevel>);

    let load_editor = move |entry: Option<&JournalEntry>| {
        title.set(entry.map(|e| e.title.clone()).unwrap_or_default());
        content.set(entry.map(|e| e.content.clone()).unwrap_or_default());
        mood.set(entry.and_then(|e| e.mood));
    };

    let on_new = move |_| {
        journal.update(|j| {
            let entry = j.create(&clock::today_iso(), clock::now_millis());
            load_editor(Some(entry));
        });
    };

    let on_select = move |id: String| {
        journal.update(|j| {
            if j.select(&id) {
                load_editor(j.active());
            }
        });
    };

    let on_delete = move |id: String| {
        journal.update(|j| {
            let was_active = j.active_id.as_deref() == Some(id.as_str());
            if j.delete(&id) && was_active {
                load_editor(None);
            }
        });
    };

    let on_save = move |_| {
        let mut saved = false;
        journal.update(|j| {
            saved = j.save_active(&title.get_untracked(), &content.get_untracked(), mood.get_untracked());
        });
        if saved {
            notify(toasts, "Entry saved", "", ToastVariant::Default);
        }
    };

    let has_active = move || journal.with(|j| j.active().is_some());

    view! {
        <AppLayout>
            <div class="journal">
                <aside class="journal__list">
                    <div class="journal__list-header">
                        <h2>"Journal"</h2>
                        <button class="icon-button" title="New entry" on:click=on_new>"+"</button>
                    </div>
                    <For
                        each=move || journal.get().entries
                        key=|e| (e.id.clone(), e.title.clone(), e.content.clone(), e.mood)
                        children=move |entry: JournalEntry| {
                            let id = entry.id.clone();
                            let select_id = entry.id.clone();
                            let delete_id = entry.id.clone();
                            let class = move || {
                                if journal.with(|j| j.active_id.as_deref() == Some(id.as_str())) {
                                    "journal-card journal-card--active"
                                } else {
                                    "journal-card"
                                }
                            };
                            view! {
                                <div class=class on:click=move |_| on_select(select_id.clone())>
                                    <div class="journal-card__header">
                                        <h3>{entry.title}</h3>
                                        <button
                                            class="icon-button icon-button--danger"
                                            title="Delete entry"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                on_delete(delete_id.clone());
                                            }
                                        >
                                            "\u{1f5d1}"
                                        </button>
                                    </div>
                                    <p class="journal-card__preview muted">{entry.content}</p>
                                    <p class="journal-card__meta muted">
                                        {entry.date}
                                        {entry.mood.map(|m| view! { <span class="tag">{m.label()}</span> })}
                                        {entry.tags.into_iter().map(|t| view! { <span class="tag">{format!("#{t}")}</span> }).collect_view()}
                                    </p>
                                </div>
                            }
                        }
                    />
                </aside>

                <section class="journal__editor card">
                    <Show
                        when=has_active
                        fallback=|| view! {
                            <div class="journal__empty muted">
                                <p>"Select an entry or create a new one to start writing."</p>
                            </div>
                        }
                    >
                        <input
                            class="journal__title"
                            type="text"
                            placeholder="Title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        <div class="journal__moods">
                            {MoodLevel::ALL
                                .into_iter()
                                .map(|level| {
                                    let class = move || {
                                        if mood.get() == Some(level) { "tag tag--selected" } else { "tag" }
                                    };
                                    view! {
                                        <button
                                            class=class
                                            on:click=move |_| mood.update(|m| *m = if *m == Some(level) { None } else { Some(level) })
                                        >
                                            {level.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <textarea
                            class="journal__content"
                            placeholder="Start writing your thoughts..."
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                        <div class="journal__actions">
                            <button class="button button--primary" on:click=on_save>"Save"</button>
                        </div>
                    </Show>
                </section>
            </div>
        </AppLayout>
    }
}

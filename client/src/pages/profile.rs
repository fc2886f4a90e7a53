//! Profile page: account details, password, notification preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Profile and password updates are simulated with the
//! same latency as the session backend. Log out and account deletion both
//! end the session through the `SessionStore` and return home.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::app_layout::AppLayout;
use crate::components::toaster::{notify, report_session};
use crate::components::user_menu::avatar_initial;
use crate::session::backend::SIMULATED_LATENCY;
use crate::session::{SessionOp, SessionStore};
use crate::state::session::SessionState;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::delay;
use crate::util::validate::{FieldError, check_email, check_name, check_password};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Profile,
    Security,
    Notifications,
}

impl ProfileTab {
    pub const ALL: [Self; 3] = [Self::Profile, Self::Security, Self::Notifications];

    /// Tab named by the `tab` query parameter; unknown values open Profile.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("security") => Self::Security,
            Some("notifications") => Self::Notifications,
            _ => Self::Profile,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Security => "Security",
            Self::Notifications => "Notifications",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileFormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
}

impl ProfileFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordFormErrors {
    pub current: Option<FieldError>,
    pub new: Option<FieldError>,
    pub confirm: Option<FieldError>,
}

impl PasswordFormErrors {
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.new.is_none() && self.confirm.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub email: bool,
    pub app: bool,
    pub weekly_report: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            app: true,
            weekly_report: true,
        }
    }
}

pub fn validate_profile_form(name: &str, email: &str) -> ProfileFormErrors {
    ProfileFormErrors {
        name: check_name(name).err(),
        email: check_email(email).err(),
    }
}

pub fn validate_password_form(current: &str, new: &str, confirm: &str) -> PasswordFormErrors {
    let new_error = if new.is_empty() {
        Some("New password is required")
    } else {
        check_password(new).err()
    };
    let confirm_error = if confirm.is_empty() {
        Some("Please confirm your password")
    } else if new != confirm {
        Some("Passwords do not match")
    } else {
        None
    };
    PasswordFormErrors {
        current: current.is_empty().then_some("Current password is required"),
        new: new_error,
        confirm: confirm_error,
    }
}

#[cfg(feature = "hydrate")]
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(not(feature = "hydrate"))]
fn confirm(_message: &str) -> bool {
    false
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let initial = session.get_untracked().user;
    let name = RwSignal::new(initial.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(initial.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let prefs = RwSignal::new(NotificationPrefs::default());
    let profile_errors = RwSignal::new(ProfileFormErrors::default());
    let password_errors = RwSignal::new(PasswordFormErrors::default());
    let saving = RwSignal::new(false);

    let tab = RwSignal::new(ProfileTab::from_query(query.get_untracked().get("tab").as_deref()));
    Effect::new(move |_| tab.set(ProfileTab::from_query(query.get().get("tab").as_deref())));

    let busy = move || saving.get() || session.get().loading;

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let errors = validate_profile_form(&name.get_untracked(), &email.get_untracked());
        let valid = errors.is_empty();
        profile_errors.set(errors);
        if !valid || saving.get_untracked() {
            return;
        }
        saving.set(true);
        leptos::task::spawn_local(async move {
            delay::sleep(SIMULATED_LATENCY).await;
            saving.set(false);
            notify(
                toasts,
                "Profile updated",
                "Your profile information has been updated successfully.",
                ToastVariant::Default,
            );
        });
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let errors = validate_password_form(
            &current_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        let valid = errors.is_empty();
        password_errors.set(errors);
        if !valid || saving.get_untracked() {
            return;
        }
        saving.set(true);
        leptos::task::spawn_local(async move {
            delay::sleep(SIMULATED_LATENCY).await;
            current_password.set(String::new());
            new_password.set(String::new());
            confirm_password.set(String::new());
            saving.set(false);
            notify(
                toasts,
                "Password updated",
                "Your password has been updated successfully.",
                ToastVariant::Default,
            );
        });
    };

    let end_session = {
        let store = store.clone();
        let navigate = navigate.clone();
        move |deleted: bool| {
            navigate("/", NavigateOptions::default());
            let store = store.clone();
            leptos::task::spawn_local(async move {
                if deleted {
                    delay::sleep(SIMULATED_LATENCY).await;
                }
                let notice = store.logout().await;
                if deleted {
                    notify(
                        toasts,
                        "Account deleted",
                        "Your account has been deleted successfully.",
                        ToastVariant::Default,
                    );
                } else {
                    report_session(toasts, SessionOp::Logout, &Ok(notice));
                }
            });
        }
    };
    let on_logout = {
        let end_session = end_session.clone();
        move |_| end_session(false)
    };
    let on_delete = move |_| {
        if confirm("Are you sure you want to delete your account? This action cannot be undone.") {
            end_session(true);
        }
    };

    let on_save_prefs = move |_| {
        notify(
            toasts,
            "Preferences saved",
            "Your notification preferences have been updated.",
            ToastVariant::Default,
        );
    };

    let header_name = move || session.get().display_name().map(str::to_owned).unwrap_or_default();
    let header_email = move || session.get().user.map(|u| u.email).unwrap_or_default();
    let header_picture = move || session.get().user.map(|u| u.profile_picture).filter(|p| !p.is_empty());

    let error_line = |msg: Option<FieldError>| msg.map(|m| view! { <p class="field-error">{m}</p> });

    let toggle_row = move |title: &'static str, body: &'static str, get: fn(&NotificationPrefs) -> bool, set: fn(&mut NotificationPrefs)| {
        view! {
            <div class="pref-row">
                <div>
                    <h4>{title}</h4>
                    <p class="muted">{body}</p>
                </div>
                <input
                    type="checkbox"
                    class="switch"
                    prop:checked=move || prefs.with(get)
                    on:change=move |_| prefs.update(set)
                />
            </div>
        }
    };

    view! {
        <AppLayout>
            <div class="profile">
                <div class="profile__header card">
                    {move || match header_picture() {
                        Some(src) => view! { <img class="avatar avatar--large" src=src alt=header_name()/> }.into_any(),
                        None => view! { <span class="avatar avatar--large avatar--fallback">{avatar_initial(&header_name())}</span> }.into_any(),
                    }}
                    <div>
                        <h2>{header_name}</h2>
                        <p class="muted">{header_email}</p>
                    </div>
                    <button class="button button--outline" disabled=busy on:click=on_logout>"Log out"</button>
                </div>

                <div class="tabs">
                    {ProfileTab::ALL
                        .into_iter()
                        .map(|t| {
                            let class = move || if tab.get() == t { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" };
                            view! { <button class=class on:click=move |_| tab.set(t)>{t.label()}</button> }
                        })
                        .collect_view()}
                </div>

                <Show when=move || tab.get() == ProfileTab::Profile>
                    <form class="card form" on:submit=on_profile_submit>
                        <h3>"Personal Information"</h3>
                        <label for="name">"Name"</label>
                        <input
                            id="name"
                            class="input"
                            type="text"
                            disabled=busy
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        {move || error_line(profile_errors.get().name)}
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            class="input"
                            type="email"
                            disabled=busy
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        {move || error_line(profile_errors.get().email)}
                        <button type="submit" class="button button--primary" disabled=busy>
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || tab.get() == ProfileTab::Security>
                    <form class="card form" on:submit=on_password_submit>
                        <h3>"Change Password"</h3>
                        <label for="current-password">"Current Password"</label>
                        <input
                            id="current-password"
                            class="input"
                            type="password"
                            disabled=busy
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                        {move || error_line(password_errors.get().current)}
                        <label for="new-password">"New Password"</label>
                        <input
                            id="new-password"
                            class="input"
                            type="password"
                            disabled=busy
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        {move || error_line(password_errors.get().new)}
                        <label for="confirm-password">"Confirm New Password"</label>
                        <input
                            id="confirm-password"
                            class="input"
                            type="password"
                            disabled=busy
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                        {move || error_line(password_errors.get().confirm)}
                        <button type="submit" class="button button--primary" disabled=busy>
                            {move || if saving.get() { "Updating..." } else { "Update Password" }}
                        </button>
                    </form>
                    <div class="card danger-zone">
                        <h3>"Danger Zone"</h3>
                        <p class="muted">"Once you delete your account, there is no going back."</p>
                        <button class="button button--danger" disabled=busy on:click=on_delete.clone()>
                            "Delete Account"
                        </button>
                    </div>
                </Show>

                <Show when=move || tab.get() == ProfileTab::Notifications>
                    <div class="card form">
                        <h3>"Notification Preferences"</h3>
                        {toggle_row(
                            "Email Notifications",
                            "Receive email notifications about your account and progress.",
                            |p| p.email,
                            |p| p.email = !p.email,
                        )}
                        {toggle_row(
                            "App Notifications",
                            "Receive in-app notifications about your account and progress.",
                            |p| p.app,
                            |p| p.app = !p.app,
                        )}
                        {toggle_row(
                            "Weekly Progress Report",
                            "Receive a weekly summary of your mood and activity.",
                            |p| p.weekly_report,
                            |p| p.weekly_report = !p.weekly_report,
                        )}
                        <button class="button button--primary" on:click=on_save_prefs>"Save Preferences"</button>
                    </div>
                </Show>
            </div>
        </AppLayout>
    }
}

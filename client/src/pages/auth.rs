//! Sign-in, registration, and password-reset page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Validates fields locally, then hands the request to the
//! `SessionStore`; outcomes come back as toasts. Successful sign-ins return
//! to the location the route guard carried in `?from=`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::homepage_layout::HomepageLayout;
use crate::components::toaster::{notify, report_session};
use crate::session::{AuthProvider, SessionOp, SessionStore};
use crate::state::session::SessionState;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::auth::return_target;
use crate::util::validate::{FieldError, check_email, check_name, check_password};

/// Which form the page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    Reset,
}

impl AuthMode {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Register => "Create Your Account",
            Self::Reset => "Reset Password",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Sign in to continue your journey",
            Self::Register => "Join our community for better mental health",
            Self::Reset => "Enter your email to receive reset instructions",
        }
    }

    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Login, false) => "Sign In",
            (Self::Login, true) => "Signing in...",
            (Self::Register, false) => "Create Account",
            (Self::Register, true) => "Creating account...",
            (Self::Reset, false) => "Send Reset Link",
            (Self::Reset, true) => "Sending...",
        }
    }

    pub fn needs_password(self) -> bool {
        self != Self::Reset
    }

    fn op(self) -> SessionOp {
        match self {
            Self::Login => SessionOp::Login,
            Self::Register => SessionOp::Register,
            Self::Reset => SessionOp::ResetPassword,
        }
    }
}

/// Field-level messages from the last submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl AuthFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Check the fields the current mode shows.
pub fn validate_auth_form(mode: AuthMode, name: &str, email: &str, password: &str) -> AuthFormErrors {
    AuthFormErrors {
        name: (mode == AuthMode::Register).then(|| check_name(name).err()).flatten(),
        email: check_email(email).err(),
        password: mode.needs_password().then(|| check_password(password).err()).flatten(),
    }
}

/// Show the `next` form with no field errors.
///
/// Writes are skipped when the page has already been torn down, which
/// happens when the user navigates away while a request is in flight.
pub fn show_form(mode: RwSignal<AuthMode>, errors: RwSignal<AuthFormErrors>, next: AuthMode) {
    mode.try_set(next);
    errors.try_set(AuthFormErrors::default());
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let mode = RwSignal::new(AuthMode::Login);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(AuthFormErrors::default());

    let busy = move || session.get().loading;
    let target = move || return_target(query.with_untracked(|q| q.get("from")).as_deref());

    let switch_mode = move |next: AuthMode| show_form(mode, errors, next);

    let on_submit = {
        let store = store.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy() {
                return;
            }
            let current = mode.get_untracked();
            let name_value = name.get_untracked().trim().to_owned();
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            let found = validate_auth_form(current, &name_value, &email_value, &password_value);
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                return;
            }

            let store = store.clone();
            let navigate = navigate.clone();
            let target = target();
            leptos::task::spawn_local(async move {
                let result = match current {
                    AuthMode::Login => store.login(&email_value, &password_value).await,
                    AuthMode::Register => store.register(&name_value, &email_value, &password_value).await,
                    AuthMode::Reset => store.reset_password(&email_value).await,
                };
                if !report_session(toasts, current.op(), &result) {
                    return;
                }
                if current == AuthMode::Reset {
                    show_form(mode, errors, AuthMode::Login);
                } else {
                    navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            });
        }
    };

    let social = {
        let store = store.clone();
        let navigate = navigate.clone();
        move |provider: AuthProvider| {
            if busy() {
                return;
            }
            let store = store.clone();
            let navigate = navigate.clone();
            let target = target();
            leptos::task::spawn_local(async move {
                let result = match provider {
                    AuthProvider::Apple => store.login_with_apple().await,
                    AuthProvider::Google | AuthProvider::Password => store.login_with_google().await,
                };
                if report_session(toasts, SessionOp::Social(provider), &result) {
                    navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            });
        }
    };
    let on_google = {
        let social = social.clone();
        move |_| social(AuthProvider::Google)
    };
    let on_apple = move |_| social(AuthProvider::Apple);

    let on_anonymous = {
        let navigate = navigate.clone();
        move |_| {
            notify(
                toasts,
                "Anonymous Mode",
                "You're now browsing anonymously. Note that your progress won't be saved.",
                ToastVariant::Default,
            );
            navigate("/chat", NavigateOptions::default());
        }
    };

    let field_error = move |pick: fn(&AuthFormErrors) -> Option<FieldError>| {
        move || pick(&errors.get()).map(|msg| view! { <p class="field-error">{msg}</p> })
    };
    let input_class = move |pick: fn(&AuthFormErrors) -> Option<FieldError>| {
        move || if pick(&errors.get()).is_some() { "input input--invalid" } else { "input" }
    };

    view! {
        <HomepageLayout>
            <section class="auth">
                <div class="auth__card">
                    <div class="auth__header">
                        <h1>{move || mode.get().heading()}</h1>
                        <p class="muted">{move || mode.get().subtitle()}</p>
                    </div>

                    <form class="auth__form" on:submit=on_submit>
                        <Show when=move || mode.get() == AuthMode::Register>
                            <div class="field">
                                <input
                                    id="name"
                                    type="text"
                                    placeholder="Your Name"
                                    class=input_class(|e| e.name)
                                    disabled=busy
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                                {field_error(|e| e.name)}
                            </div>
                        </Show>

                        <div class="field">
                            <input
                                id="email"
                                type="email"
                                placeholder="Email Address"
                                class=input_class(|e| e.email)
                                disabled=busy
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            {field_error(|e| e.email)}
                        </div>

                        <Show when=move || mode.get().needs_password()>
                            <div class="field">
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="Password"
                                    class=input_class(|e| e.password)
                                    disabled=busy
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                {field_error(|e| e.password)}
                            </div>
                        </Show>

                        <Show when=move || mode.get() == AuthMode::Login>
                            <div class="auth__forgot">
                                <button
                                    type="button"
                                    class="link"
                                    disabled=busy
                                    on:click=move |_| switch_mode(AuthMode::Reset)
                                >
                                    "Forgot password?"
                                </button>
                            </div>
                        </Show>

                        <button type="submit" class="button button--primary button--block" disabled=busy>
                            {move || mode.get().submit_label(busy())}
                        </button>
                    </form>

                    <Show
                        when=move || mode.get() != AuthMode::Reset
                        fallback=move || view! {
                            <button
                                type="button"
                                class="link auth__back"
                                disabled=busy
                                on:click=move |_| switch_mode(AuthMode::Login)
                            >
                                "\u{2039} Back to sign in"
                            </button>
                        }
                    >
                        <div class="auth__divider"><span>"OR"</span></div>
                        <div class="auth__social">
                            <button type="button" class="button button--outline button--block" disabled=busy on:click=on_google.clone()>
                                "Continue with Google"
                            </button>
                            <button type="button" class="button button--outline button--block" disabled=busy on:click=on_apple.clone()>
                                "Continue with Apple"
                            </button>
                            <button type="button" class="button button--ghost button--block" disabled=busy on:click=on_anonymous.clone()>
                                "Continue Anonymously"
                            </button>
                        </div>
                        <p class="auth__toggle muted">
                            {move || if mode.get() == AuthMode::Login { "Don't have an account? " } else { "Already have an account? " }}
                            <button
                                type="button"
                                class="link"
                                disabled=busy
                                on:click=move |_| {
                                    let next = if mode.get_untracked() == AuthMode::Login { AuthMode::Register } else { AuthMode::Login };
                                    switch_mode(next);
                                }
                            >
                                {move || if mode.get() == AuthMode::Login { "Sign up" } else { "Sign in" }}
                            </button>
                        </p>
                    </Show>

                    <p class="auth__legal muted">
                        "By signing up, you agree to our Terms of Service and Privacy Policy."
                    </p>
                </div>
            </section>
        </HomepageLayout>
    }
}

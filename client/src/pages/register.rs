//! Account registration: sign-up followed by the profile insert.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::Button;
use crate::components::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::access::DASHBOARD_PATH;
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            notify_error(toasts, "Name, email and password are required.");
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::sign_up(&name_value, &email_value, &password_value).await;
            busy.set(false);
            match result {
                Ok(Some(session)) => {
                    notify_success(toasts, "Account created.");
                    auth.set(AuthState { session: Some(session), loading: false });
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Ok(None) => {
                    notify_success(toasts, "Account created. Confirm your email, then sign in.");
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("register: sign-up failed: {e}");
                    notify_error(toasts, e.to_string());
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Button submit=true loading=busy full_width=true>
                        "Register"
                    </Button>
                    <p class="auth-form__switch">
                        <A href="/login">"Already have an account? Sign in"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}

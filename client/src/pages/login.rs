//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::Button;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::access::DASHBOARD_PATH;

const SIGN_IN_FAILED: &str = "Could not sign in. Check your credentials.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::sign_in(&email_value, &password_value).await {
                Ok(session) => {
                    busy.set(false);
                    auth.set(AuthState { session: Some(session), loading: false });
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login: sign-in failed: {e}");
                    error.set(Some(SIGN_IN_FAILED));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in to your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
                    </Show>
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
                        "Sign in"
                    </Button>
                    <p class="auth-form__switch">
                        <A href="/register">"No account yet? Register here"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}

//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<AuthState>` for the signed-in links and runs its own
//! `is_admin` lookup to decide whether to show the user-management link.
//! A failed lookup just hides the link.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::access::{AdminDecision, AdminFallback, admin_decision};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let show_admin = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        show_admin.set(false);
        if !state.is_signed_in() {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::check_admin(&state).await;
            if let Err(e) = &result {
                log::warn!("navbar: admin check failed: {e}");
            }
            show_admin.set(admin_decision(&result, AdminFallback::Hide) == AdminDecision::Allow);
        });
    });

    let on_sign_out = Callback::new(move |()| {
        let state = auth.get_untracked();
        leptos::task::spawn_local(async move {
            api::sign_out(&state).await;
            // Protected routes see the empty session and redirect to /login.
            auth.set(AuthState::default());
        });
    });

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <A href="/">"ReservaFácil"</A>
            </div>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=|| {
                    view! {
                        <div class="navbar__links">
                            <A href="/login">"Sign in"</A>
                            <A href="/register">"Register"</A>
                        </div>
                    }
                }
            >
                <div class="navbar__links">
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/resources">"Resources"</A>
                    <A href="/reservations">"Reservations"</A>
                    <Show when=move || show_admin.get()>
                        <A href="/admin/users">"Users"</A>
                    </Show>
                </div>
                <div class="navbar__session">
                    <span class="navbar__email">
                        {move || auth.get().user().and_then(|u| u.email.clone()).unwrap_or_default()}
                    </span>
                    <button class="btn btn--primary btn--md" on:click=move |_| on_sign_out.run(())>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </nav>
    }
}

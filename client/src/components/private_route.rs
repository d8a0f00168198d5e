//! Route guard for signed-in (and optionally admin-only) pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows a placeholder while the stored session is restored, sends anonymous
//! visitors to `/login`, and on `admin_only` routes looks up `is_admin` each
//! time the session changes, redirecting non-admins to `/dashboard`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::access::{AdminDecision, AdminFallback, admin_decision};
use crate::util::auth::{GuardOutcome, guard_outcome, install_unauth_redirect};

#[component]
pub fn PrivateRoute(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    // None while the admin lookup is in flight.
    let admin = RwSignal::new(None::<bool>);

    Effect::new(move || {
        let state = auth.get();
        if guard_outcome(&state, admin_only) != GuardOutcome::CheckAdmin {
            return;
        }
        admin.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::check_admin(&state).await;
            if let Err(e) = &result {
                log::warn!("route guard: admin check failed: {e}");
            }
            match admin_decision(&result, AdminFallback::Redirect) {
                AdminDecision::Allow => admin.set(Some(true)),
                AdminDecision::Redirect(path) => {
                    admin.set(Some(false));
                    navigate(path, NavigateOptions::default());
                }
                AdminDecision::Hide => admin.set(Some(false)),
            }
        });
    });

    let placeholder = || view! { <div class="page-loading">"Loading..."</div> }.into_any();

    move || match guard_outcome(&auth.get(), admin_only) {
        GuardOutcome::Loading => placeholder(),
        GuardOutcome::RedirectLogin => ().into_any(),
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::CheckAdmin => match admin.get() {
            Some(true) => children().into_any(),
            Some(false) => ().into_any(),
            None => placeholder(),
        },
    }
}

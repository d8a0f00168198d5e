//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.
//! These guards shape navigation only; row-level policies on the hosted
//! service are what actually restrict data.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// Refresh this long before the access token expires.
const REFRESH_MARGIN_SECS: u64 = 60;

/// What a protected route should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Stored session still being validated.
    Loading,
    /// Nobody is signed in.
    RedirectLogin,
    /// Signed in; render the route.
    Render,
    /// Signed in on an admin-only route; look up `is_admin` before rendering.
    CheckAdmin,
}

#[must_use]
pub fn guard_outcome(state: &AuthState, admin_only: bool) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Loading
    } else if !state.is_signed_in() {
        GuardOutcome::RedirectLogin
    } else if admin_only {
        GuardOutcome::CheckAdmin
    } else {
        GuardOutcome::Render
    }
}

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    guard_outcome(state, false) == GuardOutcome::RedirectLogin
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Milliseconds to wait before refreshing a token that expires in
/// `expires_in` seconds.
#[must_use]
pub fn refresh_delay_ms(expires_in: u64) -> u32 {
    let secs = expires_in.saturating_sub(REFRESH_MARGIN_SECS);
    u32::try_from(secs.saturating_mul(1_000)).unwrap_or(u32::MAX)
}

/// Keep the signed-in session alive by refreshing it shortly before its
/// access token expires. One timer is armed per access token; a timer that
/// fires after the session changed does nothing, and a rejected refresh
/// signs the user out.
pub fn install_session_refresh(auth: RwSignal<AuthState>) {
    let token = Memo::new(move |_| auth.with(AuthState::access_token));
    Effect::new(move || {
        if token.get().is_none() {
            return;
        }
        let Some(session) = auth.with_untracked(|state| state.session.clone()) else {
            return;
        };
        let (Some(expires_in), Some(_)) = (session.expires_in, session.refresh_token.as_ref()) else {
            return;
        };
        let delay = refresh_delay_ms(expires_in);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            if auth.with_untracked(AuthState::access_token).as_deref() != Some(session.access_token.as_str()) {
                return;
            }
            match api::refresh(&session).await {
                Ok(fresh) => auth.update(|state| state.session = Some(fresh)),
                Err(e) if e.is_auth_rejection() => {
                    log::warn!("auth: session refresh rejected: {e}");
                    auth.set(AuthState::default());
                }
                Err(e) => log::warn!("auth: session refresh failed: {e}"),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = delay;
    });
}

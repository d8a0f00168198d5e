//! Gateway wiring for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never hold a long-lived client. Each call builds a
//! [`Gateway`] from the compile-time config and the current [`AuthState`]
//! token, so a sign-in or sign-out takes effect on the very next request.
//!
//! ERROR HANDLING
//! ==============
//! Everything returns `Result<_, GatewayError>`; pages turn failures into
//! toasts. Session persistence is best-effort and never fails a call.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gateway::config::{ANON_KEY_VAR, URL_VAR};
use gateway::model::{NewProfile, Session};
use gateway::{Gateway, GatewayConfig, GatewayError};

use super::transport::FetchTransport;
use crate::state::auth::AuthState;
use crate::util::storage;

/// `localStorage` key holding the signed-in [`Session`].
pub const SESSION_KEY: &str = "reservas.session";

fn config_from(url: Option<&str>, anon_key: Option<&str>) -> Result<GatewayConfig, GatewayError> {
    let present = |value: Option<&str>, var: &str| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| GatewayError::MissingConfig { var: var.to_owned() })
    };
    Ok(GatewayConfig::new(present(url, URL_VAR)?, present(anon_key, ANON_KEY_VAR)?))
}

/// Service config baked in at build time from `RESERVAS_URL` and
/// `RESERVAS_ANON_KEY`.
///
/// # Errors
///
/// Returns [`GatewayError::MissingConfig`] if either was unset when the
/// bundle was built.
pub fn config() -> Result<GatewayConfig, GatewayError> {
    config_from(option_env!("RESERVAS_URL"), option_env!("RESERVAS_ANON_KEY"))
}

fn gateway_for(token: Option<String>) -> Result<Gateway<FetchTransport>, GatewayError> {
    Ok(Gateway::new(config()?, FetchTransport).with_access_token(token))
}

/// Gateway acting as the user in `auth`, or anonymously when signed out.
///
/// # Errors
///
/// Returns [`GatewayError::MissingConfig`] when the bundle has no config.
pub fn gateway(auth: &AuthState) -> Result<Gateway<FetchTransport>, GatewayError> {
    gateway_for(auth.access_token())
}

/// Look up `is_admin` for the signed-in user. Never cached.
///
/// # Errors
///
/// [`GatewayError::NotSignedIn`] without a session, otherwise whatever the
/// lookup fails with ([`GatewayError::NotFound`] when there is no profile).
pub async fn check_admin(auth: &AuthState) -> Result<bool, GatewayError> {
    let user_id = auth.user().ok_or(GatewayError::NotSignedIn)?.id.clone();
    gateway(auth)?.is_admin(&user_id).await
}

/// What to do with a persisted session after trying to resume it.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Restored {
    /// Confirmed or refreshed; persist and sign in.
    Valid(Session),
    /// The service could not be asked; sign in with the stored copy and
    /// leave storage alone.
    Unverified(Session),
    /// The service rejected it; drop it from storage.
    Invalid,
}

fn settle_restore(stored: Session, outcome: Result<Session, GatewayError>) -> Restored {
    match outcome {
        Ok(session) => Restored::Valid(session),
        Err(e) if e.is_auth_rejection() => {
            log::warn!("auth: stored session rejected: {e}");
            Restored::Invalid
        }
        Err(e) => {
            log::warn!("auth: could not validate stored session: {e}");
            Restored::Unverified(stored)
        }
    }
}

/// Validate the persisted session, if any, refreshing it when its access
/// token has expired.
///
/// Only a session the service rejects is dropped from storage; a network
/// failure keeps the stored session in use.
pub async fn restore_session() -> Option<Session> {
    let stored: Session = storage::load_json(SESSION_KEY)?;
    let gateway = gateway_for(None).ok()?;
    let outcome = gateway.resume_session(stored.clone()).await;
    match settle_restore(stored, outcome) {
        Restored::Valid(session) => {
            storage::save_json(SESSION_KEY, &session);
            Some(session)
        }
        Restored::Unverified(session) => Some(session),
        Restored::Invalid => {
            storage::remove(SESSION_KEY);
            None
        }
    }
}

/// Replace `session` with a fresh one from its refresh token and persist it.
/// A rejected refresh token also drops the stored session.
///
/// # Errors
///
/// [`GatewayError::NotSignedIn`] when `session` has no refresh token,
/// otherwise the failure of the refresh grant.
pub async fn refresh(session: &Session) -> Result<Session, GatewayError> {
    let refresh_token = session.refresh_token.as_deref().ok_or(GatewayError::NotSignedIn)?;
    match gateway_for(None)?.refresh_session(refresh_token).await {
        Ok(fresh) => {
            storage::save_json(SESSION_KEY, &fresh);
            Ok(fresh)
        }
        Err(e) => {
            if e.is_auth_rejection() {
                storage::remove(SESSION_KEY);
            }
            Err(e)
        }
    }
}

/// Password sign-in; the session is persisted on success.
///
/// # Errors
///
/// Propagates the auth service's rejection or any transport failure.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, GatewayError> {
    let session = gateway_for(None)?.sign_in(email, password).await?;
    storage::save_json(SESSION_KEY, &session);
    Ok(session)
}

/// Create the account, then its profile row.
///
/// Returns the new session when the service signs the user in right away
/// (no email confirmation required); it is persisted in that case.
///
/// # Errors
///
/// Fails if either the sign-up or the profile insert fails. A failed
/// profile insert leaves the account in place.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<Option<Session>, GatewayError> {
    let outcome = gateway_for(None)?.sign_up(email, password).await?;
    let token = outcome.session.as_ref().map(|s| s.access_token.clone());
    let profile = NewProfile {
        id: outcome.user.id.clone(),
        name: name.to_owned(),
        email: Some(email.to_owned()),
        is_admin: false,
    };
    gateway_for(token)?.create_profile(&profile).await?;
    if let Some(session) = &outcome.session {
        storage::save_json(SESSION_KEY, session);
    }
    Ok(outcome.session)
}

/// End the session. Local state is cleared even if the remote call fails.
pub async fn sign_out(auth: &AuthState) {
    storage::remove(SESSION_KEY);
    let result = match gateway(auth) {
        Ok(gateway) => gateway.sign_out().await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        log::warn!("auth: remote sign-out failed: {e}");
    }
}

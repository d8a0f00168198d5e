//! Identity provider calls: sign-up, password sign-in, sign-out, session
//! validation and refresh, and admin user deletion.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;

use crate::error::GatewayError;
use crate::model::{AuthUser, Session};
use crate::query::{Method, RestRequest};
use crate::service::Gateway;
use crate::transport::Transport;

/// Result of a sign-up. `session` is present when the provider signs the
/// new account in immediately (email confirmation disabled).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user: AuthUser,
    pub session: Option<Session>,
}

/// Sign-up responses come in two shapes: a session envelope
/// (`{ access_token, user, .. }`) or the bare user object.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    user: Option<AuthUser>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl SignUpResponse {
    fn into_outcome(self) -> Result<SignUpOutcome, GatewayError> {
        let user = match (self.user, self.id) {
            (Some(user), _) => user,
            (None, Some(id)) => AuthUser { id, email: self.email },
            (None, None) => return Err(GatewayError::MissingUser),
        };
        let session = self.access_token.map(|access_token| Session {
            access_token,
            refresh_token: self.refresh_token,
            expires_in: self.expires_in,
            user: user.clone(),
        });
        Ok(SignUpOutcome { user, session })
    }
}

impl<T: Transport> Gateway<T> {
    /// Register `email` / `password` with the identity provider.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection (weak password, existing account) or
    /// [`GatewayError::MissingUser`] if the response names no user.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, GatewayError> {
        let request = RestRequest::new(Method::Post, self.config().auth_url("signup"))
            .json(serde_json::json!({ "email": email, "password": password }));
        let response = self.execute(request).await?;
        response.json::<SignUpResponse>()?.into_outcome()
    }

    /// Exchange email / password for a session.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection for bad credentials.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, GatewayError> {
        let request = RestRequest::new(Method::Post, self.config().auth_url("token"))
            .query("grant_type", "password")
            .json(serde_json::json!({ "email": email, "password": password }));
        let session: Session = self.execute(request).await?.json()?;
        tracing::info!(user_id = %session.user.id, "signed in");
        Ok(session)
    }

    /// Revoke the current session. Without a session there is nothing to
    /// revoke and no call is made.
    ///
    /// # Errors
    ///
    /// Returns the failure of the logout call.
    pub async fn sign_out(&self) -> Result<(), GatewayError> {
        if self.access_token().is_none() {
            return Ok(());
        }
        let request = RestRequest::new(Method::Post, self.config().auth_url("logout"));
        self.execute(request).await.map(|_| ())
    }

    /// The user owning the current session; used to validate a stored
    /// session before trusting it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotSignedIn`] without a session, otherwise the
    /// provider's rejection of an expired or revoked token.
    pub async fn current_user(&self) -> Result<AuthUser, GatewayError> {
        let access_token = self.access_token().ok_or(GatewayError::NotSignedIn)?;
        self.user_for(access_token).await
    }

    async fn user_for(&self, access_token: &str) -> Result<AuthUser, GatewayError> {
        let request = RestRequest::new(Method::Get, self.config().auth_url("user"));
        self.execute_as(request, access_token).await?.json()
    }

    /// Trade a refresh token for a new session.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection of a used or revoked refresh token
    /// (status 400), or any transport failure.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, GatewayError> {
        let request = RestRequest::new(Method::Post, self.config().auth_url("token"))
            .query("grant_type", "refresh_token")
            .json(serde_json::json!({ "refresh_token": refresh_token }));
        let session: Session = self
            .execute_as(request, &self.config().anon_key)
            .await?
            .json()?;
        tracing::info!(user_id = %session.user.id, "session refreshed");
        Ok(session)
    }

    /// Bring a persisted session back to life.
    ///
    /// The stored access token is checked first; if the provider rejects it
    /// and a refresh token is stored, the session is refreshed instead.
    ///
    /// # Errors
    ///
    /// An error for which [`GatewayError::is_auth_rejection`] holds means the
    /// stored session is dead. Anything else (offline, 5xx) says nothing
    /// about the session itself.
    pub async fn resume_session(&self, stored: Session) -> Result<Session, GatewayError> {
        match self.user_for(&stored.access_token).await {
            Ok(user) => Ok(Session { user, ..stored }),
            Err(e) if e.is_auth_rejection() => match stored.refresh_token.as_deref() {
                Some(refresh_token) => self.refresh_session(refresh_token).await,
                None => Err(e),
            },
            Err(e) => Err(e),
        }
    }

    /// Remove an auth user. Uses the service key when configured, otherwise
    /// the current session, which the provider rejects unless privileged.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection.
    pub async fn admin_delete_user(&self, user_id: &str) -> Result<(), GatewayError> {
        let request = RestRequest::new(Method::Delete, self.config().auth_url(&format!("admin/users/{user_id}")));
        match self.config().service_key.clone() {
            Some(service_key) => self.execute_as(request, &service_key).await.map(|_| ()),
            None => self.execute(request).await.map(|_| ()),
        }
    }
}

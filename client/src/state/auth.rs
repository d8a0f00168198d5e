//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the root as `RwSignal<AuthState>`. Route guards, the navbar,
//! and every page read it to decide redirects and to act as the signed-in
//! user when calling the gateway.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gateway::model::{AuthUser, Session};

/// Current session plus whether the stored session is still being restored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while a persisted session is validated.
    #[must_use]
    pub fn restoring() -> Self {
        Self { session: None, loading: true }
    }

    #[must_use]
    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|session| &session.user)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|session| session.access_token.clone())
    }
}

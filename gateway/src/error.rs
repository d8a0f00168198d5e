//! Error type shared by every gateway call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// PostgREST code for "single row requested, zero rows returned".
const NO_ROWS_CODE: &str = "PGRST116";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// A required configuration variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingConfig { var: String },

    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// A single-row lookup matched nothing.
    #[error("row not found")]
    NotFound,

    /// Sign-up succeeded but the response carried no user.
    #[error("sign-up response did not include a user")]
    MissingUser,

    /// The operation needs a signed-in session.
    #[error("not signed in")]
    NotSignedIn,

    /// No transport is available in this build (server-side render, tests).
    #[error("network access not available in this build")]
    Unavailable,
}

impl GatewayError {
    /// The provider refused the credentials themselves: an expired, revoked
    /// or malformed token. 400 covers the refresh grant's `invalid_grant`.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Status { status: 400 | 401 | 403, .. })
    }

    /// Map a failed response to an error, preferring the service's own
    /// message field over the raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();

        if parsed
            .as_ref()
            .and_then(|value| value.get("code"))
            .and_then(Value::as_str)
            == Some(NO_ROWS_CODE)
        {
            return Self::NotFound;
        }

        let message = parsed
            .as_ref()
            .and_then(|value| {
                ["message", "msg", "error_description", "error"]
                    .iter()
                    .find_map(|key| value.get(*key).and_then(Value::as_str))
            })
            .map_or_else(|| body.trim().to_owned(), ToOwned::to_owned);

        let message = if message.is_empty() { format!("HTTP {status}") } else { message };
        Self::Status { status, message }
    }
}

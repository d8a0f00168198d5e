//! Service configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::GatewayError;

pub const URL_VAR: &str = "RESERVAS_URL";
pub const ANON_KEY_VAR: &str = "RESERVAS_ANON_KEY";
pub const SERVICE_KEY_VAR: &str = "RESERVAS_SERVICE_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Project base URL, without a trailing slash.
    pub url: String,
    /// Public key sent as `apikey` on every request.
    pub anon_key: String,
    /// Privileged key used only for auth admin calls.
    pub service_key: Option<String>,
}

impl GatewayConfig {
    #[must_use]
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_owned();
        Self { url, anon_key: anon_key.into(), service_key: None }
    }

    #[must_use]
    pub fn with_service_key(mut self, service_key: Option<String>) -> Self {
        self.service_key = service_key.filter(|key| !key.trim().is_empty());
        self
    }

    /// Build config from environment variables.
    ///
    /// Required:
    /// - `RESERVAS_URL`
    /// - `RESERVAS_ANON_KEY`
    ///
    /// Optional:
    /// - `RESERVAS_SERVICE_KEY`: enables auth admin calls (user deletion)
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingConfig`] when a required variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, GatewayError> {
        let url = required_var(URL_VAR)?;
        let anon_key = required_var(ANON_KEY_VAR)?;
        let service_key = std::env::var(SERVICE_KEY_VAR).ok();
        Ok(Self::new(url, anon_key).with_service_key(service_key))
    }

    /// Endpoint under the auth API, e.g. `auth_url("token")`.
    #[must_use]
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    /// Endpoint for a table under the REST API.
    #[must_use]
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }
}

fn required_var(var: &str) -> Result<String, GatewayError> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| GatewayError::MissingConfig { var: var.to_owned() })
}

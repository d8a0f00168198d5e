//! The I/O seam between request building and the network.

use serde::de::DeserializeOwned;

use crate::error::GatewayError;
use crate::query::RestRequest;

/// Raw response as seen by the gateway: status plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestResponse {
    pub status: u16,
    pub body: String,
}

impl RestResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_str(&self.body).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Sends a [`RestRequest`] and returns whatever status came back.
///
/// Implementations report only failures to obtain a response; status
/// handling belongs to the caller. Futures are not required to be `Send`
/// so browser fetch futures qualify.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, GatewayError>;
}

//! # gateway
//!
//! Typed access to the hosted auth + table service that backs the
//! reservation app.
//!
//! DESIGN
//! ======
//! Requests are built as plain [`query::RestRequest`] values and handed to a
//! [`transport::Transport`]. The browser client sends them with `gloo-net`,
//! the CLI with `reqwest`, and tests with an in-memory recorder, so every
//! operation here is written once and exercised without a network.

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod transport;

mod auth;
mod service;

#[cfg(test)]
mod testing;

pub use auth::SignUpOutcome;
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use service::Gateway;
pub use transport::{RestResponse, Transport};

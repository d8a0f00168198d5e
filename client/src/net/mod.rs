//! Networking for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends gateway requests through the Fetch API, and `api`
//! builds per-call gateways from the auth context and owns session
//! persistence.

pub mod api;
pub mod transport;

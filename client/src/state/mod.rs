//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`, list loading, forms) so
//! components depend on small focused models. Everything here is plain data
//! with no signals or I/O, which keeps it testable off the browser.

pub mod auth;
pub mod forms;
pub mod list;
pub mod reservations;
pub mod resources;
pub mod toast;

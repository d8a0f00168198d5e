//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own list loading and mutations for one table each; the router wraps
//! every page except `login` and `register` in `PrivateRoute`.

pub mod home;
pub mod login;
pub mod register;
pub mod reservations;
pub mod resources;
pub mod users;

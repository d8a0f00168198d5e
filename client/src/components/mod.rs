//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome, dialogs, and the route guard while
//! reading/writing shared state from Leptos context providers.

pub mod button;
pub mod navbar;
pub mod private_route;
pub mod reservation_modal;
pub mod resource_modal;
pub mod toaster;
pub mod user_modal;

//! Administrator check policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar, the admin route guard, and the user-management page each look
//! up `is_admin` on their own, every time they render for a user; nothing is
//! cached. They share this policy but not its fallback: the navbar hides its
//! admin link when the lookup fails, the guard and the page redirect to the
//! dashboard.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use gateway::GatewayError;

pub const DASHBOARD_PATH: &str = "/dashboard";

/// What to do when the lookup fails or says "not an admin".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminFallback {
    Hide,
    Redirect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminDecision {
    Allow,
    Hide,
    Redirect(&'static str),
}

#[must_use]
pub fn admin_decision(result: &Result<bool, GatewayError>, fallback: AdminFallback) -> AdminDecision {
    match (result, fallback) {
        (Ok(true), _) => AdminDecision::Allow,
        (_, AdminFallback::Hide) => AdminDecision::Hide,
        (_, AdminFallback::Redirect) => AdminDecision::Redirect(DASHBOARD_PATH),
    }
}

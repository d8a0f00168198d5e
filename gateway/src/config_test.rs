use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches these variables.
unsafe fn clear_env() {
    unsafe {
        std::env::remove_var(URL_VAR);
        std::env::remove_var(ANON_KEY_VAR);
        std::env::remove_var(SERVICE_KEY_VAR);
    }
}

#[test]
fn new_trims_trailing_slash() {
    let config = GatewayConfig::new("https://demo.example.co/", "anon");
    assert_eq!(config.url, "https://demo.example.co");
    assert!(config.service_key.is_none());
}

#[test]
fn endpoint_helpers_join_paths() {
    let config = GatewayConfig::new("https://demo.example.co", "anon");
    assert_eq!(config.auth_url("token"), "https://demo.example.co/auth/v1/token");
    assert_eq!(config.auth_url("/admin/users/u1"), "https://demo.example.co/auth/v1/admin/users/u1");
    assert_eq!(config.rest_url("resources"), "https://demo.example.co/rest/v1/resources");
}

#[test]
fn with_service_key_ignores_empty() {
    let config = GatewayConfig::new("https://x", "anon").with_service_key(Some(String::new()));
    assert!(config.service_key.is_none());
}

#[test]
fn with_service_key_ignores_whitespace() {
    let config = GatewayConfig::new("https://x", "anon").with_service_key(Some("   ".into()));
    assert!(config.service_key.is_none());
}

#[test]
fn from_env_reads_all_vars() {
    let _guard = env_lock();
    unsafe {
        clear_env();
        std::env::set_var(URL_VAR, "https://demo.example.co/");
        std::env::set_var(ANON_KEY_VAR, "anon-key");
        std::env::set_var(SERVICE_KEY_VAR, "service-key");
    }

    let config = GatewayConfig::from_env().unwrap();
    assert_eq!(config.url, "https://demo.example.co");
    assert_eq!(config.anon_key, "anon-key");
    assert_eq!(config.service_key.as_deref(), Some("service-key"));

    unsafe { clear_env() };
}

#[test]
fn from_env_missing_url_is_error() {
    let _guard = env_lock();
    unsafe {
        clear_env();
        std::env::set_var(ANON_KEY_VAR, "anon-key");
    }

    assert_eq!(
        GatewayConfig::from_env(),
        Err(GatewayError::MissingConfig { var: URL_VAR.to_owned() })
    );

    unsafe { clear_env() };
}

#[test]
fn from_env_blank_anon_key_is_error() {
    let _guard = env_lock();
    unsafe {
        clear_env();
        std::env::set_var(URL_VAR, "https://demo.example.co");
        std::env::set_var(ANON_KEY_VAR, "   ");
    }

    assert_eq!(
        GatewayConfig::from_env(),
        Err(GatewayError::MissingConfig { var: ANON_KEY_VAR.to_owned() })
    );

    unsafe { clear_env() };
}

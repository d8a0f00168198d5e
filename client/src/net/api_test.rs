use super::*;
use gateway::model::AuthUser;

fn stored() -> Session {
    Session {
        access_token: "jwt-1".to_owned(),
        refresh_token: Some("refresh-1".to_owned()),
        expires_in: Some(3600),
        user: AuthUser { id: "u1".to_owned(), email: None },
    }
}

#[test]
fn config_from_trims_and_builds() {
    let config = config_from(Some(" https://demo.example.co/ "), Some("anon")).unwrap();
    assert_eq!(config.url, "https://demo.example.co");
    assert_eq!(config.anon_key, "anon");
    assert_eq!(config.service_key, None);
}

#[test]
fn config_from_reports_missing_url() {
    assert_eq!(
        config_from(None, Some("anon")),
        Err(GatewayError::MissingConfig { var: "RESERVAS_URL".into() })
    );
}

#[test]
fn config_from_treats_blank_key_as_missing() {
    assert_eq!(
        config_from(Some("https://demo.example.co"), Some("  ")),
        Err(GatewayError::MissingConfig { var: "RESERVAS_ANON_KEY".into() })
    );
}

#[tokio::test]
async fn check_admin_requires_a_session() {
    let result = check_admin(&AuthState { session: None, loading: false }).await;
    assert_eq!(result, Err(GatewayError::NotSignedIn));
}

#[tokio::test]
async fn restore_session_without_storage_is_none() {
    assert_eq!(restore_session().await, None);
}

#[test]
fn resumed_session_is_kept() {
    let fresh = Session { access_token: "jwt-2".to_owned(), ..stored() };
    assert_eq!(settle_restore(stored(), Ok(fresh.clone())), Restored::Valid(fresh));
}

#[test]
fn rejected_session_is_dropped() {
    let rejected = Err(GatewayError::Status { status: 401, message: "invalid JWT".into() });
    assert_eq!(settle_restore(stored(), rejected), Restored::Invalid);
    let revoked = Err(GatewayError::Status { status: 400, message: "Invalid Refresh Token".into() });
    assert_eq!(settle_restore(stored(), revoked), Restored::Invalid);
}

#[test]
fn unreachable_service_keeps_stored_session() {
    let offline = Err(GatewayError::Transport("offline".into()));
    assert_eq!(settle_restore(stored(), offline), Restored::Unverified(stored()));
    let down = Err(GatewayError::Status { status: 503, message: "unavailable".into() });
    assert_eq!(settle_restore(stored(), down), Restored::Unverified(stored()));
    assert_eq!(settle_restore(stored(), Err(GatewayError::Unavailable)), Restored::Unverified(stored()));
}

#[tokio::test]
async fn refresh_without_refresh_token_is_not_signed_in() {
    let session = Session { refresh_token: None, ..stored() };
    assert_eq!(refresh(&session).await, Err(GatewayError::NotSignedIn));
}

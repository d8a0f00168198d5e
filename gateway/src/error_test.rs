use super::*;

#[test]
fn from_response_prefers_message_field() {
    let err = GatewayError::from_response(400, r#"{"message":"duplicate key","code":"23505"}"#);
    assert_eq!(err, GatewayError::Status { status: 400, message: "duplicate key".into() });
}

#[test]
fn from_response_reads_auth_error_description() {
    let err = GatewayError::from_response(
        400,
        r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
    );
    assert_eq!(err, GatewayError::Status { status: 400, message: "Invalid login credentials".into() });
}

#[test]
fn from_response_reads_msg_field() {
    let err = GatewayError::from_response(422, r#"{"code":422,"msg":"User already registered"}"#);
    assert_eq!(err, GatewayError::Status { status: 422, message: "User already registered".into() });
}

#[test]
fn from_response_maps_no_rows_to_not_found() {
    let body = r#"{"code":"PGRST116","details":"The result contains 0 rows","message":"JSON object requested, multiple (or no) rows returned"}"#;
    assert_eq!(GatewayError::from_response(406, body), GatewayError::NotFound);
}

#[test]
fn from_response_falls_back_to_raw_body() {
    let err = GatewayError::from_response(502, "  bad gateway \n");
    assert_eq!(err, GatewayError::Status { status: 502, message: "bad gateway".into() });
}

#[test]
fn from_response_empty_body_uses_status() {
    let err = GatewayError::from_response(500, "");
    assert_eq!(err.to_string(), "HTTP 500 (status 500)");
}

#[test]
fn auth_rejection_covers_token_statuses_only() {
    for status in [400, 401, 403] {
        let err = GatewayError::Status { status, message: "invalid JWT".into() };
        assert!(err.is_auth_rejection(), "status {status}");
    }
    assert!(!GatewayError::Status { status: 503, message: "down".into() }.is_auth_rejection());
    assert!(!GatewayError::Transport("offline".into()).is_auth_rejection());
    assert!(!GatewayError::Unavailable.is_auth_rejection());
}

use super::*;
use serde_json::json;

fn config() -> GatewayConfig {
    GatewayConfig::new("https://demo.example.co", "anon")
}

fn pairs(request: &RestRequest) -> Vec<(&str, &str)> {
    request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

// =============================================================
// TableQuery
// =============================================================

#[test]
fn select_all_ordered_desc() {
    let request = TableQuery::select("resources", "*")
        .order("created_at", Direction::Desc)
        .into_request(&config());

    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "https://demo.example.co/rest/v1/resources");
    assert_eq!(pairs(&request), vec![("select", "*"), ("order", "created_at.desc")]);
    assert!(request.body.is_none());
    assert!(request.header_value("accept").is_none());
}

#[test]
fn select_single_with_filter() {
    let request = TableQuery::select("profiles", "is_admin")
        .eq("id", "u-1")
        .single()
        .into_request(&config());

    assert_eq!(pairs(&request), vec![("select", "is_admin"), ("id", "eq.u-1")]);
    assert_eq!(request.header_value("Accept"), Some(SINGLE_OBJECT_ACCEPT));
}

#[test]
fn select_with_embedded_relations() {
    let request = TableQuery::select("reservations", "*,resource:resources(*),user:profiles(*)")
        .order("start_time", Direction::Asc)
        .into_request(&config());

    assert_eq!(request.query_value("select"), Some("*,resource:resources(*),user:profiles(*)"));
    assert_eq!(request.query_value("order"), Some("start_time.asc"));
}

// =============================================================
// TableWrite
// =============================================================

#[test]
fn insert_wraps_single_row_in_array() {
    let request = TableWrite::insert("profiles", json!({ "id": "u1" })).into_request(&config());

    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body, Some(json!([{ "id": "u1" }])));
    assert_eq!(request.header_value("prefer"), Some(RETURN_REPRESENTATION));
    assert!(request.query.is_empty());
}

#[test]
fn insert_keeps_existing_array() {
    let request = TableWrite::insert("profiles", json!([{ "id": "a" }, { "id": "b" }])).into_request(&config());
    assert_eq!(request.body, Some(json!([{ "id": "a" }, { "id": "b" }])));
}

#[test]
fn update_filters_by_id() {
    let request = TableWrite::update("reservations", json!({ "status": "confirmed" }))
        .eq("id", "v1")
        .into_request(&config());

    assert_eq!(request.method, Method::Patch);
    assert_eq!(pairs(&request), vec![("id", "eq.v1")]);
    assert_eq!(request.body, Some(json!({ "status": "confirmed" })));
}

#[test]
fn delete_has_no_body_or_prefer() {
    let request = TableWrite::delete("profiles").eq("id", "u1").into_request(&config());

    assert_eq!(request.method, Method::Delete);
    assert!(request.body.is_none());
    assert!(request.header_value("Prefer").is_none());
    assert_eq!(request.query_value("id"), Some("eq.u1"));
}

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Patch.as_str(), "PATCH");
}

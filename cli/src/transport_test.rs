use super::*;
use serde_json::json;

fn built(request: &RestRequest) -> reqwest::Request {
    build(&reqwest::Client::new(), request).build().unwrap()
}

#[test]
fn maps_every_method() {
    assert_eq!(to_reqwest(Method::Get), reqwest::Method::GET);
    assert_eq!(to_reqwest(Method::Post), reqwest::Method::POST);
    assert_eq!(to_reqwest(Method::Patch), reqwest::Method::PATCH);
    assert_eq!(to_reqwest(Method::Delete), reqwest::Method::DELETE);
}

#[test]
fn encodes_query_pairs() {
    let request = RestRequest::new(Method::Get, "https://demo.example.co/rest/v1/reservations")
        .query("select", "*,resource:resources(*)")
        .query("order", "start_time.asc");
    let url = built(&request).url().clone();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("select".to_owned(), "*,resource:resources(*)".to_owned()),
            ("order".to_owned(), "start_time.asc".to_owned()),
        ]
    );
}

#[test]
fn copies_headers_and_json_body() {
    let request = RestRequest::new(Method::Post, "https://demo.example.co/rest/v1/resources")
        .header("apikey", "anon-key")
        .header("Prefer", "return=representation")
        .json(json!([{ "name": "Room A" }]));
    let built = built(&request);
    assert_eq!(built.method(), reqwest::Method::POST);
    assert_eq!(built.headers()["apikey"], "anon-key");
    assert_eq!(built.headers()["prefer"], "return=representation");
    assert_eq!(built.headers()["content-type"], "application/json");
    let body = built.body().and_then(reqwest::Body::as_bytes).unwrap();
    assert_eq!(serde_json::from_slice::<serde_json::Value>(body).unwrap(), json!([{ "name": "Room A" }]));
}

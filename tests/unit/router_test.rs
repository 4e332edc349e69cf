//! Tests for query-string routing
//!
//! Drives `server::router::route` directly, without sockets.

use serde_json::Value;
use tiny_http::Method;
use todobox::server::router::{RouteResponse, route};

use crate::common::{memory_db, seed, service};

fn json(response: &RouteResponse) -> Value {
    serde_json::from_str(&response.body).unwrap()
}

// =============================================================================
// ROUTING
// =============================================================================

#[test]
fn test_all_returns_envelope() {
    let conn = memory_db();
    let service = service(&conn);
    seed(&service, &[("a", None, None), ("b", None, None)]);

    let response = route(&service, &Method::Get, "/all");
    assert_eq!(response.status, 200);

    let body = json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["todos"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["todos"][0]["text"], "a");
}

#[test]
fn test_api_prefix_is_accepted() {
    let conn = memory_db();
    let service = service(&conn);

    let bare = route(&service, &Method::Get, "/all");
    let prefixed = route(&service, &Method::Get, "/api/all");
    assert_eq!(bare, prefixed);
}

#[test]
fn test_unknown_path_is_404() {
    let conn = memory_db();
    let service = service(&conn);

    let response = route(&service, &Method::Get, "/nope");
    assert_eq!(response.status, 404);
    let body = json(&response);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body["error"]["message"].as_str().unwrap().contains("/nope"));
}

#[test]
fn test_prefix_requires_separator() {
    let conn = memory_db();
    let service = service(&conn);

    assert_eq!(route(&service, &Method::Get, "/apiall").status, 404);
}

#[test]
fn test_non_get_is_405() {
    let conn = memory_db();
    let service = service(&conn);

    let response = route(&service, &Method::Post, "/add?todo=x");
    assert_eq!(response.status, 405);
    assert_eq!(json(&response)["error"]["code"], "METHOD_NOT_ALLOWED");
    // Nothing was created
    assert!(service.list_all().unwrap().is_empty());
}

// =============================================================================
// TODO ENDPOINTS
// =============================================================================

#[test]
fn test_add_then_by_id() {
    let conn = memory_db();
    let service = service(&conn);

    let added = route(
        &service,
        &Method::Get,
        "/add?todo=Buy%20milk&assignee=Alice&category=errands",
    );
    assert_eq!(added.status, 200);
    let id = json(&added)["data"]["id"].as_i64().unwrap();

    let fetched = json(&route(&service, &Method::Get, &format!("/by_id?id={id}")));
    let todo = &fetched["data"]["todo"];
    assert_eq!(todo["text"], "Buy milk");
    assert_eq!(todo["assignee"], "Alice");
    assert_eq!(todo["category"], "errands");
    assert_eq!(todo["completed"], false);
    assert!(todo["updated"].is_null());
}

#[test]
fn test_add_without_text_is_400() {
    let conn = memory_db();
    let service = service(&conn);

    let response = route(&service, &Method::Get, "/add?assignee=Alice");
    assert_eq!(response.status, 400);
    assert!(
        json(&response)["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid query")
    );
}

#[test]
fn test_add_empty_text_is_400() {
    let conn = memory_db();
    let service = service(&conn);

    let response = route(&service, &Method::Get, "/add?todo=");
    assert_eq!(response.status, 400);
    assert_eq!(json(&response)["error"]["code"], "BAD_REQUEST");
}

#[test]
fn test_non_numeric_id_is_400() {
    let conn = memory_db();
    let service = service(&conn);

    assert_eq!(route(&service, &Method::Get, "/by_id?id=abc").status, 400);
    assert_eq!(route(&service, &Method::Get, "/by_id").status, 400);
}

#[test]
fn test_missing_id_is_404() {
    let conn = memory_db();
    let service = service(&conn);

    let response = route(&service, &Method::Get, "/by_id?id=42");
    assert_eq!(response.status, 404);
    assert_eq!(json(&response)["error"]["message"], "todo 42 not found");
}

#[test]
fn test_filters() {
    let conn = memory_db();
    let service = service(&conn);
    seed(
        &service,
        &[
            ("a", Some("Alice"), Some("work")),
            ("b", Some("Bob"), Some("work")),
            ("c", Some("Alice"), Some("home")),
        ],
    );

    let work = json(&route(&service, &Method::Get, "/all_by_category?category=work"));
    assert_eq!(work["data"]["todos"].as_array().unwrap().len(), 2);

    let alice = json(&route(&service, &Method::Get, "/all_by_assignee?assignee=Alice"));
    let texts: Vec<&str> = alice["data"]["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["a", "c"]);

    let empty = json(&route(&service, &Method::Get, "/all_by_category"));
    assert_eq!(empty["data"]["todos"].as_array().unwrap().len(), 0);
}

#[test]
fn test_update_and_delete() {
    let conn = memory_db();
    let service = service(&conn);
    let ids = seed(&service, &[("a", None, None)]);
    let id = ids[0];

    let updated = json(&route(
        &service,
        &Method::Get,
        &format!("/update?id={id}&text=b&completed=true"),
    ));
    assert_eq!(updated["data"]["result"], "Success");

    let again = json(&route(&service, &Method::Get, &format!("/update?id={id}&todo=b")));
    assert_eq!(again["data"]["result"], "No change");

    let todo = service.get_by_id(id).unwrap();
    assert_eq!(todo.text, "b");
    assert!(todo.completed);

    let deleted = json(&route(&service, &Method::Get, &format!("/delete?id={id}")));
    assert_eq!(deleted["data"]["result"], "Success");

    assert_eq!(
        route(&service, &Method::Get, &format!("/delete?id={id}")).status,
        404
    );
}

#[test]
fn test_update_empty_values_are_no_change() {
    let conn = memory_db();
    let service = service(&conn);
    let ids = seed(&service, &[("Buy milk", Some("Alice"), None)]);
    let id = ids[0];

    for query in ["todo=", "text=", "assignee=", "todo=&assignee=&category="] {
        let response = route(&service, &Method::Get, &format!("/update?id={id}&{query}"));
        assert_eq!(response.status, 200, "{query}");
        assert_eq!(json(&response)["data"]["result"], "No change", "{query}");
    }

    let todo = service.get_by_id(id).unwrap();
    assert_eq!(todo.text, "Buy milk");
    assert_eq!(todo.assignee.as_deref(), Some("Alice"));
}

// =============================================================================
// GREETING ENDPOINTS
// =============================================================================

#[test]
fn test_hello() {
    let conn = memory_db();
    let service = service(&conn);

    let body = json(&route(&service, &Method::Get, "/hello?name=Adam"));
    assert_eq!(body["data"]["message"], "hello Adam");
}

#[test]
fn test_add_numbers() {
    let conn = memory_db();
    let service = service(&conn);

    let two = json(&route(&service, &Method::Get, "/add_numbers?num_a=1&num_b=2"));
    assert_eq!(two["data"]["message"], 3);

    let three = json(&route(
        &service,
        &Method::Get,
        "/api/add_numbers?num_a=1&num_b=2&num_c=-10",
    ));
    assert_eq!(three["data"]["message"], -7);

    let bad = route(&service, &Method::Get, "/add_numbers?num_a=one&num_b=2");
    assert_eq!(bad.status, 400);
}

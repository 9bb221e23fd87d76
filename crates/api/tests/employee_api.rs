//! HTTP-level integration tests for the employee endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use roster_db::repositories::InMemoryStore;
use serde_json::json;

fn alice() -> serde_json::Value {
    json!({
        "name": "Alice",
        "email": "a@x.com",
        "department": "Eng",
        "salary": 1000.0
    })
}

async fn create(store: &Arc<InMemoryStore>, body: serde_json::Value) -> i64 {
    let app = common::build_test_app(store.clone());
    let response = post_json(app, "/api/v1/employees", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_employee_returns_201_with_id() {
    let app = common::build_test_app(Arc::new(InMemoryStore::new()));
    let response = post_json(app, "/api/v1/employees", alice()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Alice");
    assert!(json["id"].is_number());
}

#[tokio::test]
async fn test_read_returns_created_fields() {
    let store = Arc::new(InMemoryStore::new());
    let id = create(&store, alice()).await;

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/v1/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["department"], "Eng");
    assert_eq!(json["salary"], 1000.0);
}

#[tokio::test]
async fn test_get_nonexistent_employee_returns_404() {
    let app = common::build_test_app(Arc::new(InMemoryStore::new()));
    let response = get(app, "/api/v1/employees/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Employee with id 999999 not found");
}

#[tokio::test]
async fn test_create_stores_unconstrained_fields_verbatim() {
    let store = Arc::new(InMemoryStore::new());
    let id = create(
        &store,
        json!({"name": "", "email": "alice", "department": "Eng", "salary": -5.0}),
    )
    .await;

    let app = common::build_test_app(store);
    let json = body_json(get(app, &format!("/api/v1/employees/{id}")).await).await;
    assert_eq!(json["name"], "");
    assert_eq!(json["email"], "alice");
    assert_eq!(json["salary"], -5.0);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let store = Arc::new(InMemoryStore::new());
    let id = create(&store, alice()).await;

    let app = common::build_test_app(store.clone());
    let response = put_json(
        app,
        &format!("/api/v1/employees/{id}"),
        json!({
            "name": "Alice Smith",
            "email": "alice@x.com",
            "department": "Research",
            "salary": 1500.0
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Alice Smith");
    assert_eq!(json["department"], "Research");

    let app = common::build_test_app(store);
    let json = body_json(get(app, &format!("/api/v1/employees/{id}")).await).await;
    assert_eq!(json["email"], "alice@x.com");
    assert_eq!(json["salary"], 1500.0);
}

#[tokio::test]
async fn test_update_nonexistent_returns_404_without_mutation() {
    let store = Arc::new(InMemoryStore::new());
    let id = create(&store, alice()).await;

    let app = common::build_test_app(store.clone());
    let response = put_json(
        app,
        &format!("/api/v1/employees/{}", id + 1),
        json!({"name": "Ghost", "email": "g@x.com", "department": "None", "salary": 0.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(store);
    let list = body_json(get(app, "/api/v1/employees").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Alice");
}

// ---------------------------------------------------------------------------
// Delete / list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_employee_returns_204_then_404() {
    let store = Arc::new(InMemoryStore::new());
    let id = create(&store, alice()).await;

    let app = common::build_test_app(store.clone());
    let response = delete(app, &format!("/api/v1/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/v1/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_returns_404() {
    let app = common::build_test_app(Arc::new(InMemoryStore::new()));
    let response = delete(app, "/api/v1/employees/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_returns_every_created_employee() {
    let store = Arc::new(InMemoryStore::new());
    let mut ids = HashSet::new();
    for name in ["P1", "P2", "P3"] {
        let id = create(
            &store,
            json!({"name": name, "email": "p@x.com", "department": "Eng", "salary": 10.0}),
        )
        .await;
        ids.insert(id);
    }

    let app = common::build_test_app(store);
    let response = get(app, "/api/v1/employees").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let listed: HashSet<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_list_empty_returns_empty_array() {
    let app = common::build_test_app(Arc::new(InMemoryStore::new()));
    let json = body_json(get(app, "/api/v1/employees").await).await;
    assert_eq!(json, json!([]));
}

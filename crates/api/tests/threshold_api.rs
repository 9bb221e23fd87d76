//! HTTP-level tests for the threshold endpoints, plus the path from a
//! threshold set over HTTP to a supervisor alert from the monitor.

mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use roster_db::repositories::InMemoryStore;
use roster_notify::{MonitorConfig, Notifier, NotifyError, ThresholdMonitor};
use serde_json::json;

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((destination.to_string(), text.to_string()));
        Ok(())
    }
}

async fn set_threshold(store: &Arc<InMemoryStore>, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(store.clone());
    let response = post_json(app, "/api/thresholds", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_threshold_returns_record_with_exceeded_flag() {
    let store = Arc::new(InMemoryStore::new());
    let json = set_threshold(
        &store,
        json!({"supervisor_slack_id": "U123", "employee_name": "Bob", "limit_amount": 100.0}),
    )
    .await;

    assert!(json["id"].is_number());
    assert_eq!(json["supervisor_slack_id"], "U123");
    assert_eq!(json["employee_name"], "Bob");
    assert_eq!(json["current_usage"], 0.0);
    assert_eq!(json["exceeded"], false);
}

#[tokio::test]
async fn reporting_usage_over_limit_marks_exceeded() {
    let store = Arc::new(InMemoryStore::new());
    let created = set_threshold(
        &store,
        json!({"supervisor_slack_id": "U123", "employee_name": "Bob", "limit_amount": 100.0}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(store.clone());
    let response = put_json(
        app,
        &format!("/api/thresholds/{id}/usage"),
        json!({"current_usage": 120.5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["exceeded"], true);

    let app = common::build_test_app(store);
    let json = body_json(get(app, &format!("/api/thresholds/{id}")).await).await;
    assert_eq!(json["current_usage"], 120.5);
}

#[tokio::test]
async fn usage_for_missing_threshold_returns_404() {
    let app = common::build_test_app(Arc::new(InMemoryStore::new()));
    let response = put_json(app, "/api/thresholds/7/usage", json!({"current_usage": 1.0})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn set_threshold_stores_fields_as_given() {
    let store = Arc::new(InMemoryStore::new());
    let created = set_threshold(
        &store,
        json!({"supervisor_slack_id": "", "employee_name": "Bob", "limit_amount": -1.0}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(store);
    let json = body_json(get(app, &format!("/api/thresholds/{id}")).await).await;
    assert_eq!(json["supervisor_slack_id"], "");
    assert_eq!(json["limit_amount"], -1.0);
    assert_eq!(json["exceeded"], true);
}

#[tokio::test]
async fn list_and_delete_thresholds() {
    let store = Arc::new(InMemoryStore::new());
    let first = set_threshold(
        &store,
        json!({"supervisor_slack_id": "U1", "employee_name": "Ann", "limit_amount": 10.0}),
    )
    .await;
    set_threshold(
        &store,
        json!({"supervisor_slack_id": "U2", "employee_name": "Ben", "limit_amount": 10.0}),
    )
    .await;

    let app = common::build_test_app(store.clone());
    let list = body_json(get(app, "/api/thresholds").await).await;
    assert_eq!(list.as_array().unwrap().len(), 2);

    let app = common::build_test_app(store.clone());
    let id = first["id"].as_i64().unwrap();
    let response = delete(app, &format!("/api/thresholds/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(store);
    let list = body_json(get(app, "/api/thresholds").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["employee_name"], "Ben");
}

// ---------------------------------------------------------------------------
// Monitor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn monitor_alerts_supervisor_of_threshold_set_over_http() {
    let store = Arc::new(InMemoryStore::new());
    set_threshold(
        &store,
        json!({
            "supervisor_slack_id": "U123",
            "employee_name": "Bob",
            "limit_amount": 100.0,
            "current_usage": 150.0
        }),
    )
    .await;
    set_threshold(
        &store,
        json!({
            "supervisor_slack_id": "U999",
            "employee_name": "Cat",
            "limit_amount": 100.0,
            "current_usage": 20.0
        }),
    )
    .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let monitor = ThresholdMonitor::new(store, notifier.clone(), MonitorConfig::default());
    let report = monitor.run_cycle().await.unwrap();

    assert_eq!(report.scanned, 2);
    assert_eq!(
        *notifier.sent.lock().unwrap(),
        vec![(
            "U123".to_string(),
            "Employee Bob exceeded the threshold!".to_string()
        )]
    );
}

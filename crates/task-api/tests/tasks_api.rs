//! Black-box tests for the task service: real router, in-memory store.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use unitask_infra::InMemoryTaskStore;
use unitask_task_api::{build_router, AppState};
use unitask_tasks::StatusPolicy;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(policy: StatusPolicy) -> Self {
        let app = build_router(AppState {
            store: Arc::new(InMemoryTaskStore::new()),
            policy,
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_task(client: &reqwest::Client, base_url: &str, body: serde_json::Value) -> i64 {
    let res = client
        .post(format!("{base_url}/"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let task: serde_json::Value = res.json().await.unwrap();
    task["id"].as_i64().unwrap()
}

async fn list_tasks(client: &reqwest::Client, base_url: &str) -> Vec<serde_json::Value> {
    let res = client.get(format!("{base_url}/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn create_forces_todo_even_when_caller_supplies_status() {
    let srv = TestServer::spawn(StatusPolicy::Permissive).await;
    let client = reqwest::Client::new();

    create_task(
        &client,
        &srv.base_url,
        json!({
            "title": "X",
            "deadline_date": "2024-01-01",
            "deadline_time": "10:00",
            "status": "DONE"
        }),
    )
    .await;

    let tasks = list_tasks(&client, &srv.base_url).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["status"], "TODO");
    assert_eq!(tasks[0]["deadline_time"], "10:00:00");
}

#[tokio::test]
async fn create_requires_title() {
    let srv = TestServer::spawn(StatusPolicy::Permissive).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/", srv.base_url))
        .json(&json!({ "title": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_orders_by_deadline_then_id() {
    let srv = TestServer::spawn(StatusPolicy::Permissive).await;
    let client = reqwest::Client::new();

    create_task(&client, &srv.base_url, json!({ "title": "late", "deadline_date": "2024-06-01" })).await;
    create_task(&client, &srv.base_url, json!({ "title": "early-a", "deadline_date": "2024-01-01" })).await;
    create_task(&client, &srv.base_url, json!({ "title": "early-b", "deadline_date": "2024-01-01" })).await;
    create_task(&client, &srv.base_url, json!({ "title": "no-deadline" })).await;

    let titles: Vec<_> = list_tasks(&client, &srv.base_url)
        .await
        .into_iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["early-a", "early-b", "late", "no-deadline"]);
}

#[tokio::test]
async fn update_replaces_fields_but_not_status() {
    let srv = TestServer::spawn(StatusPolicy::Permissive).await;
    let client = reqwest::Client::new();

    let id = create_task(&client, &srv.base_url, json!({ "title": "X" })).await;

    let res = client
        .put(format!("{}/{id}/status", srv.base_url))
        .json(&json!({ "status": "ON_PROGRESS" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .put(format!("{}/{id}", srv.base_url))
        .json(&json!({
            "title": "Y",
            "description": "new text",
            "category": "School",
            "deadline_date": "2024-02-02",
            "deadline_time": "09:30"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let tasks = list_tasks(&client, &srv.base_url).await;
    assert_eq!(tasks[0]["title"], "Y");
    assert_eq!(tasks[0]["category"], "School");
    assert_eq!(tasks[0]["status"], "ON_PROGRESS");
}

#[tokio::test]
async fn permissive_set_status_accepts_any_value_including_backward() {
    let srv = TestServer::spawn(StatusPolicy::Permissive).await;
    let client = reqwest::Client::new();

    let id = create_task(&client, &srv.base_url, json!({ "title": "X" })).await;

    for status in ["DONE", "TODO", "ON_PROGRESS"] {
        let res = client
            .put(format!("{}/{id}/status", srv.base_url))
            .json(&json!({ "status": status }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let tasks = list_tasks(&client, &srv.base_url).await;
        assert_eq!(tasks[0]["status"], status);
    }
}

#[tokio::test]
async fn unknown_status_value_rejected() {
    let srv = TestServer::spawn(StatusPolicy::Permissive).await;
    let client = reqwest::Client::new();

    let id = create_task(&client, &srv.base_url, json!({ "title": "X" })).await;

    let res = client
        .put(format!("{}/{id}/status", srv.base_url))
        .json(&json!({ "status": "ARCHIVED" }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn enforced_policy_blocks_backward_transitions() {
    let srv = TestServer::spawn(StatusPolicy::Enforced).await;
    let client = reqwest::Client::new();

    let id = create_task(&client, &srv.base_url, json!({ "title": "X" })).await;

    // TODO -> DONE is a legal shortcut.
    let res = client
        .put(format!("{}/{id}/status", srv.base_url))
        .json(&json!({ "status": "DONE" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // DONE is terminal.
    let res = client
        .put(format!("{}/{id}/status", srv.base_url))
        .json(&json!({ "status": "TODO" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Unknown ids are a 404 under Enforced (the current status must be read).
    let res = client
        .put(format!("{}/999/status", srv.base_url))
        .json(&json!({ "status": "DONE" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn delete_is_idempotent() {
    let srv = TestServer::spawn(StatusPolicy::Permissive).await;
    let client = reqwest::Client::new();

    let id = create_task(&client, &srv.base_url, json!({ "title": "X" })).await;

    for _ in 0..2 {
        let res = client
            .delete(format!("{}/{id}", srv.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
    let res = client
        .delete(format!("{}/424242", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    assert!(list_tasks(&client, &srv.base_url).await.is_empty());
}

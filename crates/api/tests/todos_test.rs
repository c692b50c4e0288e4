//! Route tests for the shared todo list.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;
use uuid::Uuid;

use common::{bare_request, json_request, send, test_router};
use finbook_db::entities::todos;

fn todo(text: &str, completed: bool) -> todos::Model {
    let at = "2024-03-01T00:00:00Z"
        .parse::<DateTime<Utc>>()
        .expect("Failed to parse timestamp")
        .into();
    todos::Model {
        id: Uuid::new_v4(),
        text: text.to_string(),
        completed,
        created_at: at,
        updated_at: at,
    }
}

#[tokio::test]
async fn test_todos_are_readable_without_a_token() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![todo("Buy milk", false), todo("Ship release", true)]])
        .into_connection();

    let (status, body) = send(test_router(db), bare_request("GET", "/todos")).await;

    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["text"], "Buy milk");
    assert_eq!(listed[1]["completed"], true);
}

#[tokio::test]
async fn test_create_todo_requires_text() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let (status, body) = send(
        test_router(db),
        json_request("POST", "/todos", &json!({ "completed": false })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["missing"], json!(["text"]));
}

#[tokio::test]
async fn test_create_todo_returns_created() {
    let stored = todo("Buy milk", false);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored]])
        .into_connection();

    let (status, body) = send(
        test_router(db),
        json_request("POST", "/todos", &json!({ "text": "Buy milk" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["text"], "Buy milk");
    assert_eq!(body["completed"], false);
}

#[tokio::test]
async fn test_toggle_merges_only_the_supplied_field() {
    let existing = todo("Buy milk", false);
    let toggled = todos::Model {
        completed: true,
        ..existing.clone()
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![existing.clone()]])
        .append_query_results([vec![toggled]])
        .into_connection();

    let (status, body) = send(
        test_router(db),
        json_request(
            "PUT",
            &format!("/todos/{}", existing.id),
            &json!({ "completed": true }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Buy milk");
    assert_eq!(body["completed"], true);
}

#[tokio::test]
async fn test_update_of_a_missing_todo_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<todos::Model>::new()])
        .into_connection();

    let (status, body) = send(
        test_router(db),
        json_request(
            "PUT",
            &format!("/todos/{}", Uuid::new_v4()),
            &json!({ "completed": true }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Todo not found");
}

#[tokio::test]
async fn test_delete_confirms_with_a_message() {
    let existing = todo("Buy milk", false);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![existing.clone()]])
        .append_exec_results([sea_orm::MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let (status, body) = send(
        test_router(db),
        bare_request("DELETE", &format!("/todos/{}", existing.id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo deleted");
}

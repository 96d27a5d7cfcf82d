//! HTTP-level integration tests for the `/employees` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn asha() -> serde_json::Value {
    json!({
        "name": "Asha",
        "email": "a@b.com",
        "position": "Eng",
        "salary": 50000,
        "mobn": 9876543210_i64,
        "address": "Pune",
    })
}

async fn list(pool: &PgPool) -> Vec<serde_json::Value> {
    let response = get(common::build_test_app(pool.clone()), "/employees").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

async fn create(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(common::build_test_app(pool.clone()), "/employees", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    list(pool).await[0]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_returns_empty_array(pool: PgPool) {
    assert!(list(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_newest_first(pool: PgPool) {
    let mut first = asha();
    first["name"] = json!("First");
    let mut second = asha();
    second["name"] = json!("Second");

    let first_id = create(&pool, first).await;
    let second_id = create(&pool, second).await;

    let rows = list(&pool).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], second_id);
    assert_eq!(rows[0]["name"], "Second");
    assert_eq!(rows[1]["id"], first_id);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_acknowledges_and_lists_row(pool: PgPool) {
    let response = post_json(common::build_test_app(pool.clone()), "/employees", asha()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "message": "Employee Added" }));

    let rows = list(&pool).await;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert!(row["id"].is_number());
    assert_eq!(row["name"], "Asha");
    assert_eq!(row["email"], "a@b.com");
    assert_eq!(row["position"], "Eng");
    assert_eq!(row["salary"], 50000.0);
    assert_eq!(row["mobn"], "9876543210");
    assert_eq!(row["address"], "Pune");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_accepts_form_strings(pool: PgPool) {
    let body = json!({
        "name": "Ravi",
        "email": "r@x.io",
        "position": "Ops",
        "salary": "42000",
        "mobn": "0201234567",
        "address": "Goa",
    });
    create(&pool, body).await;

    let row = &list(&pool).await[0];
    assert_eq!(row["salary"], 42000.0);
    assert_eq!(row["mobn"], "0201234567");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_any_field_missing_returns_400(pool: PgPool) {
    for field in ["name", "email", "position", "salary", "mobn", "address"] {
        let mut body = asha();
        body.as_object_mut().unwrap().remove(field);

        let response = post_json(common::build_test_app(pool.clone()), "/employees", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "missing {field}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "All fields required");
    }

    assert!(list(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_blank_or_non_numeric_salary_returns_400(pool: PgPool) {
    for salary in [json!(""), json!("abc"), json!(0), json!(null)] {
        let mut body = asha();
        body["salary"] = salary;

        let response = post_json(common::build_test_app(pool.clone()), "/employees", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    assert!(list(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_trims_padded_mobile(pool: PgPool) {
    let mut body = asha();
    body["mobn"] = json!(" 9876543210 ");

    create(&pool, body).await;
    assert_eq!(list(&pool).await[0]["mobn"], "9876543210");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_malformed_mobile_returns_400(pool: PgPool) {
    let mut body = asha();
    body["mobn"] = json!("not-a-number");

    let response = post_json(common::build_test_app(pool.clone()), "/employees", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Mobile number must contain only digits");

    assert!(list(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_invalid_json_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/employees",
        json!("not an object"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_all_fields(pool: PgPool) {
    let id = create(&pool, asha()).await;

    let replacement = json!({
        "name": "Asha K",
        "email": "asha.k@b.com",
        "position": "Lead",
        "salary": "65000",
        "mobn": "+919000000000",
        "address": "Mumbai",
    });
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/employees/{id}"),
        replacement,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Employee Updated");

    let rows = list(&pool).await;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["id"], id);
    assert_eq!(row["name"], "Asha K");
    assert_eq!(row["email"], "asha.k@b.com");
    assert_eq!(row["position"], "Lead");
    assert_eq!(row["salary"], 65000.0);
    assert_eq!(row["mobn"], "+919000000000");
    assert_eq!(row["address"], "Mumbai");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_id_succeeds_silently(pool: PgPool) {
    let id = create(&pool, asha()).await;
    let before = list(&pool).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/employees/{}", id + 1000),
        json!({ "name": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Employee Updated");

    assert_eq!(list(&pool).await, before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_does_not_require_fields(pool: PgPool) {
    let id = create(&pool, asha()).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/employees/{id}"),
        json!({ "name": "Only Name" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let row = &list(&pool).await[0];
    assert_eq!(row["name"], "Only Name");
    assert_eq!(row["email"], "");
    assert_eq!(row["salary"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_id_in_strict_mode_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_strict_test_app(pool),
        "/employees/999999",
        asha(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Employee with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_delete_round_trip(pool: PgPool) {
    let id = create(&pool, asha()).await;
    let mut other = asha();
    other["name"] = json!("Other");
    create(&pool, other).await;
    assert_eq!(list(&pool).await.len(), 2);

    let response = delete(common::build_test_app(pool.clone()), &format!("/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Employee Deleted");

    let rows = list(&pool).await;
    assert_eq!(rows.len(), 1);
    assert!(rows.iter().all(|row| row["id"] != id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_id_succeeds_silently(pool: PgPool) {
    create(&pool, asha()).await;

    let response = delete(common::build_test_app(pool.clone()), "/employees/424242").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(list(&pool).await.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_id_in_strict_mode_returns_404(pool: PgPool) {
    let response = delete(common::build_strict_test_app(pool), "/employees/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_is_rejected(pool: PgPool) {
    let response = delete(common::build_test_app(pool.clone()), "/employees/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");

    let response = put_json(common::build_test_app(pool), "/employees/abc", asha()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("abc"));
}

// ---------------------------------------------------------------------------
// Store failure
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_store_error_returns_500_with_driver_message(pool: PgPool) {
    sqlx::query("DROP TABLE employees")
        .execute(&pool)
        .await
        .unwrap();

    let response = get(common::build_test_app(pool), "/employees").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DATABASE_ERROR");
    assert!(json["error"].as_str().unwrap().contains("employees"));
}

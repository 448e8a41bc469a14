use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::Database;
use tower::ServiceExt;

use engine::Engine;
use migration::MigratorTrait;

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();
    server::router(Arc::new(engine))
}

fn process_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/orders/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn report_request() -> Request<Body> {
    Request::builder()
        .uri("/api/orders/report")
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn process_returns_batch_pool() {
    let app = app().await;

    let (status, body) = send(
        &app,
        process_request(r#"[{"bill_value": 10, "position_in_line": 1, "requested_lemonades": 2}]"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[10]");
}

#[tokio::test]
async fn rejected_batch_is_null() {
    let app = app().await;

    let (status, body) = send(
        &app,
        process_request(r#"[{"bill_value": 10, "position_in_line": 1, "requested_lemonades": 1}]"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "null");
}

#[tokio::test]
async fn invalid_bill_is_bad_request() {
    let app = app().await;

    let (status, body) = send(
        &app,
        process_request(r#"[{"bill_value": 7, "position_in_line": 1, "requested_lemonades": 1}]"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], 400);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Invalid bill value: 7")
    );
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app().await;

    let (status, body) = send(&app, process_request(r#"[{"bill_value": 5,"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], 400);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid input"));
}

#[tokio::test]
async fn empty_and_null_batches_are_null() {
    let app = app().await;

    for payload in ["[]", "null", "[null]"] {
        let (status, body) = send(&app, process_request(payload)).await;
        assert_eq!(status, StatusCode::OK, "payload {payload}");
        assert_eq!(body, "null", "payload {payload}");
    }

    let (status, body) = send(
        &app,
        process_request(
            r#"[{"bill_value": 5, "position_in_line": 1, "requested_lemonades": 1}, null]"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "null");

    let (_, report) = send(&app, report_request()).await;
    assert!(report.contains("Total Lemonades sold so far - 0\n"));
}

#[tokio::test]
async fn report_reflects_processed_batches() {
    let app = app().await;
    send(
        &app,
        process_request(
            r#"[{"bill_value": 20, "position_in_line": 1, "requested_lemonades": 4},
                {"bill_value": 10, "position_in_line": 2, "requested_lemonades": 2}]"#,
        ),
    )
    .await;

    let (status, body) = send(&app, report_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "Total Lemonades sold so far - 6\n\
         Total Profit Made - 30\n\
         Total 5 Bills Remaining - 0\n\
         Total 10 Bills Remaining - 1\n\
         Total 20 Bills Remaining - 1\n"
    );
}

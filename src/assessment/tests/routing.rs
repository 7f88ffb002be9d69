use super::common::*;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::router::score_answers_handler;
use crate::assessment::QuestionCatalog;

#[tokio::test]
async fn score_route_returns_scores_and_recommendation() {
    let router = router_with(small_catalog());

    let response = router
        .oneshot(json_post(
            "/api/v1/answers",
            r#"[{"questionId":1,"value":3},{"questionId":2,"value":5},{"questionId":1,"value":2}]"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!({ "scores": { "math": 5, "arts": 5 }, "recommendedArea": "math" })
    );
}

#[tokio::test]
async fn legacy_route_scores_direct_area_answers() {
    let router = router_with(small_catalog());

    let response = router
        .oneshot(json_post(
            "/respostas",
            r#"[{"area":"leadership","value":"7"},null,42]"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["scores"]["leadership"], json!(7));
    assert_eq!(payload["scores"]["math"], json!(0));
    assert_eq!(payload["recommendedArea"], json!("leadership"));
}

#[tokio::test]
async fn non_array_body_scores_as_empty_sheet() {
    let router = router_with(small_catalog());

    let response = router
        .oneshot(json_post("/api/v1/answers", r#"{"answers":[]}"#))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!({ "scores": { "math": 0, "arts": 0 }, "recommendedArea": "math" })
    );
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let router = router_with(small_catalog());

    let response = router
        .oneshot(json_post("/api/v1/answers", r#"[{"questionId":1,"#))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("invalid JSON body"));
}

#[tokio::test]
async fn handler_accepts_empty_body() {
    let response = score_answers_handler(State(Arc::new(small_catalog())), Bytes::new()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["recommendedArea"], json!("math"));
}

#[tokio::test]
async fn questions_route_lists_catalog() {
    let router = router_with(QuestionCatalog::standard());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/questions")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let questions = payload.as_array().expect("array payload");
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[0]["id"], json!(1));
    assert_eq!(questions[0]["area"], json!("exact-sciences"));
    assert!(questions[0]["prompt"].is_string());
}

#[tokio::test]
async fn areas_route_lists_distinct_areas() {
    let router = router_with(small_catalog());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/areas")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "areas": ["math", "arts"] }));
}

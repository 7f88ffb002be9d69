use std::sync::Arc;

use axum::http::Request;
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::assessment::{assessment_router, Answer, Question, QuestionCatalog};

pub(super) fn math_and_arts() -> Vec<Question> {
    vec![Question::new(1, "math"), Question::new(2, "arts")]
}

pub(super) fn answers(entries: Vec<Answer>) -> Vec<Option<Answer>> {
    entries.into_iter().map(Some).collect()
}

pub(super) fn small_catalog() -> QuestionCatalog {
    QuestionCatalog::new(math_and_arts()).expect("valid catalog")
}

pub(super) fn router_with(catalog: QuestionCatalog) -> Router {
    assessment_router(Arc::new(catalog))
}

pub(super) fn json_post(uri: &str, body: &'static str) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json body")
}

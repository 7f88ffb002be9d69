use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{debug, info, warn};

use super::catalog::QuestionCatalog;
use super::domain::answer_sheet_from_slice;
use super::engine::{calculate_result, ScoringErrorBody};

/// Router exposing answer scoring and the active questionnaire.
///
/// `/respostas` is the legacy path existing web clients post to.
pub fn assessment_router(catalog: Arc<QuestionCatalog>) -> Router {
    Router::new()
        .route("/api/v1/answers", post(score_answers_handler))
        .route("/respostas", post(score_answers_handler))
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/areas", get(areas_handler))
        .with_state(catalog)
}

pub(crate) async fn score_answers_handler(
    State(catalog): State<Arc<QuestionCatalog>>,
    body: Bytes,
) -> Response {
    let answers = match answer_sheet_from_slice(&body) {
        Ok(answers) => answers,
        Err(err) => {
            warn!(%err, "answer sheet is not valid JSON");
            let payload = json!({
                "error": format!("invalid JSON body: {err}"),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match calculate_result(Some(catalog.questions()), Some(answers.as_slice())) {
        Ok(result) => {
            debug!(scores = ?result.scores, "aggregated area scores");
            info!(
                answers = answers.len(),
                recommended_area = result.recommended_area.as_deref().unwrap_or("none"),
                "scored answer sheet"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!(%err, "rejected answer sheet");
            (StatusCode::BAD_REQUEST, Json(ScoringErrorBody::from(&err))).into_response()
        }
    }
}

pub(crate) async fn questions_handler(State(catalog): State<Arc<QuestionCatalog>>) -> Response {
    (StatusCode::OK, Json(catalog.as_ref())).into_response()
}

pub(crate) async fn areas_handler(State(catalog): State<Arc<QuestionCatalog>>) -> Response {
    (StatusCode::OK, Json(json!({ "areas": catalog.areas() }))).into_response()
}

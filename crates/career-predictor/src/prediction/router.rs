use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::input::PredictionRequest;
use super::scoring::CareerPredictor;

/// Router exposing the liveness probe and the prediction endpoint.
pub fn prediction_router(predictor: Arc<CareerPredictor>) -> Router {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/predict", post(predict_handler))
        .with_state(predictor)
}

pub(crate) async fn liveness_handler() -> Json<Value> {
    Json(json!({
        "status": "AI Service Running",
        "model_loaded": true,
    }))
}

// The body is read raw so that malformed JSON yields the `{"error": ...}`
// envelope rather than axum's plain-text extractor rejection.
pub(crate) async fn predict_handler(
    State(predictor): State<Arc<CareerPredictor>>,
    body: Bytes,
) -> Response {
    match PredictionRequest::from_slice(&body) {
        Ok(request) => {
            let result = predictor.predict(&request.answers);
            debug!(
                answers = request.answers.len(),
                domain = %result.domain,
                career = %result.career,
                "prediction served"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(error) => {
            let status = error.status_code();
            warn!(%status, %error, "prediction request rejected");
            let payload = json!({
                "error": error.to_string(),
            });
            (status, Json(payload)).into_response()
        }
    }
}

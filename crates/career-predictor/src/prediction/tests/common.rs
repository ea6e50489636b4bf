use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};

use crate::prediction::{prediction_router, CareerPredictor};

pub(super) fn predictor() -> Arc<CareerPredictor> {
    Arc::new(CareerPredictor::default())
}

pub(super) fn router() -> Router {
    prediction_router(predictor())
}

pub(super) fn software_engineer_payload() -> Value {
    json!({
        "answers": [
            { "category": "Realistic", "value": 5 },
            { "category": "Investigative", "value": 5 },
            { "category": "Artistic", "value": 2 },
            { "category": "Social", "value": 2 },
            { "category": "Enterprising", "value": 3 },
            { "category": "Conventional", "value": 4 }
        ]
    })
}

pub(super) fn designer_payload() -> Value {
    json!({
        "answers": [
            { "category": "Realistic", "value": 2 },
            { "category": "Investigative", "value": 3 },
            { "category": "Artistic", "value": 5 },
            { "category": "Social", "value": 5 },
            { "category": "Enterprising", "value": 2 },
            { "category": "Conventional", "value": 2 }
        ]
    })
}

pub(super) fn post_json(path: &str, body: &Value) -> Request<Body> {
    post_raw(path, serde_json::to_vec(body).expect("serialize payload"))
}

pub(super) fn post_raw(path: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

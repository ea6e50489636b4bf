use axum::http::StatusCode;
use serde_json::{Map, Value};

use super::domain::{AnswerEntry, RiasecCategory};

/// Failures while turning a `/predict` body into answers.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("No answers provided")]
    MissingAnswers,
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("request body must be a JSON object, found {found}")]
    BodyNotObject { found: &'static str },
    #[error("answers must be a list, found {found}")]
    AnswersNotList { found: &'static str },
    #[error("answer at index {index} must be an object, found {found}")]
    MalformedEntry { index: usize, found: &'static str },
}

impl PredictionError {
    /// Only a missing `answers` field is the caller's fault; every other
    /// failure surfaces as an internal error carrying its message.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PredictionError::MissingAnswers => StatusCode::BAD_REQUEST,
            PredictionError::MalformedBody(_)
            | PredictionError::BodyNotObject { .. }
            | PredictionError::AnswersNotList { .. }
            | PredictionError::MalformedEntry { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Decoded `/predict` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub answers: Vec<AnswerEntry>,
}

impl PredictionRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, PredictionError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(&value)
    }

    /// Reads `answers` from a JSON body. A missing or `null` field is rejected;
    /// an empty list is a valid (if uninformative) request.
    pub fn from_value(body: &Value) -> Result<Self, PredictionError> {
        let object = body.as_object().ok_or(PredictionError::BodyNotObject {
            found: json_kind(body),
        })?;

        let entries = match object.get("answers") {
            None | Some(Value::Null) => return Err(PredictionError::MissingAnswers),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(PredictionError::AnswersNotList {
                    found: json_kind(other),
                })
            }
        };

        let answers = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(fields) => Ok(decode_entry(fields)),
                other => Err(PredictionError::MalformedEntry {
                    index,
                    found: json_kind(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { answers })
    }
}

fn decode_entry(fields: &Map<String, Value>) -> AnswerEntry {
    let category = fields
        .get("category")
        .and_then(Value::as_str)
        .and_then(RiasecCategory::from_label);

    // Only `value` is read; callers sending `score` contribute nothing.
    let value = fields.get("value").map(coerce_value).unwrap_or(0);

    AnswerEntry { category, value }
}

fn coerce_value(raw: &Value) -> i64 {
    match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64))
            .unwrap_or(0),
        Value::String(text) => text.trim().parse::<i64>().unwrap_or(0),
        Value::Bool(flag) => i64::from(*flag),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

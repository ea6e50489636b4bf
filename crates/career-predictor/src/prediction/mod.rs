//! RIASEC quiz scoring and career recommendation.
//!
//! Despite the "model" wording callers use, there is nothing learned here: answers are
//! summed per category, the categories are ranked, and the two leaders select careers and
//! profile copy from a fixed catalog.

pub mod catalog;
pub mod domain;
pub mod input;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::CareerCatalog;
pub use domain::{AnswerEntry, PredictionResult, RiasecCategory, ScoreAggregate};
pub use input::{PredictionError, PredictionRequest};
pub use router::prediction_router;
pub use scoring::{CareerPredictor, BASE_CONFIDENCE, FALLBACK_CAREER};

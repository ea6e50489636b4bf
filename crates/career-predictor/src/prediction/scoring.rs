use super::catalog::CareerCatalog;
use super::domain::{AnswerEntry, PredictionResult, ScoreAggregate};

/// Reported for every prediction. Not derived from the score distribution.
pub const BASE_CONFIDENCE: f64 = 0.85;

/// Career reported when no recommendation could be drawn from the catalog.
pub const FALLBACK_CAREER: &str = "General Tech Role";

const PRIMARY_PICKS: usize = 2;
const SECONDARY_PICKS: usize = 1;

/// Stateless rule table mapping RIASEC answer totals to career suggestions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CareerPredictor {
    catalog: CareerCatalog,
}

impl CareerPredictor {
    pub fn new(catalog: CareerCatalog) -> Self {
        Self { catalog }
    }

    pub fn predict(&self, answers: &[AnswerEntry]) -> PredictionResult {
        let aggregate = ScoreAggregate::from_answers(answers);
        let [top_trait, secondary_trait] = aggregate.top_two();

        let primary_pool = self.catalog.careers(top_trait);
        let secondary_pool = self.catalog.careers(secondary_trait);

        let recommendations: Vec<String> = primary_pool
            .iter()
            .take(PRIMARY_PICKS)
            .chain(secondary_pool.iter().take(SECONDARY_PICKS))
            .map(|career| career.to_string())
            .collect();

        let career = recommendations
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_CAREER.to_string());

        let behavioral_profile = format!(
            "{} You also show traits of a {}.",
            self.catalog.profile(top_trait),
            secondary_trait
        );

        PredictionResult {
            career,
            confidence: BASE_CONFIDENCE,
            domain: top_trait,
            behavioral_profile,
            top_traits: [top_trait, secondary_trait],
            recommendations,
        }
    }
}

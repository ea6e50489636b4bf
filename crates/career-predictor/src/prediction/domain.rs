use serde::{Deserialize, Serialize};
use std::fmt;

/// RIASEC interest category used to bucket quiz answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiasecCategory {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecCategory {
    /// Canonical declaration order. Ties in the ranking resolve in this order.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Realistic,
            Self::Investigative,
            Self::Artistic,
            Self::Social,
            Self::Enterprising,
            Self::Conventional,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Investigative => "Investigative",
            Self::Artistic => "Artistic",
            Self::Social => "Social",
            Self::Enterprising => "Enterprising",
            Self::Conventional => "Conventional",
        }
    }

    /// Exact, case-sensitive match against the category labels.
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == raw)
    }

    const fn index(self) -> usize {
        match self {
            Self::Realistic => 0,
            Self::Investigative => 1,
            Self::Artistic => 2,
            Self::Social => 3,
            Self::Enterprising => 4,
            Self::Conventional => 5,
        }
    }
}

impl fmt::Display for RiasecCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single quiz answer. `category` is `None` when the caller sent a label
/// outside the RIASEC set; such answers are carried but never counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEntry {
    pub category: Option<RiasecCategory>,
    pub value: i64,
}

impl AnswerEntry {
    pub fn new(category: RiasecCategory, value: i64) -> Self {
        Self {
            category: Some(category),
            value,
        }
    }

    pub fn unrecognized(value: i64) -> Self {
        Self {
            category: None,
            value,
        }
    }
}

/// Per-category running totals for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreAggregate {
    totals: [i64; 6],
}

impl ScoreAggregate {
    pub fn from_answers<'a, I>(answers: I) -> Self
    where
        I: IntoIterator<Item = &'a AnswerEntry>,
    {
        let mut aggregate = Self::default();
        for answer in answers {
            if let Some(category) = answer.category {
                aggregate.add(category, answer.value);
            }
        }
        aggregate
    }

    pub fn add(&mut self, category: RiasecCategory, value: i64) {
        let slot = &mut self.totals[category.index()];
        *slot = slot.saturating_add(value);
    }

    pub fn total(&self, category: RiasecCategory) -> i64 {
        self.totals[category.index()]
    }

    /// Categories ordered by total, highest first. The sort is stable so equal
    /// totals keep canonical declaration order.
    pub fn ranked(&self) -> Vec<(RiasecCategory, i64)> {
        let mut ranked: Vec<(RiasecCategory, i64)> = RiasecCategory::ordered()
            .into_iter()
            .map(|category| (category, self.total(category)))
            .collect();
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked
    }

    /// Highest and second-highest categories.
    pub fn top_two(&self) -> [RiasecCategory; 2] {
        let ranked = self.ranked();
        [ranked[0].0, ranked[1].0]
    }
}

/// Prediction payload returned to callers of `/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub career: String,
    pub confidence: f64,
    pub domain: RiasecCategory,
    pub behavioral_profile: String,
    pub top_traits: [RiasecCategory; 2],
    pub recommendations: Vec<String>,
}

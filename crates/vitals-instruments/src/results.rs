use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitals_core::models::record::AnswerRecord;

use crate::bmi::BmiReading;
use crate::scoring::{RiskCategory, RiskLevel, Thresholds};

/// Overall tier over the sum of all four category scores.
pub const OVERALL_THRESHOLDS: Thresholds = Thresholds::new(10, 25);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryResult {
    pub category: RiskCategory,
    pub name: String,
    pub description: String,
    pub score: u32,
    pub max_score: u32,
    pub risk: RiskLevel,
    pub recommendations: Vec<String>,
}

impl CategoryResult {
    pub fn compute(category: RiskCategory, answers: &AnswerRecord) -> Self {
        let score = category.score(answers);
        Self {
            category,
            name: category.name().to_string(),
            description: category.description().to_string(),
            score,
            max_score: category.max_score(),
            risk: category.classify(score),
            recommendations: category
                .recommendations()
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }

    /// Score as a percentage of the category maximum, for progress bars.
    pub fn percent(&self) -> f64 {
        f64::from(self.score) / f64::from(self.max_score) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub action: String,
}

impl Recommendation {
    /// The fixed message shown for an overall tier.
    pub fn for_tier(tier: RiskLevel) -> Self {
        let (title, description, action) = match tier {
            RiskLevel::Low => (
                "Excellent Health Foundation",
                "Your assessment shows low risk across most categories. You're on the right track with your health management.",
                "Continue with regular check-ups and consider our wellness optimization programs to maintain your health.",
            ),
            RiskLevel::Moderate => (
                "Opportunities for Improvement",
                "Some areas show moderate risk levels. Early intervention now can significantly improve your long-term health outcomes.",
                "We recommend connecting with our healthcare specialists for a personalized prevention strategy.",
            ),
            RiskLevel::High => (
                "Immediate Medical Attention Recommended",
                "Your assessment indicates several risk factors that warrant prompt medical evaluation and intervention.",
                "Please consult with our medical team immediately for a comprehensive health evaluation and treatment plan.",
            ),
        };
        Self {
            title: title.to_string(),
            description: description.to_string(),
            action: action.to_string(),
        }
    }
}

/// Derived, immutable summary of a completed (or partial) questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultsRecord {
    pub categories: Vec<CategoryResult>,
    pub total_score: u32,
    pub overall_risk: RiskLevel,
    pub recommendation: Recommendation,
    pub bmi: Option<BmiReading>,
}

impl ResultsRecord {
    pub fn category(&self, category: RiskCategory) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.category == category)
    }
}

pub fn overall_tier(total_score: u32) -> RiskLevel {
    OVERALL_THRESHOLDS.classify(total_score)
}

/// Score every category and derive the overall tier and recommendation.
pub fn compute_results(answers: &AnswerRecord) -> ResultsRecord {
    let categories: Vec<CategoryResult> = RiskCategory::ALL
        .iter()
        .map(|c| CategoryResult::compute(*c, answers))
        .collect();
    let total_score = categories.iter().map(|c| c.score).sum();
    let overall_risk = overall_tier(total_score);

    tracing::debug!(
        total_score,
        overall = overall_risk.label(),
        "computed risk results"
    );

    ResultsRecord {
        categories,
        total_score,
        overall_risk,
        recommendation: Recommendation::for_tier(overall_risk),
        bmi: BmiReading::from_answers(answers),
    }
}

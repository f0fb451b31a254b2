//! Category risk scores.
//!
//! Every function is total over a partial record: a missing input adds
//! nothing to its score.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitals_core::keys::{self, choice};
use vitals_core::models::record::AnswerRecord;

use crate::bmi::bmi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

/// Inclusive upper bounds of the low and moderate tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Thresholds {
    pub low_max: u32,
    pub moderate_max: u32,
}

impl Thresholds {
    pub const fn new(low_max: u32, moderate_max: u32) -> Self {
        Self {
            low_max,
            moderate_max,
        }
    }

    pub fn classify(&self, score: u32) -> RiskLevel {
        if score <= self.low_max {
            RiskLevel::Low
        } else if score <= self.moderate_max {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Cardiovascular,
    Diabetes,
    MentalWellbeing,
    Kidney,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Cardiovascular,
        RiskCategory::Diabetes,
        RiskCategory::MentalWellbeing,
        RiskCategory::Kidney,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RiskCategory::Cardiovascular => "Cardiovascular Health",
            RiskCategory::Diabetes => "Diabetes Risk",
            RiskCategory::MentalWellbeing => "Mental Wellbeing",
            RiskCategory::Kidney => "Kidney Function",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskCategory::Cardiovascular => "Risk assessment for heart disease and stroke",
            RiskCategory::Diabetes => "Likelihood of developing type 2 diabetes",
            RiskCategory::MentalWellbeing => "Mental health and stress assessment",
            RiskCategory::Kidney => "Kidney health and function indicators",
        }
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskCategory::Cardiovascular => &[
                "Regular cardio exercise 150min/week",
                "Mediterranean diet",
                "Blood pressure monitoring",
                "Lipid panel every 2 years",
            ],
            RiskCategory::Diabetes => &[
                "Weight management",
                "Regular physical activity",
                "Balanced nutrition",
                "Annual glucose screening",
            ],
            RiskCategory::MentalWellbeing => &[
                "Stress management techniques",
                "Regular sleep schedule",
                "Social connections",
                "Professional counseling if needed",
            ],
            RiskCategory::Kidney => &[
                "Stay hydrated",
                "Limit sodium intake",
                "Blood pressure control",
                "Annual kidney function tests",
            ],
        }
    }

    pub fn max_score(&self) -> u32 {
        match self {
            RiskCategory::Cardiovascular => 20,
            RiskCategory::Diabetes => 5,
            RiskCategory::MentalWellbeing => 20,
            RiskCategory::Kidney => 10,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        match self {
            RiskCategory::Cardiovascular => Thresholds::new(5, 12),
            RiskCategory::Diabetes => Thresholds::new(1, 3),
            RiskCategory::MentalWellbeing => Thresholds::new(5, 12),
            RiskCategory::Kidney => Thresholds::new(2, 5),
        }
    }

    /// The clamped score for this category.
    pub fn score(&self, answers: &AnswerRecord) -> u32 {
        match self {
            RiskCategory::Cardiovascular => cardiovascular_score(answers),
            RiskCategory::Diabetes => diabetes_score(answers),
            RiskCategory::MentalWellbeing => mental_wellbeing_score(answers),
            RiskCategory::Kidney => kidney_score(answers),
        }
    }

    pub fn classify(&self, score: u32) -> RiskLevel {
        self.thresholds().classify(score)
    }
}

fn is_male(answers: &AnswerRecord) -> bool {
    answers.choice(keys::GENDER) == Some(choice::MALE)
}

fn at_least(answers: &AnswerRecord, key: &str, bound: f64) -> bool {
    answers.number(key).is_some_and(|v| v >= bound)
}

fn above(answers: &AnswerRecord, key: &str, bound: f64) -> bool {
    answers.number(key).is_some_and(|v| v > bound)
}

fn flag(answers: &AnswerRecord, key: &str) -> bool {
    answers.flag(key).unwrap_or(false)
}

/// Age and sex banded points: male 45+ → 2 up to 70+ → 11, female 50+ → 2
/// up to 70+ → 12.
fn age_points(age: f64, male: bool) -> u32 {
    const MALE: [(f64, u32); 6] = [(70.0, 11), (65.0, 10), (60.0, 8), (55.0, 6), (50.0, 4), (45.0, 2)];
    const FEMALE: [(f64, u32); 5] = [(70.0, 12), (65.0, 9), (60.0, 7), (55.0, 4), (50.0, 2)];

    let bands: &[(f64, u32)] = if male { &MALE } else { &FEMALE };
    bands
        .iter()
        .find(|(min_age, _)| age >= *min_age)
        .map_or(0, |(_, points)| *points)
}

/// Framingham-style points, clamped to 20. Scored only once both age and
/// sex are known; any sex other than male uses the female table.
pub fn cardiovascular_score(answers: &AnswerRecord) -> u32 {
    let Some(age) = answers.number(keys::AGE).filter(|a| *a != 0.0 && !a.is_nan()) else {
        return 0;
    };
    let Some(gender) = answers.choice(keys::GENDER).filter(|g| !g.is_empty()) else {
        return 0;
    };
    let male = gender == choice::MALE;

    let mut score = age_points(age, male);
    if answers.choice(keys::SMOKING_STATUS) == Some(choice::SMOKER_CURRENT) {
        score += if male { 4 } else { 3 };
    }
    if flag(answers, keys::DIABETES_HISTORY) {
        score += if male { 3 } else { 4 };
    }
    if above(answers, keys::TOTAL_CHOLESTEROL, 240.0) {
        score += 2;
    }
    if above(answers, keys::SYSTOLIC_BP, 140.0) {
        score += 2;
    }
    score.min(RiskCategory::Cardiovascular.max_score())
}

/// FINDRISC-style points, clamped to 5.
pub fn diabetes_score(answers: &AnswerRecord) -> u32 {
    let mut score = 0;
    if at_least(answers, keys::AGE, 45.0) {
        score += 1;
    }
    if flag(answers, keys::FAMILY_DIABETES) {
        score += 1;
    }
    if answers.choice(keys::PHYSICAL_ACTIVITY) == Some(choice::ACTIVITY_NONE) {
        score += 1;
    }
    if let (Some(weight), Some(height)) = (answers.number(keys::WEIGHT), answers.number(keys::HEIGHT))
        && let Some(bmi) = bmi(weight, height)
    {
        if bmi >= 30.0 {
            score += 2;
        } else if bmi >= 25.0 {
            score += 1;
        }
    }
    score.min(RiskCategory::Diabetes.max_score())
}

/// Combined PHQ-9 and GAD-7 totals divided by three, rounded, clamped to 20.
/// Free-text and unanswered items contribute 0.
pub fn mental_wellbeing_score(answers: &AnswerRecord) -> u32 {
    let phq9 = answers
        .scale(keys::PHQ9_RESPONSES)
        .map_or(0, |r| r.severity_total());
    let gad7 = answers
        .scale(keys::GAD7_RESPONSES)
        .map_or(0, |r| r.severity_total());
    let score = (f64::from(phq9 + gad7) / 3.0).round() as u32;
    score.min(RiskCategory::MentalWellbeing.max_score())
}

/// Kidney risk points, clamped to 10. Creatinine is compared with the male
/// limit (1.3 mg/dL) only for men; everyone else uses 1.1 mg/dL.
pub fn kidney_score(answers: &AnswerRecord) -> u32 {
    let mut score = 0;
    if at_least(answers, keys::AGE, 60.0) {
        score += 2;
    }
    if flag(answers, keys::DIABETES_HISTORY) {
        score += 3;
    }
    if above(answers, keys::SYSTOLIC_BP, 140.0) {
        score += 2;
    }
    let creatinine_limit = if is_male(answers) { 1.3 } else { 1.1 };
    if above(answers, keys::CREATININE, creatinine_limit) {
        score += 3;
    }
    score.min(RiskCategory::Kidney.max_score())
}

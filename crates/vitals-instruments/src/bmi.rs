use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitals_core::keys;
use vitals_core::models::record::AnswerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Body-mass index from weight in kilograms and height in centimetres.
/// Non-positive or non-finite inputs have no BMI.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiReading {
    pub fn new(weight_kg: f64, height_cm: f64) -> Option<Self> {
        bmi(weight_kg, height_cm).map(|value| Self {
            value,
            category: BmiCategory::from_bmi(value),
        })
    }

    /// Read weight and height from the answer record.
    pub fn from_answers(answers: &AnswerRecord) -> Option<Self> {
        Self::new(answers.number(keys::WEIGHT)?, answers.number(keys::HEIGHT)?)
    }

    /// The value rounded to one decimal place, as displayed.
    pub fn rounded(&self) -> f64 {
        (self.value * 10.0).round() / 10.0
    }

    /// e.g. `22.9 kg/m² (Normal weight)`
    pub fn display(&self) -> String {
        format!("{:.1} kg/m² ({})", self.value, self.category.label())
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerValue;
use super::scale::ScaleDescriptor;

/// One option of a single-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Bounds for a numeric input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericBounds {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// The closed set of input kinds a question can use. The configuration's
/// `type` field selects the variant; any other value fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    Number {
        #[serde(default)]
        validation: NumericBounds,
        #[serde(default)]
        step: Option<f64>,
        #[serde(default)]
        default_value: Option<f64>,
    },
    Radio {
        options: Vec<ChoiceOption>,
        #[serde(default)]
        default_value: Option<String>,
    },
    Checkbox {
        #[serde(default)]
        default_value: Option<bool>,
    },
    MentalHealthScale {
        scale: ScaleDescriptor,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDescriptor {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl QuestionDescriptor {
    /// The configured default, as it is written into a fresh record.
    pub fn default_answer(&self) -> Option<AnswerValue> {
        match &self.kind {
            QuestionKind::Number { default_value, .. } => {
                default_value.map(AnswerValue::Number)
            }
            QuestionKind::Radio { default_value, .. } => {
                default_value.clone().map(AnswerValue::Choice)
            }
            QuestionKind::Checkbox { default_value } => default_value.map(AnswerValue::Flag),
            QuestionKind::MentalHealthScale { .. } => None,
        }
    }

    pub fn scale(&self) -> Option<&ScaleDescriptor> {
        match &self.kind {
            QuestionKind::MentalHealthScale { scale } => Some(scale),
            _ => None,
        }
    }
}

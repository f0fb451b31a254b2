use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::scale::ScaleResponses;

/// A single typed answer held in the [`AnswerRecord`](super::record::AnswerRecord).
///
/// Serialized untagged so a saved record reads like the questionnaire
/// itself: `{"age": 68, "gender": "male", "diabetesHistory": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Number(f64),
    Choice(String),
    Flag(bool),
    Scale(ScaleResponses),
}

/// The semantic kind of an answer. A key keeps the kind of its first value
/// for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerKind {
    Number,
    Choice,
    Flag,
    Scale,
}

impl AnswerValue {
    pub fn kind(&self) -> AnswerKind {
        match self {
            AnswerValue::Number(_) => AnswerKind::Number,
            AnswerValue::Choice(_) => AnswerKind::Choice,
            AnswerValue::Flag(_) => AnswerKind::Flag,
            AnswerValue::Scale(_) => AnswerKind::Scale,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Choice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_scale(&self) -> Option<&ScaleResponses> {
        match self {
            AnswerValue::Scale(r) => Some(r),
            _ => None,
        }
    }

    /// Whether a stored value satisfies a required-field check.
    ///
    /// Scale answers must be non-empty with every slot answered (a custom
    /// free-text answer counts). Scalars are present unless they are an empty
    /// string.
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Scale(r) => !r.is_empty() && r.is_complete(),
            AnswerValue::Choice(s) => !s.is_empty(),
            AnswerValue::Number(_) | AnswerValue::Flag(_) => true,
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(v: f64) -> Self {
        AnswerValue::Number(v)
    }
}

impl From<bool> for AnswerValue {
    fn from(v: bool) -> Self {
        AnswerValue::Flag(v)
    }
}

impl From<&str> for AnswerValue {
    fn from(v: &str) -> Self {
        AnswerValue::Choice(v.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(v: String) -> Self {
        AnswerValue::Choice(v)
    }
}

impl From<ScaleResponses> for AnswerValue {
    fn from(v: ScaleResponses) -> Self {
        AnswerValue::Scale(v)
    }
}

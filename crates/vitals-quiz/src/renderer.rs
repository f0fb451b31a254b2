//! Question dispatch and input normalization.
//!
//! [`widget`] resolves a question to the display state of its input kind;
//! [`normalize`] turns raw presenter input into the value written to the
//! answer record. Both match exhaustively over [`QuestionKind`].

use vitals_core::models::answer::AnswerValue;
use vitals_core::models::question::{ChoiceOption, NumericBounds, QuestionDescriptor, QuestionKind};
use vitals_core::models::record::AnswerRecord;
use vitals_core::models::scale::{ScaleDescriptor, ScaleResponses};

use crate::error::QuizError;

/// Raw input as a presenter captures it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Text typed into a numeric field.
    Text(String),
    /// The value of the chosen single-choice option.
    Select(String),
    /// Checkbox state.
    Toggle(bool),
}

/// Display state for one question.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget<'a> {
    Number {
        question: &'a QuestionDescriptor,
        value: Option<f64>,
        bounds: NumericBounds,
        step: Option<f64>,
    },
    Radio {
        question: &'a QuestionDescriptor,
        options: &'a [ChoiceOption],
        /// The stored choice, else the configured default, else empty.
        selected: String,
    },
    Checkbox {
        question: &'a QuestionDescriptor,
        /// Absent answers show as unchecked.
        checked: bool,
    },
    Scale {
        question: &'a QuestionDescriptor,
        scale: &'a ScaleDescriptor,
        responses: Option<ScaleResponses>,
    },
}

impl Widget<'_> {
    pub fn question(&self) -> &QuestionDescriptor {
        match self {
            Widget::Number { question, .. }
            | Widget::Radio { question, .. }
            | Widget::Checkbox { question, .. }
            | Widget::Scale { question, .. } => question,
        }
    }
}

pub fn widget<'a>(question: &'a QuestionDescriptor, answers: &AnswerRecord) -> Widget<'a> {
    match &question.kind {
        QuestionKind::Number {
            validation, step, ..
        } => Widget::Number {
            question,
            value: answers.number(&question.id),
            bounds: *validation,
            step: *step,
        },
        QuestionKind::Radio {
            options,
            default_value,
        } => Widget::Radio {
            question,
            options,
            selected: answers
                .choice(&question.id)
                .map(str::to_string)
                .or_else(|| default_value.clone())
                .unwrap_or_default(),
        },
        QuestionKind::Checkbox { .. } => Widget::Checkbox {
            question,
            checked: answers.flag(&question.id).unwrap_or(false),
        },
        QuestionKind::MentalHealthScale { scale } => Widget::Scale {
            question,
            scale,
            responses: answers.scale(&question.id).cloned(),
        },
    }
}

/// Parse numeric text. Empty or unparseable text, and non-finite values,
/// yield no value so the stored answer is cleared rather than set to NaN.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert raw input for `question` into the value to store. `Ok(None)`
/// means "clear the field".
///
/// Scale questions take their input through the scale interview instead.
pub fn normalize(
    question: &QuestionDescriptor,
    input: RawInput,
) -> Result<Option<AnswerValue>, QuizError> {
    let mismatch = |expected: &'static str| QuizError::InputMismatch {
        question: question.id.clone(),
        expected,
    };

    match (&question.kind, input) {
        (QuestionKind::Number { .. }, RawInput::Text(text)) => {
            Ok(parse_number(&text).map(AnswerValue::Number))
        }
        (QuestionKind::Number { .. }, _) => Err(mismatch("numeric text")),

        (QuestionKind::Radio { options, .. }, RawInput::Select(value)) => {
            if options.iter().any(|o| o.value == value) {
                Ok(Some(AnswerValue::Choice(value)))
            } else {
                Err(QuizError::UnknownOption {
                    question: question.id.clone(),
                    value,
                })
            }
        }
        (QuestionKind::Radio { .. }, _) => Err(mismatch("an option selection")),

        (QuestionKind::Checkbox { .. }, RawInput::Toggle(checked)) => {
            Ok(Some(AnswerValue::Flag(checked)))
        }
        (QuestionKind::Checkbox { .. }, _) => Err(mismatch("a checkbox toggle")),

        (QuestionKind::MentalHealthScale { .. }, _) => Err(mismatch("scale interview")),
    }
}

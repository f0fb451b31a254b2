//! vitals-instruments
//!
//! Standardized screening scales and the risk scoring engine. Pure
//! computation over an answer record: no I/O, no navigation state.

pub mod bmi;
pub mod error;
pub mod instruments;
pub mod results;
pub mod rubric;
pub mod scoring;

use vitals_core::models::scale::{ScaleDescriptor, ScaleResponses, ScaleSlot};

use error::InstrumentError;
use rubric::{SeverityBand, ValidationError};

/// Trait implemented by each screening scale.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// The answer record key the responses are stored under.
    fn answer_key(&self) -> &str;

    /// Item prompts and the response options shared by every item.
    fn scale(&self) -> &ScaleDescriptor;

    /// Severity bands over the total score, lowest first.
    fn bands(&self) -> &[SeverityBand];

    /// Check a response array against this instrument's shape and options.
    fn validate_responses(&self, responses: &ScaleResponses) -> Vec<ValidationError> {
        let scale = self.scale();
        let mut errors = Vec::new();

        if responses.len() != scale.len() {
            errors.push(ValidationError {
                item: None,
                value: None,
                message: format!(
                    "{}: expected {} responses, found {}",
                    self.name(),
                    scale.len(),
                    responses.len()
                ),
            });
            return errors;
        }

        for (index, slot) in responses.slots().iter().enumerate() {
            if let ScaleSlot::Selected(value) = slot
                && scale.response(*value).is_none()
            {
                errors.push(ValidationError {
                    item: Some(index),
                    value: Some(*value),
                    message: format!(
                        "{}: item {} response {} is not one of the scale's options",
                        self.name(),
                        index + 1,
                        value
                    ),
                });
            }
        }
        errors
    }

    /// Like [`validate_responses`](Self::validate_responses), failing on the
    /// first problem.
    fn check(&self, responses: &ScaleResponses) -> Result<(), InstrumentError> {
        match self.validate_responses(responses).into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Sum of selected values. Free-text and unanswered items add nothing.
    fn total(&self, responses: &ScaleResponses) -> u32 {
        responses.severity_total()
    }

    /// The severity band a total falls in.
    fn severity(&self, total: u32) -> Option<&SeverityBand> {
        self.bands().iter().find(|b| b.contains(total))
    }

    /// Format responses as a short plain-text summary for reports.
    fn summarize(&self, responses: &ScaleResponses) -> String {
        let total = self.total(responses);
        let band = self
            .severity(total)
            .map(|b| b.label.as_str())
            .unwrap_or("unrated");
        format!(
            "{}: {} ({}), {} of {} items answered",
            self.name(),
            total,
            band,
            responses.answered_count(),
            self.scale().len()
        )
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

use thiserror::Error;

use crate::rubric::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("no screening instrument with id '{0}'")]
    UnknownInstrument(String),

    /// The first problem [`crate::Instrument::validate_responses`] reported.
    #[error("invalid screening responses: {0}")]
    Validation(#[from] ValidationError),
}

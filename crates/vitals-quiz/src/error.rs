use thiserror::Error;
use vitals_core::error::CoreError;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("question '{0}' is not on the current stage")]
    UnknownQuestion(String),

    #[error("'{value}' is not an option of question '{question}'")]
    UnknownOption { question: String, value: String },

    #[error("question '{question}' expects {expected} input")]
    InputMismatch {
        question: String,
        expected: &'static str,
    },
}

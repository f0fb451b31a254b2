use thiserror::Error;

use crate::models::answer::AnswerKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid stage configuration: {0}")]
    InvalidConfig(String),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("answer '{key}' holds a {expected:?} value, refusing {found:?}")]
    KindMismatch {
        key: String,
        expected: AnswerKind,
        found: AnswerKind,
    },
}

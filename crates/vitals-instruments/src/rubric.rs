use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// An inclusive band of total scores with a clinical label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub label: String,
    pub min: u32,
    pub max: u32,
}

impl SeverityBand {
    pub fn new(label: &str, min: u32, max: u32) -> Self {
        Self {
            label: label.to_string(),
            min,
            max,
        }
    }

    pub fn contains(&self, total: u32) -> bool {
        (self.min..=self.max).contains(&total)
    }
}

/// Response options shared by PHQ-9 and GAD-7.
pub const FREQUENCY_OPTIONS: [(u8, &str); 4] = [
    (0, "Not at all"),
    (1, "Several days"),
    (2, "More than half the days"),
    (3, "Nearly every day"),
];

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    /// Zero-based item index, when the problem is with one item.
    pub item: Option<usize>,
    pub value: Option<u8>,
    pub message: String,
}

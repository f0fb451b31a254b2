pub mod gad7;
pub mod phq9;

use vitals_core::models::scale::{ResponseOption, ScaleDescriptor};

use crate::rubric::FREQUENCY_OPTIONS;

pub(crate) fn frequency_scale(name: &str, items: &[&str]) -> ScaleDescriptor {
    ScaleDescriptor {
        name: name.to_string(),
        questions: items.iter().map(|q| q.to_string()).collect(),
        responses: FREQUENCY_OPTIONS
            .iter()
            .map(|(value, label)| ResponseOption {
                value: *value,
                label: label.to_string(),
            })
            .collect(),
    }
}

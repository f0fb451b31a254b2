use tracing::debug;
use vitals_core::models::record::AnswerRecord;
use vitals_core::models::stage::StageDescriptor;

/// Required fields of `stage` that are not yet answered, in declaration order.
///
/// A scale answer is valid once it is non-empty with no unanswered slot;
/// free-text slots count as answered. A scalar is valid unless it is absent
/// or an empty string.
pub fn missing_fields<'a>(stage: &'a StageDescriptor, answers: &AnswerRecord) -> Vec<&'a str> {
    stage
        .required
        .iter()
        .filter(|field| {
            let valid = answers.get(field).is_some_and(|v| v.is_answered());
            debug!(stage = %stage.id, field = %field, valid, "required field check");
            !valid
        })
        .map(String::as_str)
        .collect()
}

/// Whether forward navigation out of `stage` is permitted. Pure; a stage
/// without required fields always passes.
pub fn can_advance(stage: &StageDescriptor, answers: &AnswerRecord) -> bool {
    if stage.required.is_empty() {
        return true;
    }
    missing_fields(stage, answers).is_empty()
}

use vitals_core::config::QuizConfig;
use vitals_core::models::answer::AnswerValue;
use vitals_core::models::record::AnswerRecord;
use vitals_core::models::scale::ScaleResponses;
use vitals_core::models::stage::StageDescriptor;
use vitals_quiz::validator::{can_advance, missing_fields};

fn stage(id: &str) -> StageDescriptor {
    QuizConfig::builtin().unwrap().stage_by_id(id).unwrap().clone()
}

fn scale(raw: &[i32]) -> AnswerValue {
    AnswerValue::Scale(ScaleResponses::from_sentinels(raw))
}

#[test]
fn stage_without_required_fields_always_passes() {
    let kidney = stage("kidney");
    assert!(kidney.required.is_empty());
    assert!(can_advance(&kidney, &AnswerRecord::new()));
}

#[test]
fn scalar_fields_must_be_present_and_non_empty() {
    let basic = stage("basic");
    let mut answers = AnswerRecord::new();
    assert_eq!(missing_fields(&basic, &answers), ["age", "gender"]);

    answers.set("age", Some(40.0.into())).unwrap();
    answers.set("gender", Some("".into())).unwrap();
    assert_eq!(missing_fields(&basic, &answers), ["gender"]);
    assert!(!can_advance(&basic, &answers));

    answers.set("gender", Some("female".into())).unwrap();
    assert!(can_advance(&basic, &answers));
}

#[test]
fn scale_fields_reject_unanswered_slots() {
    let mental = stage("mental");
    let mut answers: AnswerRecord = [
        ("phq9Responses", scale(&[0, 1, 2, 3, 0, 1, 2, 3, -1])),
        ("gad7Responses", scale(&[0; 7])),
    ]
    .into_iter()
    .collect();
    assert_eq!(missing_fields(&mental, &answers), ["phq9Responses"]);

    answers
        .set("phq9Responses", Some(scale(&[0, 1, 2, 3, 0, 1, 2, 3, -2])))
        .unwrap();
    assert!(can_advance(&mental, &answers));
}

#[test]
fn all_custom_scale_counts_as_answered() {
    let mental = stage("mental");
    let answers: AnswerRecord = [
        ("phq9Responses", scale(&[-2; 9])),
        ("gad7Responses", scale(&[-2; 7])),
    ]
    .into_iter()
    .collect();
    assert!(can_advance(&mental, &answers));
}

#[test]
fn empty_scale_array_fails() {
    let mental = stage("mental");
    let answers: AnswerRecord = [
        ("phq9Responses", scale(&[])),
        ("gad7Responses", scale(&[0; 7])),
    ]
    .into_iter()
    .collect();
    assert!(!can_advance(&mental, &answers));
}

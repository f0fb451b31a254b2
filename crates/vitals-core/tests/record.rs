use vitals_core::error::CoreError;
use vitals_core::models::answer::{AnswerKind, AnswerValue};
use vitals_core::models::record::{AnswerRecord, Update};
use vitals_core::models::scale::{ScaleResponses, ScaleSlot};

#[test]
fn set_is_idempotent() {
    let mut record = AnswerRecord::new();
    assert_eq!(record.set("age", Some(42.0.into())).unwrap(), Update::Changed);
    assert_eq!(record.set("age", Some(42.0.into())).unwrap(), Update::Unchanged);
    assert_eq!(record.number("age"), Some(42.0));
}

#[test]
fn kind_is_fixed_after_first_write() {
    let mut record = AnswerRecord::new();
    record.set("gender", Some("male".into())).unwrap();

    let err = record.set("gender", Some(true.into())).unwrap_err();
    assert!(matches!(
        err,
        CoreError::KindMismatch {
            expected: AnswerKind::Choice,
            found: AnswerKind::Flag,
            ..
        }
    ));
    assert_eq!(record.choice("gender"), Some("male"));
}

#[test]
fn clearing_keeps_the_kind_lock() {
    let mut record = AnswerRecord::new();
    record.set("weight", Some(70.0.into())).unwrap();
    assert_eq!(record.set("weight", None).unwrap(), Update::Changed);
    assert_eq!(record.set("weight", None).unwrap(), Update::Unchanged);
    assert!(!record.contains("weight"));

    assert!(record.set("weight", Some("heavy".into())).is_err());
    assert!(record.set("weight", Some(71.5.into())).is_ok());
}

#[test]
fn typed_getters_ignore_other_kinds() {
    let record: AnswerRecord = [
        ("age", AnswerValue::Number(50.0)),
        ("diabetesHistory", AnswerValue::Flag(true)),
    ]
    .into_iter()
    .collect();

    assert_eq!(record.flag("diabetesHistory"), Some(true));
    assert_eq!(record.choice("age"), None);
    assert_eq!(record.scale("age"), None);
}

#[test]
fn json_round_trip_is_flat() {
    let json = r#"{
        "age": 68,
        "gender": "male",
        "diabetesHistory": true,
        "phq9Responses": ["unanswered", {"selected": 2}, {"custom": "some days"}]
    }"#;
    let record: AnswerRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.number("age"), Some(68.0));
    assert_eq!(record.choice("gender"), Some("male"));
    assert_eq!(
        record.scale("phq9Responses").unwrap().slots(),
        [
            ScaleSlot::Unanswered,
            ScaleSlot::Selected(2),
            ScaleSlot::Custom("some days".to_string()),
        ]
    );

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["gender"], "male");
    assert_eq!(value["phq9Responses"][1]["selected"], 2);

    // Loaded keys are kind-locked too.
    let mut record = record;
    assert!(record.set("age", Some("old".into())).is_err());
}

#[test]
fn sentinel_arrays_load_as_scale_answers() {
    let json = r#"{
        "age": 50,
        "phq9Responses": [0, 1, 2, -1, -2, 3, 3, 3, 3],
        "gad7Responses": [0, {"selected": 1}, "unanswered", 0, 0, 0, 0]
    }"#;
    let record: AnswerRecord = serde_json::from_str(json).unwrap();

    let phq9 = record.scale("phq9Responses").unwrap();
    assert_eq!(phq9.len(), 9);
    assert_eq!(phq9.get(3), Some(&ScaleSlot::Unanswered));
    assert_eq!(phq9.get(4), Some(&ScaleSlot::Custom(String::new())));
    assert_eq!(phq9.to_sentinels(), [0, 1, 2, -1, -2, 3, 3, 3, 3]);
    assert_eq!(phq9.severity_total(), 15);

    let gad7 = record.scale("gad7Responses").unwrap();
    assert_eq!(gad7.get(1), Some(&ScaleSlot::Selected(1)));
    assert_eq!(gad7.get(2), Some(&ScaleSlot::Unanswered));
    assert_eq!(record.number("age"), Some(50.0));
}

#[test]
fn answered_checks() {
    assert!(!AnswerValue::Choice(String::new()).is_answered());
    assert!(AnswerValue::Flag(false).is_answered());
    assert!(AnswerValue::Number(0.0).is_answered());
    assert!(!AnswerValue::Scale(ScaleResponses::default()).is_answered());
    assert!(!AnswerValue::Scale(ScaleResponses::unanswered(3)).is_answered());
}

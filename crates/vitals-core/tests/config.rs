use vitals_core::config::{CURRENT_VERSION, QuizConfig};
use vitals_core::error::CoreError;
use vitals_core::models::question::QuestionKind;
use vitals_core::models::stage::{Layout, SpecialComponent, StageIcon};

#[test]
fn builtin_config_loads() {
    let config = QuizConfig::builtin().unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);

    let ids: Vec<_> = config.stages.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        ["basic", "cardiovascular", "diabetes", "mental", "kidney", "results"]
    );
    assert!(config.stages.last().unwrap().is_results());
}

#[test]
fn builtin_mental_stage_uses_combined_scales() {
    let config = QuizConfig::builtin().unwrap();
    let mental = config.stage_by_id("mental").unwrap();
    assert_eq!(mental.layout, Layout::Special);
    assert_eq!(mental.custom_component, Some(SpecialComponent::CombinedScales));

    let lengths: Vec<_> = mental
        .scale_questions()
        .map(|q| q.scale().unwrap().len())
        .collect();
    assert_eq!(lengths, [9, 7]);
}

#[test]
fn unknown_question_type_is_rejected() {
    let doc = r#"{
        "config_version": 1,
        "stages": [{
            "id": "basic", "title": "Basic", "layout": "vertical",
            "questions": [{ "id": "age", "type": "slider", "label": "Age" }]
        }]
    }"#;
    assert!(matches!(
        QuizConfig::from_json_str(doc),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn unknown_icon_is_rejected_and_missing_icon_defaults() {
    let bad = r#"{
        "config_version": 1,
        "stages": [{ "id": "a", "title": "A", "icon": "Rocket", "layout": "vertical" }]
    }"#;
    assert!(QuizConfig::from_json_str(bad).is_err());

    let missing = r#"{
        "config_version": 1,
        "stages": [{ "id": "a", "title": "A", "layout": "vertical" }]
    }"#;
    let config = QuizConfig::from_json_str(missing).unwrap();
    assert_eq!(config.stages[0].icon, StageIcon::User);
}

#[test]
fn legacy_validation_map_is_migrated() {
    let doc = r#"{
        "stages": [
            {
                "id": "basic", "title": "Basic", "layout": "vertical",
                "questions": [
                    { "id": "age", "type": "number", "label": "Age" },
                    { "id": "gender", "type": "radio", "label": "Sex",
                      "options": [{ "value": "male", "label": "Male" }] }
                ]
            },
            { "id": "results", "title": "Results", "layout": "results",
              "custom_component": "QuizResults" }
        ],
        "validation": { "basic": ["age", "gender"] }
    }"#;

    let config = QuizConfig::from_json_str(doc).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.stages[0].required, ["age", "gender"]);
    assert!(config.stages[1].required.is_empty());
    assert_eq!(
        config.stages[1].custom_component,
        Some(SpecialComponent::QuizResults)
    );
}

#[test]
fn newer_version_is_refused() {
    let doc = r#"{ "config_version": 99, "stages": [] }"#;
    assert!(matches!(
        QuizConfig::from_json_str(doc),
        Err(CoreError::UnsupportedVersion { found: 99, .. })
    ));
}

#[test]
fn version_beyond_u32_is_refused_not_wrapped() {
    let doc = r#"{ "config_version": 4294967297, "stages": [] }"#;
    assert!(matches!(
        QuizConfig::from_json_str(doc),
        Err(CoreError::UnsupportedVersion { found: 4294967297, .. })
    ));
}

#[test]
fn required_field_must_be_asked_by_its_stage() {
    let doc = r#"{
        "config_version": 1,
        "stages": [{
            "id": "basic", "title": "Basic", "layout": "vertical",
            "questions": [{ "id": "age", "type": "number", "label": "Age" }],
            "required": ["weight"]
        }]
    }"#;
    let err = QuizConfig::from_json_str(doc).unwrap_err();
    assert!(err.to_string().contains("weight"));
}

#[test]
fn radio_default_must_be_an_option() {
    let doc = r#"{
        "config_version": 1,
        "stages": [{
            "id": "basic", "title": "Basic", "layout": "vertical",
            "questions": [{
                "id": "smokingStatus", "type": "radio", "label": "Smoking",
                "options": [{ "value": "never", "label": "Never" }],
                "default_value": "sometimes"
            }]
        }]
    }"#;
    assert!(matches!(
        QuizConfig::from_json_str(doc),
        Err(CoreError::InvalidConfig(_))
    ));
}

#[test]
fn results_stage_must_be_last() {
    let doc = r#"{
        "config_version": 1,
        "stages": [
            { "id": "results", "title": "Results", "layout": "results" },
            { "id": "basic", "title": "Basic", "layout": "vertical" }
        ]
    }"#;
    assert!(QuizConfig::from_json_str(doc).is_err());
}

#[test]
fn numeric_bounds_are_parsed() {
    let config = QuizConfig::builtin().unwrap();
    let age = config.stages[0].question("age").unwrap();
    match &age.kind {
        QuestionKind::Number { validation, .. } => {
            assert_eq!(validation.min, Some(18.0));
            assert_eq!(validation.max, Some(120.0));
        }
        other => panic!("expected numeric question, got {other:?}"),
    }
}

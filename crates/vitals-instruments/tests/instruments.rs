use vitals_core::models::scale::ScaleResponses;
use vitals_instruments::error::InstrumentError;
use vitals_instruments::{all_instruments, get_instrument};

#[test]
fn registry_lists_both_scales() {
    let ids: Vec<_> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, ["phq9", "gad7"]);
    assert!(matches!(
        get_instrument("cars2"),
        Err(InstrumentError::UnknownInstrument(id)) if id == "cars2"
    ));
}

#[test]
fn scale_shapes() {
    let phq9 = get_instrument("phq9").unwrap();
    assert_eq!(phq9.scale().len(), 9);
    assert_eq!(phq9.answer_key(), "phq9Responses");

    let gad7 = get_instrument("gad7").unwrap();
    assert_eq!(gad7.scale().len(), 7);
    assert_eq!(gad7.scale().responses.len(), 4);
}

#[test]
fn severity_bands() {
    let phq9 = get_instrument("phq9").unwrap();
    assert_eq!(phq9.severity(0).unwrap().label, "minimal");
    assert_eq!(phq9.severity(17).unwrap().label, "moderately severe");
    assert_eq!(phq9.severity(27).unwrap().label, "severe");
    assert!(phq9.severity(28).is_none());

    let gad7 = get_instrument("gad7").unwrap();
    assert_eq!(gad7.severity(15).unwrap().label, "severe");
}

#[test]
fn validation_flags_wrong_length_and_unknown_values() {
    let gad7 = get_instrument("gad7").unwrap();

    let short = ScaleResponses::unanswered(3);
    assert_eq!(gad7.validate_responses(&short).len(), 1);

    let bad_value = ScaleResponses::from_sentinels(&[0, 1, 2, 3, 7, -2, -1]);
    let errors = gad7.validate_responses(&bad_value);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].item, Some(4));
    assert_eq!(errors[0].value, Some(7));

    assert!(matches!(
        gad7.check(&bad_value),
        Err(InstrumentError::Validation(err)) if err.item == Some(4)
    ));
    assert!(gad7.check(&ScaleResponses::unanswered(7)).is_ok());
}

#[test]
fn summary_mentions_band_and_progress() {
    let phq9 = get_instrument("phq9").unwrap();
    let responses = ScaleResponses::from_sentinels(&[2, 2, 2, 2, 2, -1, -1, -1, -1]);
    assert_eq!(
        phq9.summarize(&responses),
        "PHQ-9: 10 (moderate), 5 of 9 items answered"
    );
}

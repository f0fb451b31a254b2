use std::io::Cursor;

use vitals_cli::terminal::Terminal;
use vitals_core::config::QuizConfig;
use vitals_instruments::scoring::RiskLevel;
use vitals_quiz::session::QuizSession;

fn script(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut input = lines.join("\n");
    input.push('\n');
    Cursor::new(input.into_bytes())
}

fn run(lines: &[&str]) -> (QuizSession, eyre::Result<String>) {
    let mut session = QuizSession::new(QuizConfig::builtin().unwrap()).unwrap();
    let mut terminal = Terminal::new(script(lines), Vec::new());
    let result = terminal.run(&mut session).map(|_| ());
    let output = String::from_utf8(terminal.into_output()).unwrap();
    (session, result.map(|()| output))
}

#[test]
fn full_questionnaire_prints_results() {
    let mut lines = vec![
        // basic
        "68", "1",
        // cardiovascular
        "260", "", "150", "3", "y",
        // diabetes
        "90", "170", "y", "1",
    ];
    lines.extend(["3"; 16]);
    // kidney
    lines.extend(["1.5", ""]);

    let (session, output) = run(&lines);
    let output = output.unwrap();

    assert!(output.contains("BMI: 31.1 kg/m² (Obese)"));
    assert!(output.contains("Overall risk: HIGH (total 51)"));
    assert!(output.contains("  Cardiovascular Health: 20/20 (high)"));
    assert!(output.contains("Immediate Medical Attention Recommended"));
    assert_eq!(session.answers().choice("smokingStatus"), Some("current"));
    assert!(session.answers().scale("gad7Responses").unwrap().is_complete());
}

#[test]
fn required_fields_are_asked_again() {
    let (session, output) = run(&["", "", "40", "nobody", "2"]);
    let output = output.unwrap_err();
    assert!(output.to_string().contains("input closed"));
    assert_eq!(session.stage_index(), 1);
    assert_eq!(session.answers().number("age"), Some(40.0));
    assert_eq!(session.answers().choice("gender"), Some("female"));
}

#[test]
fn back_returns_to_the_previous_stage_and_keeps_answers() {
    let mut lines = vec![
        "40", "2",
        // back from the first cardiovascular prompt, then keep both answers
        "<", "", "",
        "", "", "", "", "",
        "70", "175", "", "2",
        // not offered by the scale
        "7",
    ];
    lines.extend(["0"; 16]);
    lines.extend(["", ""]);

    let mut session = QuizSession::new(QuizConfig::builtin().unwrap()).unwrap();
    let mut terminal = Terminal::new(script(&lines), Vec::new());
    let results = terminal.run(&mut session).unwrap();
    let output = String::from_utf8(terminal.into_output()).unwrap();

    assert_eq!(output.matches("== Basic").count(), 2);
    assert!(output.contains("Choose one of the listed values"));
    assert_eq!(results.overall_risk, RiskLevel::Low);
    assert_eq!(session.answers().number("age"), Some(40.0));
}

#[test]
fn unreadable_number_is_not_stored() {
    let (session, output) = run(&["forty", "-"]);
    let output_err = output.unwrap_err();
    assert!(output_err.to_string().contains("input closed"));
    assert!(!session.answers().contains("age"));
}

#[test]
fn config_without_results_stage_finishes_on_last_stage() {
    let config = QuizConfig::from_json_str(
        r#"{
            "config_version": 1,
            "stages": [{
                "id": "basic",
                "title": "Basic Information",
                "layout": "vertical",
                "questions": [{ "id": "age", "label": "Age", "type": "number" }],
                "required": ["age"]
            }]
        }"#,
    )
    .unwrap();
    let mut session = QuizSession::new(config).unwrap();
    let mut terminal = Terminal::new(script(&["", "40"]), Vec::new());
    let results = terminal.run(&mut session).unwrap();
    let output = String::from_utf8(terminal.into_output()).unwrap();

    assert!(output.contains("Still needed: age"));
    assert!(output.contains("Overall risk: LOW (total 0)"));
    assert_eq!(output.matches("Still needed").count(), 1);
    assert_eq!(results.total_score, 0);
    assert_eq!(session.answers().number("age"), Some(40.0));
}

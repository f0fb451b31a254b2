use vitals_core::models::answer::AnswerValue;
use vitals_core::models::record::AnswerRecord;
use vitals_core::models::scale::ScaleResponses;
use vitals_instruments::bmi::{BmiCategory, BmiReading, bmi};
use vitals_instruments::results::{Recommendation, compute_results, overall_tier};
use vitals_instruments::scoring::{RiskCategory, RiskLevel};

#[test]
fn bmi_normal_weight() {
    let reading = BmiReading::new(70.0, 175.0).unwrap();
    assert!((reading.value - 22.857).abs() < 0.01);
    assert_eq!(reading.rounded(), 22.9);
    assert_eq!(reading.category, BmiCategory::Normal);
    assert_eq!(reading.display(), "22.9 kg/m² (Normal weight)");
}

#[test]
fn bmi_category_edges() {
    assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn bmi_rejects_non_positive_height() {
    assert_eq!(bmi(70.0, 0.0), None);
    assert_eq!(bmi(0.0, 170.0), None);
}

#[test]
fn overall_tier_thresholds() {
    assert_eq!(overall_tier(10), RiskLevel::Low);
    assert_eq!(overall_tier(13), RiskLevel::Moderate);
    assert_eq!(overall_tier(25), RiskLevel::Moderate);
    assert_eq!(overall_tier(26), RiskLevel::High);
}

#[test]
fn moderate_total_drives_moderate_recommendation() {
    // cardiovascular 5, diabetes 1, mental 5, kidney 2
    let answers: AnswerRecord = [
        ("gender", AnswerValue::from("female")),
        ("age", 45.0.into()),
        ("smokingStatus", "current".into()),
        ("weight", 60.0.into()),
        ("height", 170.0.into()),
        (
            "phq9Responses",
            AnswerValue::Scale(ScaleResponses::from_sentinels(&[3, 3, 3, 3, 3, 0, 0, 0, 0])),
        ),
        (
            "gad7Responses",
            AnswerValue::Scale(ScaleResponses::from_sentinels(&[0; 7])),
        ),
        ("systolicBP", 145.0.into()),
    ]
    .into_iter()
    .collect();

    let results = compute_results(&answers);
    let scores: Vec<_> = results.categories.iter().map(|c| c.score).collect();
    assert_eq!(scores, [5, 1, 5, 2]);
    assert_eq!(results.total_score, 13);
    assert_eq!(results.overall_risk, RiskLevel::Moderate);
    assert_eq!(
        results.recommendation,
        Recommendation::for_tier(RiskLevel::Moderate)
    );
    assert_eq!(results.recommendation.title, "Opportunities for Improvement");
}

#[test]
fn results_carry_category_metadata() {
    let results = compute_results(&AnswerRecord::new());
    assert_eq!(results.categories.len(), 4);
    assert_eq!(results.overall_risk, RiskLevel::Low);
    assert!(results.bmi.is_none());

    let kidney = results.category(RiskCategory::Kidney).unwrap();
    assert_eq!(kidney.name, "Kidney Function");
    assert_eq!(kidney.max_score, 10);
    assert_eq!(kidney.recommendations.len(), 4);
    assert_eq!(kidney.percent(), 0.0);
}

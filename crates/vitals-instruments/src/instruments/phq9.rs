use vitals_core::keys;
use vitals_core::models::scale::ScaleDescriptor;

use super::frequency_scale;
use crate::Instrument;
use crate::rubric::SeverityBand;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn answer_key(&self) -> &str {
        keys::PHQ9_RESPONSES
    }

    fn scale(&self) -> &ScaleDescriptor {
        static SCALE: std::sync::LazyLock<ScaleDescriptor> = std::sync::LazyLock::new(|| {
            frequency_scale(
                "PHQ-9",
                &[
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed, or hopeless",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself or that you are a failure",
                    "Trouble concentrating on things",
                    "Moving or speaking slowly, or being fidgety/restless",
                    "Thoughts that you would be better off dead or hurting yourself",
                ],
            )
        });
        &SCALE
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand::new("minimal", 0, 4),
                SeverityBand::new("mild", 5, 9),
                SeverityBand::new("moderate", 10, 14),
                SeverityBand::new("moderately severe", 15, 19),
                SeverityBand::new("severe", 20, 27),
            ]
        });
        &BANDS
    }
}

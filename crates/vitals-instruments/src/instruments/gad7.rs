use vitals_core::keys;
use vitals_core::models::scale::ScaleDescriptor;

use super::frequency_scale;
use crate::Instrument;
use crate::rubric::SeverityBand;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn answer_key(&self) -> &str {
        keys::GAD7_RESPONSES
    }

    fn scale(&self) -> &ScaleDescriptor {
        static SCALE: std::sync::LazyLock<ScaleDescriptor> = std::sync::LazyLock::new(|| {
            frequency_scale(
                "GAD-7",
                &[
                    "Feeling nervous, anxious, or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it's hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid as if something awful might happen",
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
                SeverityBand::new("severe", 15, 21),
            ]
        });
        &BANDS
    }
}

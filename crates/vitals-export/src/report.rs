use serde::Serialize;
use vitals_core::models::record::AnswerRecord;
use vitals_instruments::all_instruments;
use vitals_instruments::results::{ResultsRecord, compute_results};

/// Everything a report template can refer to.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: jiff::Timestamp,
    pub results: ResultsRecord,
    /// BMI line as displayed, e.g. `22.9 kg/m² (Normal weight)`.
    pub bmi_display: Option<String>,
    /// One line per screening scale that has responses.
    pub screenings: Vec<String>,
}

impl Report {
    pub fn new(answers: &AnswerRecord, generated_at: jiff::Timestamp) -> Self {
        let results = compute_results(answers);
        let screenings = all_instruments()
            .iter()
            .filter_map(|instrument| {
                let responses = answers.scale(instrument.answer_key())?;
                if let Err(err) = instrument.check(responses) {
                    tracing::warn!(instrument = instrument.id(), error = %err, "screening left out of report");
                    return None;
                }
                Some(instrument.summarize(responses))
            })
            .collect();
        Self {
            generated_at,
            bmi_display: results.bmi.map(|b| b.display()),
            results,
            screenings,
        }
    }
}

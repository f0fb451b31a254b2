use tracing::{info, warn};
use uuid::Uuid;
use vitals_core::config::QuizConfig;
use vitals_core::models::answer::AnswerValue;
use vitals_core::models::record::{AnswerRecord, Update};
use vitals_core::models::stage::{Layout, StageDescriptor};
use vitals_instruments::bmi::BmiReading;
use vitals_instruments::results::{ResultsRecord, compute_results};

use crate::error::QuizError;
use crate::navigator::{StageNavigator, StepStatus};
use crate::renderer::{RawInput, Widget, normalize, widget};
use crate::scale_flow::{FlowState, ScaleFlow};
use crate::validator;

/// What the presenter should show for the current stage.
#[derive(Debug)]
pub enum StageView<'a> {
    Questions {
        stage: &'a StageDescriptor,
        widgets: Vec<Widget<'a>>,
        /// Present on stages with the BMI widget once weight and height are known.
        bmi: Option<BmiReading>,
    },
    ScaleInterview {
        stage: &'a StageDescriptor,
        flow: &'a ScaleFlow,
    },
    Results {
        stage: &'a StageDescriptor,
        results: ResultsRecord,
    },
}

/// One questionnaire run: the configuration, the single answer record, and
/// the navigation state. All mutation goes through `&mut self`.
#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    config: QuizConfig,
    answers: AnswerRecord,
    navigator: StageNavigator,
    scale_flow: Option<ScaleFlow>,
}

impl QuizSession {
    /// Start a session on the first stage, with every configured default
    /// written into the record.
    ///
    /// The configuration is validated first, so a session always has at
    /// least one stage.
    pub fn new(config: QuizConfig) -> Result<Self, QuizError> {
        config.validate()?;

        let mut answers = AnswerRecord::new();
        for question in config.stages.iter().flat_map(|s| &s.questions) {
            if let Some(default) = question.default_answer()
                && let Err(err) = answers.set(question.id.clone(), Some(default))
            {
                warn!(question = %question.id, error = %err, "skipping default value");
            }
        }

        let id = Uuid::new_v4();
        info!(session = %id, stages = config.stage_count(), "questionnaire session started");

        let mut session = Self {
            id,
            navigator: StageNavigator::new(config.stage_count()),
            config,
            answers,
            scale_flow: None,
        };
        session.enter_stage();
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn navigator(&self) -> &StageNavigator {
        &self.navigator
    }

    pub fn stage_index(&self) -> usize {
        self.navigator.index()
    }

    pub fn current_stage(&self) -> &StageDescriptor {
        &self.config.stages[self.navigator.index()]
    }

    pub fn scale_flow(&self) -> Option<&ScaleFlow> {
        self.scale_flow.as_ref()
    }

    /// Write one field of the record. `None` clears it.
    pub fn update(
        &mut self,
        key: impl Into<String>,
        value: Option<AnswerValue>,
    ) -> Result<Update, QuizError> {
        let key = key.into();
        self.answers.set(key.clone(), value).map_err(|err| {
            warn!(session = %self.id, key = %key, error = %err, "answer update rejected");
            QuizError::from(err)
        })
    }

    /// Normalize raw input for a question on the current stage and store it.
    pub fn answer(&mut self, question_id: &str, input: RawInput) -> Result<Update, QuizError> {
        let question = self
            .current_stage()
            .question(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;
        let value = normalize(question, input)?;
        self.update(question_id, value)
    }

    /// Answer the current scale item with an option value. `None` when the
    /// current stage has no scale interview.
    pub fn select_scale_response(&mut self, value: u8) -> Option<FlowState> {
        let flow = self.scale_flow.as_mut()?;
        Some(flow.select(&mut self.answers, value))
    }

    /// Answer the current scale item with free text.
    pub fn submit_scale_text(&mut self, text: &str) -> Option<FlowState> {
        let flow = self.scale_flow.as_mut()?;
        Some(flow.submit_text(&mut self.answers, text))
    }

    pub fn can_advance(&self) -> bool {
        self.navigator.can_advance(&self.config.stages, &self.answers)
    }

    /// Required fields on the current stage that still block advancing.
    pub fn missing_fields(&self) -> Vec<&str> {
        validator::missing_fields(self.current_stage(), &self.answers)
    }

    pub fn advance(&mut self) -> bool {
        let moved = self.navigator.advance(&self.config.stages, &self.answers);
        if moved {
            self.enter_stage();
        }
        moved
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.navigator.retreat();
        if moved {
            self.enter_stage();
        }
        moved
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        let moved = self.navigator.jump_to(index);
        if moved {
            self.enter_stage();
        }
        moved
    }

    pub fn progress_percent(&self) -> f64 {
        self.navigator.progress_percent()
    }

    pub fn step_statuses(&self) -> Vec<StepStatus> {
        self.navigator.step_statuses()
    }

    /// Score the record as it stands.
    pub fn results(&self) -> ResultsRecord {
        compute_results(&self.answers)
    }

    pub fn view(&self) -> StageView<'_> {
        let stage = self.current_stage();
        if stage.layout == Layout::Results {
            return StageView::Results {
                stage,
                results: self.results(),
            };
        }
        if let Some(flow) = &self.scale_flow {
            return StageView::ScaleInterview { stage, flow };
        }
        StageView::Questions {
            stage,
            widgets: stage
                .questions
                .iter()
                .map(|q| widget(q, &self.answers))
                .collect(),
            bmi: stage
                .custom_components
                .bmi
                .then(|| BmiReading::from_answers(&self.answers))
                .flatten(),
        }
    }

    fn enter_stage(&mut self) {
        let index = self.navigator.index();
        let stage = &self.config.stages[index];
        info!(session = %self.id, stage = %stage.id, index, "entered stage");

        // Special stages without a recognized component fall back to plain questions.
        self.scale_flow = match stage.layout {
            Layout::Special => ScaleFlow::for_stage(stage),
            _ => None,
        };
        if let Some(flow) = self.scale_flow.as_mut() {
            flow.start(&mut self.answers);
        }
    }
}

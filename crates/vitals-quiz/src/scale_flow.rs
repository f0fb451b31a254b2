//! One-item-at-a-time interview over one or more scales.
//!
//! The flow owns only its cursor and transcript; answers live in the
//! [`AnswerRecord`] and are written through [`AnswerRecord::set`] one whole
//! array at a time. The cursor only moves forward, so an item cannot be
//! changed once passed.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;
use vitals_core::models::answer::AnswerValue;
use vitals_core::models::record::AnswerRecord;
use vitals_core::models::scale::{ResponseOption, ScaleDescriptor, ScaleResponses, ScaleSlot};
use vitals_core::models::stage::{SpecialComponent, StageDescriptor};

/// One scale administered by the flow, stored under `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub key: String,
    pub title: String,
    pub scale: ScaleDescriptor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum FlowState {
    Active { section: usize, item: usize },
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FlowMode {
    /// Sections back to back, option answers only.
    Combined,
    /// A single section that also accepts free-text answers.
    Single,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum TranscriptResponse {
    Option { value: u8, label: String },
    Text { text: String },
}

/// A passed item, shown read-only in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranscriptEntry {
    pub section: usize,
    /// One-based item number within the section.
    pub number: usize,
    pub prompt: String,
    pub response: TranscriptResponse,
}

/// The item awaiting an answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentItem<'a> {
    pub section_title: &'a str,
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub options: &'a [ResponseOption],
    pub accepts_text: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleFlow {
    mode: FlowMode,
    sections: Vec<Section>,
    state: FlowState,
    transcript: Vec<TranscriptEntry>,
}

impl ScaleFlow {
    pub fn combined(sections: Vec<Section>) -> Self {
        Self::new(FlowMode::Combined, sections)
    }

    pub fn single(section: Section) -> Self {
        Self::new(FlowMode::Single, vec![section])
    }

    fn new(mode: FlowMode, sections: Vec<Section>) -> Self {
        let state = first_item_from(&sections, 0, 0);
        Self {
            mode,
            sections,
            state,
            transcript: Vec::new(),
        }
    }

    /// Build the flow a specialized stage asks for, if any.
    pub fn for_stage(stage: &StageDescriptor) -> Option<Self> {
        let mut sections = stage.questions.iter().filter_map(|q| {
            q.scale().map(|scale| Section {
                key: q.id.clone(),
                title: q.label.clone(),
                scale: scale.clone(),
            })
        });

        match stage.custom_component? {
            SpecialComponent::CombinedScales => Some(Self::combined(sections.collect())),
            SpecialComponent::ScaleInterview => sections.next().map(Self::single),
            SpecialComponent::QuizResults => None,
        }
    }

    pub fn mode(&self) -> FlowMode {
        self.mode
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Prepare the record and place the cursor. Must run before the first
    /// render.
    ///
    /// Any section array that is absent or the wrong length is replaced with
    /// an all-unanswered array. The cursor resumes at the first unanswered
    /// item, with earlier answers replayed into the transcript.
    pub fn start(&mut self, answers: &mut AnswerRecord) {
        for section in &self.sections {
            let len = section.scale.len();
            let mut responses = answers.scale(&section.key).cloned().unwrap_or_default();
            let had_value = answers.contains(&section.key);
            if responses.heal(len) {
                if had_value {
                    warn!(key = %section.key, len, "re-initialized malformed scale answers");
                }
                if let Err(err) = answers.set(section.key.clone(), Some(AnswerValue::Scale(responses))) {
                    warn!(key = %section.key, error = %err, "could not initialize scale answers");
                }
            }
        }

        self.transcript.clear();
        self.state = FlowState::Complete;
        'sections: for (section_index, section) in self.sections.iter().enumerate() {
            let Some(responses) = answers.scale(&section.key) else {
                continue;
            };
            for (item, slot) in responses.slots().iter().enumerate() {
                match transcript_response(&section.scale, slot) {
                    Some(response) => self.transcript.push(TranscriptEntry {
                        section: section_index,
                        number: item + 1,
                        prompt: section.scale.questions[item].clone(),
                        response,
                    }),
                    None => {
                        self.state = FlowState::Active {
                            section: section_index,
                            item,
                        };
                        break 'sections;
                    }
                }
            }
        }
        debug!(state = ?self.state, "scale interview started");
    }

    pub fn current(&self) -> Option<CurrentItem<'_>> {
        let FlowState::Active { section, item } = self.state else {
            return None;
        };
        let s = self.sections.get(section)?;
        Some(CurrentItem {
            section_title: &s.title,
            number: item + 1,
            total: s.scale.len(),
            prompt: s.scale.questions.get(item)?,
            options: &s.scale.responses,
            accepts_text: self.mode == FlowMode::Single,
        })
    }

    /// Answer the current item with a response option value.
    ///
    /// Values the scale does not offer are ignored. A complete flow ignores
    /// every input.
    pub fn select(&mut self, answers: &mut AnswerRecord, value: u8) -> FlowState {
        let FlowState::Active { section, .. } = self.state else {
            return self.state;
        };
        let Some(option) = self.sections[section].scale.response(value) else {
            warn!(key = %self.sections[section].key, value, "ignoring response outside the scale");
            return self.state;
        };
        let response = TranscriptResponse::Option {
            value,
            label: option.label.clone(),
        };
        self.record(answers, ScaleSlot::Selected(value), response)
    }

    /// Answer the current item with free text. Only single-scale flows take
    /// text; blank submissions are ignored.
    pub fn submit_text(&mut self, answers: &mut AnswerRecord, text: &str) -> FlowState {
        let text = text.trim();
        if self.mode != FlowMode::Single || text.is_empty() {
            return self.state;
        }
        if !matches!(self.state, FlowState::Active { .. }) {
            return self.state;
        }
        let response = TranscriptResponse::Text {
            text: text.to_string(),
        };
        self.record(answers, ScaleSlot::Custom(text.to_string()), response)
    }

    fn record(
        &mut self,
        answers: &mut AnswerRecord,
        slot: ScaleSlot,
        response: TranscriptResponse,
    ) -> FlowState {
        let FlowState::Active { section, item } = self.state else {
            return self.state;
        };
        let current = &self.sections[section];

        let mut responses = answers
            .scale(&current.key)
            .cloned()
            .unwrap_or_else(|| ScaleResponses::unanswered(current.scale.len()));
        responses.heal(current.scale.len());
        responses.set(item, slot);
        if let Err(err) = answers.set(current.key.clone(), Some(AnswerValue::Scale(responses))) {
            warn!(key = %current.key, error = %err, "scale answer rejected");
            return self.state;
        }

        self.transcript.push(TranscriptEntry {
            section,
            number: item + 1,
            prompt: current.scale.questions[item].clone(),
            response,
        });

        self.state = first_item_from(&self.sections, section, item + 1);
        debug!(state = ?self.state, "scale interview advanced");
        self.state
    }

    /// True when every slot of every managed array is answered.
    pub fn is_complete(&self, answers: &AnswerRecord) -> bool {
        self.sections.iter().all(|s| {
            answers
                .scale(&s.key)
                .is_some_and(|r| r.len() == s.scale.len() && r.is_complete())
        })
    }
}

/// The first existing item at or after `(section, item)`. Sections without
/// items are skipped.
fn first_item_from(sections: &[Section], section: usize, item: usize) -> FlowState {
    let mut item = item;
    for (index, s) in sections.iter().enumerate().skip(section) {
        if item < s.scale.len() {
            return FlowState::Active {
                section: index,
                item,
            };
        }
        item = 0;
    }
    FlowState::Complete
}

fn transcript_response(scale: &ScaleDescriptor, slot: &ScaleSlot) -> Option<TranscriptResponse> {
    match slot {
        ScaleSlot::Unanswered => None,
        ScaleSlot::Custom(text) => Some(TranscriptResponse::Text { text: text.clone() }),
        ScaleSlot::Selected(value) => Some(TranscriptResponse::Option {
            value: *value,
            label: scale
                .response(*value)
                .map(|r| r.label.clone())
                .unwrap_or_default(),
        }),
    }
}

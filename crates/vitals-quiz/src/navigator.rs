use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vitals_core::models::record::AnswerRecord;
use vitals_core::models::stage::StageDescriptor;

use crate::validator::can_advance;

/// Where a stage sits relative to the current one, for the step bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// Tracks the current stage index.
///
/// Invalid transitions are ignored rather than reported: each method returns
/// whether the index moved, which a presenter uses to disable its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StageNavigator {
    index: usize,
    stage_count: usize,
}

impl StageNavigator {
    pub fn new(stage_count: usize) -> Self {
        Self {
            index: 0,
            stage_count,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.stage_count
    }

    /// Whether [`advance`](Self::advance) would move right now.
    pub fn can_advance(&self, stages: &[StageDescriptor], answers: &AnswerRecord) -> bool {
        !self.is_last()
            && stages
                .get(self.index)
                .is_some_and(|stage| can_advance(stage, answers))
    }

    /// Move one stage forward if the current stage validates.
    pub fn advance(&mut self, stages: &[StageDescriptor], answers: &AnswerRecord) -> bool {
        if !self.can_advance(stages, answers) {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move one stage back. Always allowed except on the first stage.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jump to an earlier (or the current) stage. Skipping ahead is ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index > self.index {
            return false;
        }
        let moved = index != self.index;
        self.index = index;
        moved
    }

    /// `(index + 1) / stage_count` as a percentage.
    pub fn progress_percent(&self) -> f64 {
        if self.stage_count == 0 {
            return 0.0;
        }
        (self.index + 1) as f64 / self.stage_count as f64 * 100.0
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        match index.cmp(&self.index) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    pub fn step_statuses(&self) -> Vec<StepStatus> {
        (0..self.stage_count).map(|i| self.step_status(i)).collect()
    }
}

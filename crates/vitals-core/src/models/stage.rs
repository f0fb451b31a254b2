use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::question::QuestionDescriptor;

/// How the questions of a stage are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Layout {
    Vertical,
    Grid,
    /// Rendered by a specialized component (see [`SpecialComponent`]).
    Special,
    /// The final results summary.
    Results,
}

/// Stage icon. Unknown names fail to load; a missing icon is [`StageIcon::User`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StageIcon {
    #[default]
    User,
    Heart,
    Activity,
    Brain,
    Droplets,
    CheckCircle,
}

/// A specialized full-stage component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SpecialComponent {
    /// Every scale question of the stage, interviewed back to back.
    #[serde(alias = "MentalHealthCombined")]
    CombinedScales,
    /// The stage's single scale question, with a free-text alternative.
    #[serde(alias = "MentalHealthEnhanced")]
    ScaleInterview,
    #[serde(alias = "QuizResults")]
    QuizResults,
}

/// Extra display widgets attached to an ordinary stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomComponents {
    /// Show the BMI summary once weight and height are known.
    #[serde(default)]
    pub bmi: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FooterContent {
    Note(String),
    List { title: String, items: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Footer {
    Info { content: FooterContent },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StageDescriptor {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: StageIcon,
    pub layout: Layout,
    /// Column count for [`Layout::Grid`].
    #[serde(default)]
    pub grid_columns: Option<u8>,
    #[serde(default)]
    pub questions: Vec<QuestionDescriptor>,
    /// Question ids that must be answered before leaving this stage.
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub footer: Option<Footer>,
    #[serde(default)]
    pub custom_components: CustomComponents,
    #[serde(default)]
    pub custom_component: Option<SpecialComponent>,
}

impl StageDescriptor {
    pub fn question(&self, id: &str) -> Option<&QuestionDescriptor> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// The scale questions of this stage, in order.
    pub fn scale_questions(&self) -> impl Iterator<Item = &QuestionDescriptor> {
        self.questions.iter().filter(|q| q.scale().is_some())
    }

    pub fn is_results(&self) -> bool {
        self.layout == Layout::Results
    }
}

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::question::QuestionKind;
use crate::models::stage::{Layout, StageDescriptor};

/// Current config version. Bump this when changing the document shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const BUILTIN: &str = include_str!("../config/quiz-config.json");

/// The ordered stage list driving a questionnaire session. Immutable once
/// loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizConfig {
    /// Schema version. Missing or 0 = legacy document with a top-level
    /// `validation` map.
    #[serde(default)]
    pub config_version: u32,
    pub stages: Vec<StageDescriptor>,
}

impl QuizConfig {
    /// The default five-topic questionnaire shipped with the crate.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_json_str(BUILTIN)
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            stages = config.stages.len(),
            "stage configuration loaded"
        );
        Ok(config)
    }

    /// Parse, migrate and validate a configuration document.
    pub fn from_json_str(contents: &str) -> Result<Self, CoreError> {
        // Parse as raw JSON so we can run migrations before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let raw_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        let on_disk_version =
            u32::try_from(raw_version).map_err(|_| CoreError::UnsupportedVersion {
                found: raw_version,
                supported: CURRENT_VERSION,
            })?;

        let migrated = migrate(json, on_disk_version)?;
        let config: QuizConfig = serde_json::from_value(migrated)?;
        config.validate()?;
        Ok(config)
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stage(&self, index: usize) -> Option<&StageDescriptor> {
        self.stages.get(index)
    }

    pub fn stage_by_id(&self, id: &str) -> Option<&StageDescriptor> {
        self.stages.iter().find(|s| s.id == id)
    }

    /// Load-time checks that would otherwise surface as render-time surprises.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.stages.is_empty() {
            return Err(invalid("no stages defined"));
        }

        let mut stage_ids = HashSet::new();
        let mut question_ids = HashSet::new();
        let last = self.stages.len() - 1;

        for (index, stage) in self.stages.iter().enumerate() {
            if !stage_ids.insert(stage.id.as_str()) {
                return Err(invalid(format!("duplicate stage id '{}'", stage.id)));
            }
            if stage.layout == Layout::Results && index != last {
                return Err(invalid(format!(
                    "results stage '{}' must be the last stage",
                    stage.id
                )));
            }

            for question in &stage.questions {
                if !question_ids.insert(question.id.as_str()) {
                    return Err(invalid(format!("duplicate question id '{}'", question.id)));
                }
                match &question.kind {
                    QuestionKind::Number { validation, .. } => {
                        if let (Some(min), Some(max)) = (validation.min, validation.max)
                            && min > max
                        {
                            return Err(invalid(format!(
                                "question '{}' has min {min} greater than max {max}",
                                question.id
                            )));
                        }
                    }
                    QuestionKind::Radio {
                        options,
                        default_value,
                    } => {
                        if options.is_empty() {
                            return Err(invalid(format!("question '{}' has no options", question.id)));
                        }
                        if let Some(default) = default_value
                            && !options.iter().any(|o| &o.value == default)
                        {
                            return Err(invalid(format!(
                                "question '{}' defaults to '{default}', which is not an option",
                                question.id
                            )));
                        }
                    }
                    QuestionKind::Checkbox { .. } => {}
                    QuestionKind::MentalHealthScale { scale } => {
                        if scale.questions.is_empty() || scale.responses.is_empty() {
                            return Err(invalid(format!(
                                "scale '{}' on question '{}' needs items and response options",
                                scale.name, question.id
                            )));
                        }
                    }
                }
            }

            for field in &stage.required {
                if stage.question(field).is_none() {
                    return Err(invalid(format!(
                        "stage '{}' requires '{field}', which it does not ask",
                        stage.id
                    )));
                }
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::InvalidConfig(message.into())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, CoreError> {
    if from_version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion {
            found: u64::from(from_version),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: move the top-level `validation` map into each stage's `required`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| invalid("config is not a JSON object"))?;
        let validation = obj.remove("validation").unwrap_or_default();
        if let Some(stages) = obj.get_mut("stages").and_then(|s| s.as_array_mut()) {
            for stage in stages {
                let Some(stage) = stage.as_object_mut() else {
                    continue;
                };
                let required = stage
                    .get("id")
                    .and_then(|id| id.as_str())
                    .and_then(|id| validation.get(id))
                    .cloned()
                    .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
                stage.entry("required").or_insert(required);
            }
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated stage configuration v0 → v1 (per-stage required fields)");
    }

    Ok(json)
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::answer::{AnswerKind, AnswerValue};
use super::scale::ScaleResponses;
use crate::error::CoreError;

/// The single mutable answer store for one questionnaire session.
///
/// Keys are question identifiers supplied by the stage configuration. The
/// first value written under a key fixes its [`AnswerKind`]; later writes of a
/// different kind are rejected, and the lock survives clearing the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, AnswerValue>",
    into = "BTreeMap<String, AnswerValue>"
)]
pub struct AnswerRecord {
    values: BTreeMap<String, AnswerValue>,
    kinds: BTreeMap<String, AnswerKind>,
}

/// Outcome of a single-field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// The stored value changed.
    Changed,
    /// The new value equals the stored one; nothing was written.
    Unchanged,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The kind a key is locked to, if it has ever held a value.
    pub fn kind_of(&self, key: &str) -> Option<AnswerKind> {
        self.kinds
            .get(key)
            .copied()
            .or_else(|| self.values.get(key).map(AnswerValue::kind))
    }

    /// Write one field. `None` clears it.
    ///
    /// Writing the value already stored is a no-op, so repeated calls with the
    /// same input are idempotent.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: Option<AnswerValue>,
    ) -> Result<Update, CoreError> {
        let key = key.into();
        let Some(value) = value else {
            return Ok(match self.values.remove(&key) {
                Some(_) => Update::Changed,
                None => Update::Unchanged,
            });
        };

        if let Some(locked) = self.kind_of(&key)
            && locked != value.kind()
        {
            return Err(CoreError::KindMismatch {
                key,
                expected: locked,
                found: value.kind(),
            });
        }

        if self.values.get(&key) == Some(&value) {
            return Ok(Update::Unchanged);
        }
        self.kinds.insert(key.clone(), value.kind());
        self.values.insert(key, value);
        Ok(Update::Changed)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AnswerValue::as_number)
    }

    pub fn choice(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_choice)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(AnswerValue::as_flag)
    }

    pub fn scale(&self, key: &str) -> Option<&ScaleResponses> {
        self.get(key).and_then(AnswerValue::as_scale)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, AnswerValue>> for AnswerRecord {
    fn from(values: BTreeMap<String, AnswerValue>) -> Self {
        let kinds = values.iter().map(|(k, v)| (k.clone(), v.kind())).collect();
        Self { values, kinds }
    }
}

impl From<AnswerRecord> for BTreeMap<String, AnswerValue> {
    fn from(record: AnswerRecord) -> Self {
        record.values
    }
}

impl<K: Into<String>> FromIterator<(K, AnswerValue)> for AnswerRecord {
    fn from_iter<I: IntoIterator<Item = (K, AnswerValue)>>(iter: I) -> Self {
        let values: BTreeMap<String, AnswerValue> =
            iter.into_iter().map(|(k, v)| (k.into(), v)).collect();
        values.into()
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Legacy integer encoding of an unanswered slot.
pub const SENTINEL_UNANSWERED: i32 = -1;
/// Legacy integer encoding of a slot answered with free text.
pub const SENTINEL_CUSTOM: i32 = -2;

/// One response option shared by every item of a scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: String,
}

/// A multi-item standardized questionnaire answered one item at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDescriptor {
    pub name: String,
    /// Item prompts, in administration order.
    pub questions: Vec<String>,
    pub responses: Vec<ResponseOption>,
}

impl ScaleDescriptor {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn response(&self, value: u8) -> Option<&ResponseOption> {
        self.responses.iter().find(|r| r.value == value)
    }
}

/// The state of one item in a scale answer.
///
/// Serializes in tagged form. Deserializing also accepts the legacy integer
/// encoding (`-1` unanswered, `-2` free text, else the option value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleSlot {
    Unanswered,
    /// Answered with free text instead of a fixed option.
    Custom(String),
    /// Answered with the given response option value.
    Selected(u8),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum TaggedSlot {
    Unanswered,
    Custom(String),
    Selected(u8),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SlotRepr {
    Sentinel(i32),
    Tagged(TaggedSlot),
}

impl<'de> Deserialize<'de> for ScaleSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SlotRepr::deserialize(deserializer)? {
            SlotRepr::Sentinel(raw) => ScaleSlot::from_sentinel(raw),
            SlotRepr::Tagged(TaggedSlot::Unanswered) => ScaleSlot::Unanswered,
            SlotRepr::Tagged(TaggedSlot::Custom(text)) => ScaleSlot::Custom(text),
            SlotRepr::Tagged(TaggedSlot::Selected(value)) => ScaleSlot::Selected(value),
        })
    }
}

impl ScaleSlot {
    pub fn is_answered(&self) -> bool {
        !matches!(self, ScaleSlot::Unanswered)
    }

    /// Numeric contribution to a severity total. Free text and unanswered
    /// slots carry no severity and contribute nothing.
    pub fn severity(&self) -> u32 {
        match self {
            ScaleSlot::Selected(v) => u32::from(*v),
            ScaleSlot::Unanswered | ScaleSlot::Custom(_) => 0,
        }
    }

    pub fn to_sentinel(&self) -> i32 {
        match self {
            ScaleSlot::Unanswered => SENTINEL_UNANSWERED,
            ScaleSlot::Custom(_) => SENTINEL_CUSTOM,
            ScaleSlot::Selected(v) => i32::from(*v),
        }
    }

    /// Decode a legacy sentinel integer. Values outside `-2..=255` are
    /// treated as unanswered.
    pub fn from_sentinel(raw: i32) -> Self {
        match raw {
            SENTINEL_CUSTOM => ScaleSlot::Custom(String::new()),
            v => u8::try_from(v)
                .map(ScaleSlot::Selected)
                .unwrap_or(ScaleSlot::Unanswered),
        }
    }
}

/// Fixed-length answer array for a scale. The length is set once and never
/// changes; [`ScaleResponses::heal`] re-initializes a malformed array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleResponses(Vec<ScaleSlot>);

impl ScaleResponses {
    /// A fresh array of `len` unanswered slots.
    pub fn unanswered(len: usize) -> Self {
        Self(vec![ScaleSlot::Unanswered; len])
    }

    pub fn from_slots(slots: Vec<ScaleSlot>) -> Self {
        Self(slots)
    }

    pub fn from_sentinels(raw: &[i32]) -> Self {
        Self(raw.iter().copied().map(ScaleSlot::from_sentinel).collect())
    }

    pub fn to_sentinels(&self) -> Vec<i32> {
        self.0.iter().map(ScaleSlot::to_sentinel).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn slots(&self) -> &[ScaleSlot] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&ScaleSlot> {
        self.0.get(index)
    }

    /// Write a slot in place. Out-of-range indices are ignored so the length
    /// invariant holds; returns whether the slot was written.
    pub fn set(&mut self, index: usize, slot: ScaleSlot) -> bool {
        match self.0.get_mut(index) {
            Some(existing) => {
                *existing = slot;
                true
            }
            None => false,
        }
    }

    /// True when no slot is [`ScaleSlot::Unanswered`].
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(ScaleSlot::is_answered)
    }

    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|s| s.is_answered()).count()
    }

    /// Sum of selected option values; custom and unanswered slots add 0.
    pub fn severity_total(&self) -> u32 {
        self.0.iter().map(ScaleSlot::severity).sum()
    }

    /// Ensure the array has exactly `len` slots. A wrong-length array is
    /// replaced wholesale with unanswered slots; returns whether it was.
    pub fn heal(&mut self, len: usize) -> bool {
        if self.0.len() == len {
            return false;
        }
        self.0 = vec![ScaleSlot::Unanswered; len];
        true
    }
}

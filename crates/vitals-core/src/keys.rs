//! Answer keys the scoring engine reads.
//!
//! Keys are otherwise driven by the stage configuration; these are the ones
//! with fixed meaning.

pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const TOTAL_CHOLESTEROL: &str = "totalCholesterol";
pub const SYSTOLIC_BP: &str = "systolicBP";
pub const SMOKING_STATUS: &str = "smokingStatus";
pub const DIABETES_HISTORY: &str = "diabetesHistory";
pub const WEIGHT: &str = "weight";
pub const HEIGHT: &str = "height";
pub const FAMILY_DIABETES: &str = "familyDiabetes";
pub const PHYSICAL_ACTIVITY: &str = "physicalActivity";
pub const PHQ9_RESPONSES: &str = "phq9Responses";
pub const GAD7_RESPONSES: &str = "gad7Responses";
pub const CREATININE: &str = "creatinine";

/// Choice values with fixed meaning.
pub mod choice {
    pub const MALE: &str = "male";
    pub const SMOKER_CURRENT: &str = "current";
    pub const ACTIVITY_NONE: &str = "none";
}

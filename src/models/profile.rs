//! User profile model — feeds the calorie estimator.

use serde::{Deserialize, Serialize};

/// Unit the user entered their body weight in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

/// Locally stored user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years (display only)
    pub age: Option<u32>,
    /// Height in centimeters (display only)
    pub height_cm: Option<f64>,
    /// Body weight in `weight_unit`; `None` until the user sets it
    pub weight: Option<f64>,
    /// Unit `weight` was entered in
    pub weight_unit: WeightUnit,
    /// Equipment ids the user selected for exercise filtering
    pub selected_equipment: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: None,
            height_cm: None,
            weight: None,
            weight_unit: WeightUnit::Kg,
            selected_equipment: Vec::new(),
        }
    }
}

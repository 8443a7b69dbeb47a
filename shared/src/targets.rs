//! Goal-adjusted daily calorie targets
//!
//! Turns a TDEE into a daily intake target for the user's goal and
//! enforces the sex-specific minimum intake.

use crate::energy::BiologicalSex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum safe daily intake for men (kcal)
pub const MIN_CALORIES_MALE: i32 = 1500;
/// Minimum safe daily intake for women (kcal)
pub const MIN_CALORIES_FEMALE: i32 = 1200;

/// Health goal driving the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// ~0.5kg per week with a 20% deficit
    LoseWeight,
    /// Large deficit, meant to be supervised
    AggressiveLoss,
    /// Lean bulk with a 15% surplus
    GainMuscle,
    /// Calories matched to expenditure
    #[default]
    Maintain,
}

impl HealthGoal {
    /// All goals, in wire-format declaration order
    pub const ALL: [HealthGoal; 4] = [
        HealthGoal::LoseWeight,
        HealthGoal::AggressiveLoss,
        HealthGoal::GainMuscle,
        HealthGoal::Maintain,
    ];

    /// Wire name of the goal
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthGoal::LoseWeight => "lose_weight",
            HealthGoal::AggressiveLoss => "aggressive_loss",
            HealthGoal::GainMuscle => "gain_muscle",
            HealthGoal::Maintain => "maintain",
        }
    }

    /// Parse a wire name, returning `None` for unknown goals
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|g| g.as_str() == normalized)
    }

    /// Parse a wire name; unknown or missing goals are treated as `Maintain`
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// True for both weight-loss goals
    pub fn is_loss(&self) -> bool {
        matches!(self, HealthGoal::LoseWeight | HealthGoal::AggressiveLoss)
    }

    /// Human-readable description used in explanations
    pub fn description(&self) -> &'static str {
        match self {
            HealthGoal::LoseWeight => "Weight Loss: ~0.5kg per week with 15-20% calorie deficit",
            HealthGoal::AggressiveLoss => {
                "Aggressive Loss: up to 25% calorie deficit, best done under supervision"
            }
            HealthGoal::GainMuscle => "Muscle Gain: Lean bulking with 10-15% calorie surplus",
            HealthGoal::Maintain => "Maintenance: Balancing calories with energy expenditure",
        }
    }
}

impl fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BiologicalSex {
    /// Minimum safe daily intake for this sex
    pub fn minimum_calories(&self) -> i32 {
        match self {
            BiologicalSex::Male => MIN_CALORIES_MALE,
            BiologicalSex::Female => MIN_CALORIES_FEMALE,
        }
    }
}

/// Unrounded goal-adjusted intake, before the safety floor
pub fn adjusted_calories(tdee: f64, goal: HealthGoal) -> f64 {
    match goal {
        HealthGoal::LoseWeight => tdee - (tdee * 0.20).clamp(300.0, 750.0),
        HealthGoal::AggressiveLoss => tdee - (tdee * 0.25).min(1000.0),
        HealthGoal::GainMuscle => tdee + (tdee * 0.15).clamp(250.0, 500.0),
        HealthGoal::Maintain => tdee,
    }
}

/// Daily calorie target for a goal, rounded and never below the sex floor
pub fn target_calories(tdee: f64, goal: HealthGoal, sex: BiologicalSex) -> i32 {
    let rounded = adjusted_calories(tdee, goal).round() as i32;
    rounded.max(sex.minimum_calories())
}

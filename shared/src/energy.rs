//! Energy expenditure calculations
//!
//! BMR formulas, activity multipliers and BMI, all computed in SI units
//! (kilograms, centimeters, years).
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Table-Driven**: Multipliers live in one lookup, not scattered branches
//! 3. **Full Precision**: Nothing here rounds; rounding happens at the output edge

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Profile Enums
// ============================================================================

/// Biological sex for health calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            other => Err(format!("'{}' is not one of: male, female", other)),
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiologicalSex::Male => write!(f, "male"),
            BiologicalSex::Female => write!(f, "female"),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise, desk job
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise daily, physical job
    VeryActive,
    /// Very intense exercise plus a physical job
    ExtraActive,
}

/// Activity multiplier table, in declaration order
const ACTIVITY_MULTIPLIERS: [(ActivityLevel, f64); 6] = [
    (ActivityLevel::Sedentary, 1.2),
    (ActivityLevel::Light, 1.375),
    (ActivityLevel::Moderate, 1.55),
    (ActivityLevel::Active, 1.725),
    (ActivityLevel::VeryActive, 1.9),
    (ActivityLevel::ExtraActive, 2.0),
];

impl ActivityLevel {
    /// All activity levels, least to most active
    pub const ALL: [ActivityLevel; 6] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        ACTIVITY_MULTIPLIERS
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, m)| *m)
            .unwrap_or(1.55)
    }

    /// Wire name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    /// Parse a wire name, returning `None` for unknown levels
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|l| l.as_str() == normalized)
    }

    /// Parse a wire name; unknown or missing levels fall back to `Moderate`
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise, desk job",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise daily, physical job",
            ActivityLevel::ExtraActive => "Very intense exercise plus a physical job",
        }
    }
}

// ============================================================================
// BMR Formulas
// ============================================================================

/// BMR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BmrFormula {
    /// Mifflin-St Jeor (most accurate for modern populations)
    #[default]
    Mifflin,
    /// Revised Harris-Benedict (classic)
    Harris,
    /// Katch-McArdle (requires body fat %)
    Katch,
}

impl BmrFormula {
    /// Parse a wire name; anything unrecognized selects Mifflin-St Jeor
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("harris") => BmrFormula::Harris,
            Some("katch") => BmrFormula::Katch,
            _ => BmrFormula::Mifflin,
        }
    }

    /// Display name used in results
    pub fn display_name(&self) -> &'static str {
        match self {
            BmrFormula::Mifflin => "Mifflin-St Jeor",
            BmrFormula::Harris => "Revised Harris-Benedict",
            BmrFormula::Katch => "Katch-McArdle",
        }
    }

    /// Qualitative accuracy label
    pub fn accuracy_label(&self) -> &'static str {
        match self {
            BmrFormula::Mifflin => "High - Recommended by most health professionals",
            BmrFormula::Harris => "Medium - Still accurate for some populations",
            BmrFormula::Katch => "Very High - Best for people who know their body fat %",
        }
    }

    /// One-line summary of what the formula is good for
    pub fn summary(&self) -> &'static str {
        match self {
            BmrFormula::Mifflin => "Most accurate for modern populations.",
            BmrFormula::Harris => "Classic formula, good for older populations.",
            BmrFormula::Katch => {
                "Accounts for lean body mass. Most accurate for athletic individuals."
            }
        }
    }
}

impl fmt::Display for BmrFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn mifflin_st_jeor(sex: BiologicalSex, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate BMR using Harris-Benedict equation (revised)
///
/// Men: BMR = 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y) + 88.362
/// Women: BMR = 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y) + 447.593
pub fn harris_benedict(sex: BiologicalSex, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let age = f64::from(age_years);
    match sex {
        BiologicalSex::Male => 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age + 88.362,
        BiologicalSex::Female => 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age + 447.593,
    }
}

/// Lean body mass: weight × (1 - body_fat_percent/100)
pub fn lean_body_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (1.0 - body_fat_percent / 100.0)
}

/// Calculate BMR using Katch-McArdle equation
///
/// BMR = 370 + 21.6 × LBM(kg)
pub fn katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    370.0 + 21.6 * lean_body_mass(weight_kg, body_fat_percent)
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

// ============================================================================
// BMI
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

//! Macronutrient split suggestions

use crate::targets::HealthGoal;
use serde::{Deserialize, Serialize};

/// kcal per gram of protein or carbohydrate
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Largest gap between a target and the kcal implied by its rounded grams
pub const MAX_ROUNDING_DRIFT_KCAL: f64 =
    0.5 * KCAL_PER_GRAM_PROTEIN + 0.5 * KCAL_PER_GRAM_CARBS + 0.5 * KCAL_PER_GRAM_FAT;

/// Fraction of calories allotted to each macronutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

const LOSE_WEIGHT_RATIOS: MacroRatios = MacroRatios { protein: 0.35, carbs: 0.35, fat: 0.30 };
const GAIN_MUSCLE_RATIOS: MacroRatios = MacroRatios { protein: 0.30, carbs: 0.45, fat: 0.25 };
const MAINTAIN_RATIOS: MacroRatios = MacroRatios { protein: 0.25, carbs: 0.45, fat: 0.30 };

impl MacroRatios {
    /// Ratio table lookup; goals without their own split use maintenance ratios
    pub fn for_goal(goal: HealthGoal) -> Self {
        match goal {
            HealthGoal::LoseWeight => LOSE_WEIGHT_RATIOS,
            HealthGoal::GainMuscle => GAIN_MUSCLE_RATIOS,
            HealthGoal::AggressiveLoss | HealthGoal::Maintain => MAINTAIN_RATIOS,
        }
    }
}

/// Grams and share of calories for one macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroAmount {
    pub grams: i32,
    pub percentage: i32,
}

impl MacroAmount {
    fn from_ratio(calories: i32, ratio: f64, kcal_per_gram: f64) -> Self {
        Self {
            grams: (f64::from(calories) * ratio / kcal_per_gram).round() as i32,
            percentage: (ratio * 100.0).round() as i32,
        }
    }
}

/// Suggested daily macro split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSuggestion {
    pub calories: i32,
    pub protein: MacroAmount,
    pub carbs: MacroAmount,
    pub fat: MacroAmount,
    pub recommendation: String,
}

impl MacroSuggestion {
    /// Calories implied by the gram amounts
    pub fn reconciled_calories(&self) -> f64 {
        f64::from(self.protein.grams) * KCAL_PER_GRAM_PROTEIN
            + f64::from(self.carbs.grams) * KCAL_PER_GRAM_CARBS
            + f64::from(self.fat.grams) * KCAL_PER_GRAM_FAT
    }
}

/// Descriptive protein target in g per kg of body weight
pub fn protein_per_kg(goal: HealthGoal) -> f64 {
    match goal {
        HealthGoal::GainMuscle => 2.2,
        HealthGoal::LoseWeight => 2.0,
        _ => 1.6,
    }
}

fn protein_purpose(goal: HealthGoal) -> &'static str {
    match goal {
        HealthGoal::GainMuscle => "optimal muscle growth",
        HealthGoal::LoseWeight => "muscle preservation during weight loss",
        _ => "general health",
    }
}

/// Build the macro suggestion for a goal and daily calorie target
pub fn suggest_macros(goal: HealthGoal, calories: i32) -> MacroSuggestion {
    let ratios = MacroRatios::for_goal(goal);

    MacroSuggestion {
        calories,
        protein: MacroAmount::from_ratio(calories, ratios.protein, KCAL_PER_GRAM_PROTEIN),
        carbs: MacroAmount::from_ratio(calories, ratios.carbs, KCAL_PER_GRAM_CARBS),
        fat: MacroAmount::from_ratio(calories, ratios.fat, KCAL_PER_GRAM_FAT),
        recommendation: format!(
            "Target {}g protein per kg body weight for {}",
            protein_per_kg(goal),
            protein_purpose(goal)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_lose_weight_split() {
        let macros = suggest_macros(HealthGoal::LoseWeight, 2000);
        assert_eq!(macros.protein, MacroAmount { grams: 175, percentage: 35 });
        assert_eq!(macros.carbs, MacroAmount { grams: 175, percentage: 35 });
        assert_eq!(macros.fat, MacroAmount { grams: 67, percentage: 30 });
        assert_eq!(
            macros.recommendation,
            "Target 2g protein per kg body weight for muscle preservation during weight loss"
        );
    }

    #[test]
    fn test_gain_muscle_split() {
        let macros = suggest_macros(HealthGoal::GainMuscle, 3000);
        assert_eq!(macros.protein.grams, 225);
        assert_eq!(macros.carbs.grams, 338);
        assert_eq!(macros.fat.grams, 83);
        assert!(macros.recommendation.contains("2.2g"));
    }

    #[rstest]
    #[case(HealthGoal::Maintain)]
    #[case(HealthGoal::AggressiveLoss)]
    fn test_maintenance_ratios_are_the_fallback(#[case] goal: HealthGoal) {
        assert_eq!(MacroRatios::for_goal(goal), MAINTAIN_RATIOS);
        let macros = suggest_macros(goal, 2400);
        assert_eq!(macros.protein.percentage, 25);
        assert_eq!(macros.carbs.percentage, 45);
        assert_eq!(macros.fat.percentage, 30);
        assert!(macros.recommendation.contains("1.6g"));
    }

    #[rstest]
    #[case(HealthGoal::LoseWeight, 2000, 2003.0)]
    #[case(HealthGoal::Maintain, 2798, 2797.0)]
    fn test_reconciled_calories(#[case] goal: HealthGoal, #[case] calories: i32, #[case] expected: f64) {
        assert_eq!(suggest_macros(goal, calories).reconciled_calories(), expected);
    }

    #[test]
    fn test_ratio_tables_sum_to_one() {
        for goal in HealthGoal::ALL {
            let r = MacroRatios::for_goal(goal);
            assert!((r.protein + r.carbs + r.fat - 1.0).abs() < 1e-9);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: grams converted back to kcal land within rounding of the target
        ///
        /// Half a gram of rounding per macro bounds the drift at 2 + 2 + 4.5 kcal.
        #[test]
        fn prop_macros_reconcile_with_calories(
            calories in 1200i32..6000,
            goal_idx in 0usize..4
        ) {
            let macros = suggest_macros(HealthGoal::ALL[goal_idx], calories);
            let diff = (macros.reconciled_calories() - f64::from(calories)).abs();
            prop_assert!(diff <= MAX_ROUNDING_DRIFT_KCAL + 1e-9, "reconciled {} vs {}", macros.reconciled_calories(), calories);
        }
    }
}

//! Qualitative health insights attached to a calculation

use crate::energy::calculate_bmi;
use crate::engine::{CalculationInput, FormulaResult};

pub const UNDERWEIGHT_NOTE: &str =
    "Your BMI suggests you're underweight. Focus on nutrient-dense foods.";
pub const OBESITY_NOTE: &str =
    "Your BMI suggests obesity. Gradual weight loss is recommended for health benefits.";
pub const OVERWEIGHT_NOTE: &str =
    "Your BMI suggests overweight. Moderate calorie deficit advised.";
pub const OLDER_ADULT_NOTE: &str =
    "As you age, ensure adequate protein intake to preserve muscle mass.";
pub const YOUNG_ADULT_NOTE: &str =
    "Young adults have higher metabolic rates - this is optimal for building habits.";
pub const BELOW_BMR_WARNING: &str =
    "Warning: Target calories below BMR. This is not sustainable long-term.";

fn bmi_note(bmi: f64) -> Option<&'static str> {
    if bmi < 18.5 {
        Some(UNDERWEIGHT_NOTE)
    } else if bmi >= 30.0 {
        Some(OBESITY_NOTE)
    } else if bmi >= 25.0 {
        Some(OVERWEIGHT_NOTE)
    } else {
        None
    }
}

fn age_note(age_years: u32) -> Option<&'static str> {
    if age_years > 65 {
        Some(OLDER_ADULT_NOTE)
    } else if age_years < 25 {
        Some(YOUNG_ADULT_NOTE)
    } else {
        None
    }
}

/// Advisory notes for the selected result, in BMI, age, safety order
///
/// Each check contributes at most one note; an empty list is a valid answer.
pub fn health_insights(input: &CalculationInput, selected: &FormulaResult) -> Vec<String> {
    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    let below_bmr = f64::from(selected.target_calories) < selected.bmr;

    [
        bmi_note(bmi),
        age_note(input.age_years),
        below_bmr.then_some(BELOW_BMR_WARNING),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect()
}

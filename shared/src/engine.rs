//! Calorie engine
//!
//! Runs every applicable BMR formula over one validated input, picks the
//! authoritative result and derives the target, macros, weekly cycling
//! plans and insights from it.
//!
//! The engine holds no state: identical input always yields identical output.

use crate::energy::{
    harris_benedict, katch_mcardle, lean_body_mass, mifflin_st_jeor, tdee, ActivityLevel,
    BiologicalSex, BmrFormula,
};
use crate::errors::{EngineError, EngineResult};
use crate::insights::health_insights;
use crate::macros::{suggest_macros, MacroSuggestion};
use crate::targets::{target_calories, HealthGoal};
use crate::validation::{
    validate_age_years, validate_body_fat_percent, validate_height_cm, validate_weight_kg,
};
use crate::zigzag::{zigzag_options, ZigzagOptions};
use serde::{Deserialize, Serialize};

/// Validated physiological and goal record for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: BiologicalSex,
    pub activity_level: ActivityLevel,
    pub health_goal: HealthGoal,
    /// Only set when strictly between 0 and 100
    pub body_fat_percent: Option<f64>,
    pub preferred_formula: BmrFormula,
}

/// Output of a single BMR formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaResult {
    pub formula: BmrFormula,
    pub formula_name: String,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: i32,
    pub explanation: String,
    pub accuracy: String,
}

/// Complete result of a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    pub formula: BmrFormula,
    pub formula_name: String,
    pub accuracy: String,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: i32,
    pub explanation: String,
    pub all_results: Vec<FormulaResult>,
    pub macro_suggestion: MacroSuggestion,
    pub zigzag_options: ZigzagOptions,
    pub health_insights: Vec<String>,
}

/// Mifflin-only estimate for clients that cannot reach the full engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackEstimate {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: i32,
}

fn equation_text(formula: BmrFormula, input: &CalculationInput) -> String {
    let (w, h, a) = (input.weight_kg, input.height_cm, input.age_years);
    match (formula, input.sex) {
        (BmrFormula::Mifflin, BiologicalSex::Male) => {
            format!("Formula: (10 × {w}kg) + (6.25 × {h}cm) − (5 × {a}y) + 5")
        }
        (BmrFormula::Mifflin, BiologicalSex::Female) => {
            format!("Formula: (10 × {w}kg) + (6.25 × {h}cm) − (5 × {a}y) − 161")
        }
        (BmrFormula::Harris, BiologicalSex::Male) => format!(
            "Formula: (13.397 × {w}kg) + (4.799 × {h}cm) − (5.677 × {a}y) + 88.362"
        ),
        (BmrFormula::Harris, BiologicalSex::Female) => format!(
            "Formula: (9.247 × {w}kg) + (3.098 × {h}cm) − (4.330 × {a}y) + 447.593"
        ),
        (BmrFormula::Katch, _) => {
            let lbm = input
                .body_fat_percent
                .map(|bf| lean_body_mass(w, bf))
                .unwrap_or(w);
            format!("Formula: 370 + (21.6 × {lbm:.1}kg LBM)")
        }
    }
}

fn formula_result(formula: BmrFormula, bmr: f64, input: &CalculationInput) -> FormulaResult {
    let daily = tdee(bmr, input.activity_level);
    FormulaResult {
        formula,
        formula_name: formula.display_name().to_string(),
        bmr,
        tdee: daily,
        target_calories: target_calories(daily, input.health_goal, input.sex),
        explanation: format!(
            "{}: {} {}",
            formula.display_name(),
            formula.summary(),
            equation_text(formula, input)
        ),
        accuracy: formula.accuracy_label().to_string(),
    }
}

/// Run every applicable formula
///
/// Order is Mifflin-St Jeor, Harris-Benedict, then Katch-McArdle when a
/// body fat percentage is present.
pub fn compute_formula_results(input: &CalculationInput) -> Vec<FormulaResult> {
    let (sex, w, h, a) = (input.sex, input.weight_kg, input.height_cm, input.age_years);

    let mut results = vec![
        formula_result(BmrFormula::Mifflin, mifflin_st_jeor(sex, w, h, a), input),
        formula_result(BmrFormula::Harris, harris_benedict(sex, w, h, a), input),
    ];

    if let Some(body_fat) = input.body_fat_percent.filter(|bf| *bf > 0.0 && *bf < 100.0) {
        results.push(formula_result(BmrFormula::Katch, katch_mcardle(w, body_fat), input));
    }

    results
}

/// Pick the authoritative result for the caller's preferred formula
///
/// Harris and Katch are honored when present; everything else, including a
/// Katch request without body fat, resolves to the first (Mifflin) result.
pub fn select_formula(results: &[FormulaResult], preferred: BmrFormula) -> Option<&FormulaResult> {
    let wanted = match preferred {
        BmrFormula::Harris | BmrFormula::Katch => {
            results.iter().find(|r| r.formula == preferred)
        }
        BmrFormula::Mifflin => None,
    };
    wanted.or_else(|| results.first())
}

/// Multi-line explanation of the selected result
pub fn detailed_explanation(selected: &FormulaResult, input: &CalculationInput) -> String {
    let minimum = match input.sex {
        BiologicalSex::Male => "1,500",
        BiologicalSex::Female => "1,200",
    };

    let mut explanation = format!("**{} Formula Used**\n\n", selected.formula_name);
    explanation.push_str(&format!(
        "**Basal Metabolic Rate (BMR):** {} calories/day\n",
        selected.bmr.round()
    ));
    explanation.push_str(&format!(
        "**Total Daily Energy Expenditure (TDEE):** {} calories/day\n",
        selected.tdee.round()
    ));
    explanation.push_str(&format!(
        "**Activity Level:** {}\n",
        input.activity_level.description()
    ));
    explanation.push_str(&format!("**Goal:** {}\n\n", input.health_goal.description()));
    explanation.push_str(&format!(
        "**Recommended Daily Target:** {} calories\n\n",
        selected.target_calories
    ));
    explanation.push_str("**Safety Notes:**\n");
    explanation.push_str(&format!("• Minimum safe intake: {minimum} calories/day\n"));
    explanation.push_str("• Safe weight loss: 0.5-1kg per week (250-750 calorie deficit)\n");
    explanation.push_str("• Muscle gain: 200-500 calorie surplus recommended\n");
    explanation.push_str("• Consult healthcare provider for extreme diets");
    explanation
}

fn ensure_sane(result: &FormulaResult) -> EngineResult<()> {
    if !result.bmr.is_finite() || !result.tdee.is_finite() {
        return Err(EngineError::Computation(format!(
            "{} produced a non-finite value",
            result.formula_name
        )));
    }
    if result.bmr <= 0.0 {
        return Err(EngineError::Computation(format!(
            "{} produced a non-positive BMR ({:.1}) for these measurements",
            result.formula_name, result.bmr
        )));
    }
    Ok(())
}

fn validate_measurements(weight_kg: f64, height_cm: f64, age_years: u32) -> EngineResult<()> {
    validate_weight_kg(weight_kg).map_err(|msg| EngineError::invalid("weight", msg))?;
    validate_height_cm(height_cm).map_err(|msg| EngineError::invalid("height", msg))?;
    validate_age_years(f64::from(age_years)).map_err(|msg| EngineError::invalid("age", msg))?;
    Ok(())
}

fn validate_input(input: &CalculationInput) -> EngineResult<()> {
    validate_measurements(input.weight_kg, input.height_cm, input.age_years)?;
    if let Some(body_fat) = input.body_fat_percent {
        validate_body_fat_percent(body_fat).map_err(|msg| EngineError::invalid("bodyFat", msg))?;
    }
    Ok(())
}

/// Run the full calculation
///
/// Inputs built by hand rather than through `CalculateCaloriesRequest` are
/// checked against the same ranges and rejected with `InvalidInput`.
pub fn calculate(input: &CalculationInput) -> EngineResult<CalculationOutput> {
    validate_input(input)?;

    let all_results = compute_formula_results(input);
    for result in &all_results {
        ensure_sane(result)?;
    }

    let selected = select_formula(&all_results, input.preferred_formula)
        .ok_or_else(|| EngineError::Computation("No formula results produced".to_string()))?
        .clone();

    let macro_suggestion = suggest_macros(input.health_goal, selected.target_calories);
    let zigzag = zigzag_options(selected.tdee, input.health_goal);
    let insights = health_insights(input, &selected);
    let explanation = detailed_explanation(&selected, input);

    Ok(CalculationOutput {
        formula: selected.formula,
        formula_name: selected.formula_name,
        accuracy: selected.accuracy,
        bmr: selected.bmr,
        tdee: selected.tdee,
        target_calories: selected.target_calories,
        explanation,
        all_results,
        macro_suggestion,
        zigzag_options: zigzag,
        health_insights: insights,
    })
}

/// Mifflin-St Jeor only estimate
///
/// Uses the same target rules and floor as the full engine so the numbers
/// line up with `CalculationOutput` when substituted for it. Measurements
/// are range-checked and a non-positive BMR is a `Computation` error.
pub fn fallback_estimate(
    sex: BiologicalSex,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    activity_level: ActivityLevel,
    health_goal: HealthGoal,
) -> EngineResult<FallbackEstimate> {
    validate_measurements(weight_kg, height_cm, age_years)?;

    let bmr = mifflin_st_jeor(sex, weight_kg, height_cm, age_years);
    let daily = tdee(bmr, activity_level);
    if !bmr.is_finite() || !daily.is_finite() || bmr <= 0.0 {
        return Err(EngineError::Computation(format!(
            "Mifflin-St Jeor produced an unusable BMR ({bmr:.1}) for these measurements"
        )));
    }

    Ok(FallbackEstimate {
        bmr,
        tdee: daily,
        target_calories: target_calories(daily, health_goal, sex),
    })
}

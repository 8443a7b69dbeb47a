//! API request and response types

use crate::energy::{ActivityLevel, BiologicalSex, BmrFormula};
use crate::engine::{CalculationInput, CalculationOutput, FormulaResult};
use crate::errors::{EngineError, EngineResult};
use crate::macros::MacroSuggestion;
use crate::targets::HealthGoal;
use crate::validation::{
    get_field_display_label, validate_age_years, validate_body_fat_percent, validate_height_cm,
    validate_weight_kg,
};
use crate::zigzag::ZigzagOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Calculation
// ============================================================================

/// A numeric field as sent by clients: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    fn to_f64(&self, field: &str) -> EngineResult<f64> {
        match self {
            NumericField::Number(n) => Ok(*n),
            NumericField::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                EngineError::invalid(field, format!("{} must be a number", get_field_display_label(field)))
            }),
        }
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        NumericField::Number(value)
    }
}

/// Request body for the calorie calculation
///
/// Every field is optional at the wire level so that a missing field turns
/// into a descriptive validation error instead of a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateCaloriesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<NumericField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<NumericField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<NumericField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<NumericField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

fn required_number(value: Option<&NumericField>, field: &str) -> EngineResult<f64> {
    value
        .ok_or_else(|| {
            EngineError::invalid(field, format!("{} is required", get_field_display_label(field)))
        })?
        .to_f64(field)
}

fn checked(field: &str, result: Result<(), String>) -> EngineResult<()> {
    result.map_err(|msg| EngineError::invalid(field, msg))
}

impl CalculateCaloriesRequest {
    /// Validate the request and build the engine input
    ///
    /// Weight, height, age and gender are required. Unknown activity levels,
    /// goals and formulas fall back to their defaults; a body fat value that
    /// is not a number or lies outside (0, 100) is ignored.
    pub fn into_input(&self) -> EngineResult<CalculationInput> {
        let weight_kg = required_number(self.weight.as_ref(), "weight")?;
        checked("weight", validate_weight_kg(weight_kg))?;

        let height_cm = required_number(self.height.as_ref(), "height")?;
        checked("height", validate_height_cm(height_cm))?;

        let age = required_number(self.age.as_ref(), "age")?;
        let age_years = validate_age_years(age).map_err(|msg| EngineError::invalid("age", msg))?;

        let sex: BiologicalSex = self
            .gender
            .as_deref()
            .ok_or_else(|| EngineError::invalid("gender", "Gender is required"))?
            .parse()
            .map_err(|msg: String| EngineError::invalid("gender", msg))?;

        let body_fat_percent = self
            .body_fat
            .as_ref()
            .and_then(|raw| raw.to_f64("bodyFat").ok())
            .filter(|value| validate_body_fat_percent(*value).is_ok());

        Ok(CalculationInput {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_level: ActivityLevel::parse_or_default(self.activity_level.as_deref()),
            health_goal: HealthGoal::parse_or_default(self.health_goal.as_deref()),
            body_fat_percent,
            preferred_formula: BmrFormula::parse_or_default(self.formula.as_deref()),
        })
    }

    /// Optional fields that were sent but not recognized, so a default was used
    pub fn defaulted_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.activity_level.as_deref().is_some_and(|v| ActivityLevel::parse(v).is_none()) {
            fields.push("activityLevel");
        }
        if self.health_goal.as_deref().is_some_and(|v| HealthGoal::parse(v).is_none()) {
            fields.push("healthGoal");
        }
        if self
            .formula
            .as_deref()
            .is_some_and(|v| !matches!(v.trim().to_lowercase().as_str(), "mifflin" | "harris" | "katch"))
        {
            fields.push("formula");
        }
        fields
    }
}

/// Response body for a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateCaloriesResponse {
    pub target_calories: i32,
    /// Rounded for display
    pub bmr: i32,
    /// Rounded for display
    pub tdee: i32,
    pub formula: String,
    pub accuracy: String,
    pub explanation: String,
    pub all_results: Vec<FormulaResult>,
    pub zigzag_options: ZigzagOptions,
    pub macro_suggestions: MacroSuggestion,
    pub health_insights: Vec<String>,
}

impl From<CalculationOutput> for CalculateCaloriesResponse {
    fn from(output: CalculationOutput) -> Self {
        Self {
            target_calories: output.target_calories,
            bmr: output.bmr.round() as i32,
            tdee: output.tdee.round() as i32,
            formula: output.formula_name,
            accuracy: output.accuracy,
            explanation: output.explanation,
            all_results: output.all_results,
            zigzag_options: output.zigzag_options,
            macro_suggestions: output.macro_suggestion,
            health_insights: output.health_insights,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Profile target
// ============================================================================

/// Manually set a daily calorie target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTargetCaloriesRequest {
    #[validate(range(min = 800, max = 10000, message = "Daily calorie target must be between 800 and 10000"))]
    pub target_calories: i32,
}

/// Stored daily calorie target for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTargetResponse {
    pub user_id: String,
    pub target_calories: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CalculateCaloriesRequest {
        serde_json::from_value(value).unwrap()
    }

    fn full() -> serde_json::Value {
        json!({
            "weight": 80,
            "height": 180,
            "age": 30,
            "gender": "male",
            "activityLevel": "moderate",
            "healthGoal": "maintain"
        })
    }

    #[test]
    fn test_full_request_converts() {
        let input = request(full()).into_input().unwrap();
        assert_eq!(input.weight_kg, 80.0);
        assert_eq!(input.height_cm, 180.0);
        assert_eq!(input.age_years, 30);
        assert_eq!(input.sex, BiologicalSex::Male);
        assert_eq!(input.activity_level, ActivityLevel::Moderate);
        assert_eq!(input.health_goal, HealthGoal::Maintain);
        assert_eq!(input.body_fat_percent, None);
        assert_eq!(input.preferred_formula, BmrFormula::Mifflin);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let mut body = full();
        body["weight"] = json!("72.5");
        body["age"] = json!(" 41 ");
        let input = request(body).into_input().unwrap();
        assert_eq!(input.weight_kg, 72.5);
        assert_eq!(input.age_years, 41);
    }

    #[test]
    fn test_missing_required_fields() {
        for field in ["weight", "height", "age", "gender"] {
            let mut body = full();
            body.as_object_mut().unwrap().remove(field);
            let err = request(body).into_input().unwrap_err();
            assert_eq!(err.field(), Some(field), "missing {field}");
        }
    }

    #[test]
    fn test_non_numeric_weight_rejected() {
        let mut body = full();
        body["weight"] = json!("heavy");
        let err = request(body).into_input().unwrap_err();
        assert_eq!(err, EngineError::invalid("weight", "Weight must be a number"));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let mut body = full();
        body["height"] = json!(0);
        assert_eq!(request(body).into_input().unwrap_err().field(), Some("height"));

        let mut body = full();
        body["age"] = json!(-3);
        assert_eq!(request(body).into_input().unwrap_err().field(), Some("age"));
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let mut body = full();
        body["gender"] = json!("robot");
        assert_eq!(request(body).into_input().unwrap_err().field(), Some("gender"));
    }

    #[test]
    fn test_unknown_enums_default() {
        let mut body = full();
        body["activityLevel"] = json!("marathoner");
        body["healthGoal"] = json!("bulk");
        body["formula"] = json!("cunningham");
        let req = request(body);
        let input = req.into_input().unwrap();

        assert_eq!(input.activity_level, ActivityLevel::Moderate);
        assert_eq!(input.health_goal, HealthGoal::Maintain);
        assert_eq!(input.preferred_formula, BmrFormula::Mifflin);
        assert_eq!(req.defaulted_fields(), vec!["activityLevel", "healthGoal", "formula"]);
    }

    #[test]
    fn test_body_fat_out_of_range_is_ignored() {
        let mut body = full();
        body["bodyFat"] = json!(0);
        assert_eq!(request(body).into_input().unwrap().body_fat_percent, None);

        let mut body = full();
        body["bodyFat"] = json!(100);
        assert_eq!(request(body).into_input().unwrap().body_fat_percent, None);

        let mut body = full();
        body["bodyFat"] = json!(18.5);
        assert_eq!(request(body).into_input().unwrap().body_fat_percent, Some(18.5));
    }

    #[test]
    fn test_non_numeric_body_fat_is_ignored() {
        let mut body = full();
        body["bodyFat"] = json!("abc");
        body["formula"] = json!("katch");
        let input = request(body).into_input().unwrap();
        assert_eq!(input.body_fat_percent, None);

        let output = crate::engine::calculate(&input).unwrap();
        assert_eq!(output.formula, BmrFormula::Mifflin);
        assert_eq!(output.all_results.len(), 2);
    }

    #[test]
    fn test_response_shape() {
        let input = request(full()).into_input().unwrap();
        let output = crate::engine::calculate(&input).unwrap();
        let value = serde_json::to_value(CalculateCaloriesResponse::from(output)).unwrap();

        assert_eq!(value["targetCalories"], 2759);
        assert_eq!(value["bmr"], 1780);
        assert_eq!(value["tdee"], 2759);
        assert_eq!(value["formula"], "Mifflin-St Jeor");
        assert_eq!(value["allResults"][0]["formulaName"], "Mifflin-St Jeor");
        let tdee = value["allResults"][0]["tdee"].as_f64().unwrap();
        assert!((tdee - 2759.0).abs() < 1e-9);
        assert_eq!(value["macroSuggestions"]["protein"]["percentage"], 25);
        assert_eq!(value["zigzagOptions"]["plan1"]["name"], "Weekend Higher");
        assert!(value["healthInsights"].is_array());
    }

    #[test]
    fn test_update_target_validation() {
        assert!(UpdateTargetCaloriesRequest { target_calories: 2000 }.validate().is_ok());
        assert!(UpdateTargetCaloriesRequest { target_calories: 500 }.validate().is_err());
        assert!(UpdateTargetCaloriesRequest { target_calories: 20_000 }.validate().is_err());
    }
}

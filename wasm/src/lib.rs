//! Calorie Planner WASM Module
//!
//! Browser-side estimates for when the calculation endpoint is unreachable.
//! Numbers match the server because both run the shared engine.

use calorie_planner_shared::{
    calculate, energy, fallback_estimate, ActivityLevel, BiologicalSex, CalculateCaloriesRequest,
    CalculateCaloriesResponse, EngineError, ErrorBody, HealthGoal,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Mifflin-St Jeor estimate exposed to JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: i32,
}

/// Quick Mifflin-St Jeor estimate
///
/// Returns `undefined` when `sex` is not recognized or the measurements
/// are out of range or not numbers. Unknown activity levels and goals use
/// the same defaults as the server.
#[wasm_bindgen]
pub fn estimate_calories(
    sex: &str,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    activity_level: &str,
    health_goal: &str,
) -> Option<Estimate> {
    let sex: BiologicalSex = sex.parse().ok()?;
    let estimate = fallback_estimate(
        sex,
        weight_kg,
        height_cm,
        age_years,
        ActivityLevel::parse_or_default(Some(activity_level)),
        HealthGoal::parse_or_default(Some(health_goal)),
    )
    .ok()?;
    Some(Estimate {
        bmr: estimate.bmr,
        tdee: estimate.tdee,
        target_calories: estimate.target_calories,
    })
}

/// Run the full engine on a request body and return the response JSON
///
/// Failures come back as `{ "error", "code" }`, the same body the server sends.
#[wasm_bindgen]
pub fn calculate_offline(request_json: &str) -> String {
    let result = serde_json::from_str::<CalculateCaloriesRequest>(request_json)
        .map_err(|e| error_body(e.to_string(), "BAD_REQUEST"))
        .and_then(|req| {
            req.into_input()
                .and_then(|input| calculate(&input))
                .map(CalculateCaloriesResponse::from)
                .map_err(|e| match e {
                    EngineError::InvalidInput { .. } => error_body(e.to_string(), "VALIDATION_ERROR"),
                    EngineError::Computation(_) => error_body(e.to_string(), "INTERNAL_ERROR"),
                })
        });

    match result {
        Ok(response) => to_json(&response),
        Err(body) => to_json(&body),
    }
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    energy::calculate_bmi(weight_kg, height_cm)
}

fn error_body(error: String, code: &str) -> ErrorBody {
    ErrorBody {
        error,
        code: code.to_string(),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| {
        r#"{"error":"Failed to serialize result","code":"INTERNAL_ERROR"}"#.to_string()
    })
}

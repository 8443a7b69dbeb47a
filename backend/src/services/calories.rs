//! Calorie calculation service
//!
//! Thin wrapper around the shared engine that adds request logging.

use crate::config::CalculatorConfig;
use crate::error::ApiError;
use calorie_planner_shared::{calculate, CalculateCaloriesRequest, CalculateCaloriesResponse};
use tracing::{info, warn};

/// Calorie calculation service
pub struct CalorieService;

impl CalorieService {
    /// Validate the request, run the engine and build the wire response
    pub fn calculate(
        config: &CalculatorConfig,
        request: &CalculateCaloriesRequest,
    ) -> Result<CalculateCaloriesResponse, ApiError> {
        let input = request.into_input()?;

        if config.log_inputs {
            info!(
                weight_kg = input.weight_kg,
                height_cm = input.height_cm,
                age = input.age_years,
                sex = %input.sex,
                activity = input.activity_level.as_str(),
                goal = input.health_goal.as_str(),
                formula = %input.preferred_formula,
                body_fat = ?input.body_fat_percent,
                "Calculating calories"
            );
        } else {
            info!(
                activity = input.activity_level.as_str(),
                goal = input.health_goal.as_str(),
                formula = %input.preferred_formula,
                "Calculating calories"
            );
        }

        for field in request.defaulted_fields() {
            warn!(field, "Unrecognized value, using default");
        }

        let output = calculate(&input)?;

        info!(
            formula = %output.formula,
            bmr = output.bmr,
            tdee = output.tdee,
            target_calories = output.target_calories,
            "Calculation complete"
        );

        Ok(output.into())
    }
}

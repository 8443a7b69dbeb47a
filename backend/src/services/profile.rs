//! Profile service - stored daily calorie targets

use crate::config::CalculatorConfig;
use crate::error::ApiError;
use crate::repositories::{ProfileRepository, ProfileTargetRecord};
use crate::services::CalorieService;
use calorie_planner_shared::{
    CalculateCaloriesRequest, CalculateCaloriesResponse, ProfileTargetResponse,
    UpdateTargetCaloriesRequest,
};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

impl From<ProfileTargetRecord> for ProfileTargetResponse {
    fn from(record: ProfileTargetRecord) -> Self {
        Self {
            user_id: record.user_id.to_string(),
            target_calories: record.target_calories,
            formula: record.formula,
            updated_at: record.updated_at,
        }
    }
}

/// Profile service for calorie target operations
pub struct ProfileService;

impl ProfileService {
    /// Get the stored target
    pub async fn get_target(db: &PgPool, user_id: Uuid) -> Result<ProfileTargetResponse, ApiError> {
        ProfileRepository::get_target(db, user_id)
            .await
            .map_err(ApiError::Internal)?
            .map(Into::into)
            .ok_or_else(|| ApiError::NotFound("No calorie target set".to_string()))
    }

    /// Store a target chosen by the user
    pub async fn set_target(
        db: &PgPool,
        user_id: Uuid,
        req: UpdateTargetCaloriesRequest,
    ) -> Result<ProfileTargetResponse, ApiError> {
        req.validate()?;

        let record = ProfileRepository::upsert_target_calories(db, user_id, req.target_calories, None)
            .await
            .map_err(ApiError::Internal)?;

        info!(%user_id, target_calories = record.target_calories, "Calorie target updated");
        Ok(record.into())
    }

    /// Run a calculation and store its target
    pub async fn calculate_and_store(
        db: &PgPool,
        config: &CalculatorConfig,
        user_id: Uuid,
        req: &CalculateCaloriesRequest,
    ) -> Result<CalculateCaloriesResponse, ApiError> {
        let response = CalorieService::calculate(config, req)?;

        ProfileRepository::upsert_target_calories(
            db,
            user_id,
            response.target_calories,
            Some(response.formula.as_str()),
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(%user_id, target_calories = response.target_calories, "Calculated calorie target stored");
        Ok(response)
    }
}

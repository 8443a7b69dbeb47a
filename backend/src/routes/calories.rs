//! Calorie calculation API routes

use crate::error::ApiResult;
use crate::services::CalorieService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use calorie_planner_shared::{CalculateCaloriesRequest, CalculateCaloriesResponse};

/// Create calculation routes
pub fn calorie_routes() -> Router<AppState> {
    Router::new().route("/calculate-calories", post(calculate_calories))
}

/// POST /api/v1/calculate-calories - Run the calorie engine
///
/// Open to anonymous callers. Malformed JSON is a 400, as is any input
/// the engine rejects.
async fn calculate_calories(
    State(state): State<AppState>,
    payload: Result<Json<CalculateCaloriesRequest>, JsonRejection>,
) -> ApiResult<Json<CalculateCaloriesResponse>> {
    let Json(req) = payload?;
    let response = CalorieService::calculate(&state.config().calculator, &req)?;
    Ok(Json(response))
}

//! Profile calorie target API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use calorie_planner_shared::{
    CalculateCaloriesRequest, CalculateCaloriesResponse, ProfileTargetResponse,
    UpdateTargetCaloriesRequest,
};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/target-calories", get(get_target).put(update_target))
        .route("/target-calories/calculate", post(calculate_target))
}

/// GET /api/v1/profile/target-calories - Get the stored target
async fn get_target(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileTargetResponse>> {
    let target = ProfileService::get_target(state.db(), auth.user_id).await?;
    Ok(Json(target))
}

/// PUT /api/v1/profile/target-calories - Set a target manually
async fn update_target(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<UpdateTargetCaloriesRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileTargetResponse>> {
    let Json(req) = payload?;
    let target = ProfileService::set_target(state.db(), auth.user_id, req).await?;
    Ok(Json(target))
}

/// POST /api/v1/profile/target-calories/calculate - Calculate and store a target
async fn calculate_target(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CalculateCaloriesRequest>, JsonRejection>,
) -> ApiResult<Json<CalculateCaloriesResponse>> {
    let Json(req) = payload?;
    let response = ProfileService::calculate_and_store(
        state.db(),
        &state.config().calculator,
        auth.user_id,
        &req,
    )
    .await?;
    Ok(Json(response))
}

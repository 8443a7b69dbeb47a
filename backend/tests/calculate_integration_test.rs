//! Integration tests for the calorie calculation endpoint

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_lose_weight_response() {
    let app = common::TestApp::stateless();

    let (status, body) = app
        .post(
            "/api/v1/calculate-calories",
            &json!({
                "weight": 80, "height": 180, "age": 30, "gender": "male",
                "activityLevel": "moderate", "healthGoal": "lose_weight"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    // 2759 - 551.8
    assert_eq!(body["targetCalories"], 2207);
    assert_eq!(body["macroSuggestions"]["protein"]["percentage"], 35);
    assert_eq!(body["zigzagOptions"]["plan1"]["name"], "3 High, 4 Low Days");
    assert_eq!(body["zigzagOptions"]["plan2"]["name"], "Alternating Pattern");
    assert!(body["explanation"].as_str().unwrap().contains("Mifflin-St Jeor"));
}

#[tokio::test]
async fn test_numeric_strings_accepted() {
    let app = common::TestApp::stateless();

    let (status, body) = app
        .post(
            "/api/v1/calculate-calories",
            &json!({ "weight": "80", "height": "180", "age": "30", "gender": "male" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["targetCalories"], 2759);
}

#[tokio::test]
async fn test_unknown_goal_falls_back_to_maintenance() {
    let app = common::TestApp::stateless();

    let (status, body) = app
        .post(
            "/api/v1/calculate-calories",
            &json!({
                "weight": 80, "height": 180, "age": 30, "gender": "male",
                "healthGoal": "bulk_up", "activityLevel": "couch"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["targetCalories"], 2759);
    assert_eq!(body["zigzagOptions"]["plan1"]["name"], "Weekend Higher");
}

#[tokio::test]
async fn test_negative_weight_rejected() {
    let app = common::TestApp::stateless();

    let (status, body) = app
        .post(
            "/api/v1/calculate-calories",
            &json!({ "weight": -80, "height": 180, "age": 30, "gender": "male" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid weight: Weight must be positive");
}

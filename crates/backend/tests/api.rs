// =============================================================================
// StorePulse Backend - HTTP API Tests
// =============================================================================
// Drives the full router in-process against a fresh store per test.
// =============================================================================

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use storepulse_backend::config::Config;
use storepulse_backend::store::{MemStorage, Storage};
use storepulse_backend::{create_router, AppState};

async fn seeded_app() -> Router {
    let store = MemStorage::seeded().await;
    create_router(AppState::new(Config::default(), Arc::new(store)))
}

fn empty_app() -> Router {
    let config = Config {
        seed_data: false,
        ..Config::default()
    };
    create_router(AppState::new(config, Arc::new(MemStorage::new())))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

fn new_recommendation(score: i64) -> Value {
    json!({
        "title": "Umbrellas",
        "description": "Rain expected this afternoon",
        "category": "Seasonal",
        "priority": "medium",
        "score": score,
        "expectedImpact": 500,
        "suggestedPlacement": "Front entrance",
        "inventoryImpact": "+25% demand",
        "timeSensitivity": "Next 3 hours"
    })
}

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[tokio::test]
async fn health_check() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".into()));
}

// -----------------------------------------------------------------------------
// Recommendations
// -----------------------------------------------------------------------------

#[tokio::test]
async fn seeded_recommendations_are_active_and_ranked() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/api/recommendations").await;

    assert_eq!(status, StatusCode::OK);
    let recs = body.as_array().unwrap();
    assert_eq!(recs.len(), 10);
    assert!(recs.iter().all(|r| r["isActive"] == true));
    assert_eq!(recs[0]["score"], 94);
    assert_eq!(recs[0]["title"], "Cold Beverages & Ice");
    assert_eq!(recs[0]["id"], 1);

    let scores: Vec<i64> = recs.iter().map(|r| r["score"].as_i64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn applying_moves_recommendation_to_history() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/recommendations/1",
        Some(json!({ "isActive": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isActive"], false);
    assert_eq!(body["title"], "Cold Beverages & Ice");

    let (_, active) = get(&app, "/api/recommendations").await;
    assert!(!ids(&active).contains(&1));
    assert_eq!(ids(&active).len(), 9);

    let (_, all) = get(&app, "/api/recommendations/all").await;
    let applied = all
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == 1)
        .unwrap();
    assert_eq!(applied["isActive"], false);

    let (_, reactivated) = send(
        &app,
        Method::PATCH,
        "/api/recommendations/1",
        Some(json!({ "isActive": true })),
    )
    .await;
    assert_eq!(reactivated["isActive"], true);
    let (_, active) = get(&app, "/api/recommendations").await;
    assert_eq!(ids(&active)[0], 1);
}

#[tokio::test]
async fn editing_fields_keeps_the_rest() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/recommendations/2",
        Some(json!({ "score": 99, "imageUrl": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 99);
    assert!(body["imageUrl"].is_null());
    assert_eq!(body["title"], "Summer Accessories");
    assert_eq!(body["isActive"], true);

    let (_, active) = get(&app, "/api/recommendations").await;
    assert_eq!(ids(&active)[0], 2);
}

#[tokio::test]
async fn patch_rejects_bad_input() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/recommendations/abc",
        Some(json!({ "isActive": false })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid recommendation ID");

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/recommendations/999",
        Some(json!({ "isActive": false })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/recommendations/1",
        Some(json!({ "score": "high" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/recommendations/1",
        Some(json!({ "score": 250 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_is_final() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/recommendations/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, Method::DELETE, "/api/recommendations/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/recommendations/3",
        Some(json!({ "isActive": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/api/recommendations/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = get(&app, "/api/recommendations/all").await;
    assert_eq!(all.as_array().unwrap().len(), 9);
    assert!(!ids(&all).contains(&3));
}

#[tokio::test]
async fn create_recommendation_validates_shape_and_range() {
    let app = seeded_app().await;

    let mut missing = new_recommendation(60);
    missing.as_object_mut().unwrap().remove("title");
    let (status, body) = send(&app, Method::POST, "/api/recommendations", Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid recommendation data");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/recommendations",
        Some(new_recommendation(150)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/recommendations",
        Some(new_recommendation(60)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 11);
    assert_eq!(created["isActive"], true);
    assert!(created["createdAt"].is_string());

    let (_, all) = get(&app, "/api/recommendations/all").await;
    assert_eq!(ids(&all)[0], 11);

    let (status, fetched) = get(&app, "/api/recommendations/11").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn non_json_body_is_a_bad_request() {
    let app = seeded_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/recommendations")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from("title=Umbrellas"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// -----------------------------------------------------------------------------
// Environmental data
// -----------------------------------------------------------------------------

#[tokio::test]
async fn current_reading_and_history() {
    let app = seeded_app().await;

    let (status, current) = get(&app, "/api/environmental/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["temperature"], 78.0);
    assert_eq!(current["humidity"], 65.0);
    assert_eq!(current["aqi"], 42);

    let (status, history) = get(&app, "/api/environmental/history/24").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&history), vec![1]);

    for bad in ["0", "-1", "abc", "2.5"] {
        let (status, body) = get(&app, &format!("/api/environmental/history/{}", bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "hours = {}", bad);
        assert_eq!(body["error"], "Invalid hours parameter");
    }
}

#[tokio::test]
async fn created_reading_becomes_current() {
    let app = seeded_app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/environmental",
        Some(json!({ "temperature": 71.5, "humidity": 40.0, "aqi": 55 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 2);

    let (_, current) = get(&app, "/api/environmental/current").await;
    assert_eq!(current, created);

    let (_, history) = get(&app, "/api/environmental/history/1").await;
    assert_eq!(ids(&history), vec![1, 2]);
}

#[tokio::test]
async fn create_reading_rejects_bad_payloads() {
    let app = seeded_app().await;

    for body in [
        json!({ "temperature": 71.5, "humidity": 40.0 }),
        json!({ "temperature": "warm", "humidity": 40.0, "aqi": 10 }),
        json!({ "temperature": 71.5, "humidity": 140.0, "aqi": 10 }),
    ] {
        let (status, _) = send(&app, Method::POST, "/api/environmental", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (_, history) = get(&app, "/api/environmental/history/24").await;
    assert_eq!(ids(&history), vec![1]);
}

#[tokio::test]
async fn simulate_walks_from_current_reading() {
    let app = seeded_app().await;

    let (status, next) = send(&app, Method::POST, "/api/environmental/simulate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(next["id"], 2);

    let temperature = next["temperature"].as_f64().unwrap();
    assert!((77.0..=79.0).contains(&temperature));
    let humidity = next["humidity"].as_f64().unwrap();
    assert!((62.5..=67.5).contains(&humidity));
    let aqi = next["aqi"].as_i64().unwrap();
    assert!((40..=45).contains(&aqi));

    let (_, current) = get(&app, "/api/environmental/current").await;
    assert_eq!(current, next);
}

#[tokio::test]
async fn empty_store_has_no_current_reading() {
    let app = empty_app();

    let request = Request::builder()
        .uri("/api/environmental/current")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty(), "expected no body, got {:?}", bytes);

    let (status, body) = send(&app, Method::POST, "/api/environmental/simulate", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No current data found");
}

// -----------------------------------------------------------------------------
// Demand trends
// -----------------------------------------------------------------------------

#[tokio::test]
async fn seeded_trends_cover_the_day() {
    let app = seeded_app().await;
    let (status, trends) = get(&app, "/api/trends/24").await;

    assert_eq!(status, StatusCode::OK);
    let hours: Vec<i64> = trends
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["hour"].as_i64().unwrap())
        .collect();
    assert_eq!(hours, vec![0, 3, 6, 9, 12, 15, 18, 21]);
    assert!(trends[0].get("salesVolume").is_some());
}

#[tokio::test]
async fn create_trend() {
    let app = seeded_app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/trends",
        Some(json!({ "hour": 4, "temperature": 63.0, "salesVolume": 95 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 9);

    let (_, trends) = get(&app, "/api/trends/24").await;
    assert_eq!(trends[2]["id"], 9);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/trends",
        Some(json!({ "hour": 30, "temperature": 63.0, "salesVolume": 95 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/trends/none").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// -----------------------------------------------------------------------------
// Users
// -----------------------------------------------------------------------------

#[tokio::test]
async fn signup_hides_password_and_rejects_duplicates() {
    let app = seeded_app().await;
    let signup = json!({ "username": "manager", "password": "s3cret" });

    let (status, user) = send(&app, Method::POST, "/api/users", Some(signup.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user, json!({ "id": 1, "username": "manager" }));

    let (status, body) = send(&app, Method::POST, "/api/users", Some(signup)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");

    let (status, fetched) = get(&app, "/api/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, user);

    let (status, _) = get(&app, "/api/users/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, "/api/users/me").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "username": "", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stored_password_is_hashed() {
    let store = Arc::new(MemStorage::seeded().await);
    let app = create_router(AppState::new(Config::default(), store.clone()));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "username": "clerk", "password": "plaintext" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let user = store.get_user_by_username("clerk").await.unwrap();
    assert_ne!(user.password, "plaintext");
    assert!(user.password.starts_with("$argon2"));
}

// -----------------------------------------------------------------------------
// Analytics
// -----------------------------------------------------------------------------

#[tokio::test]
async fn summary_tracks_applied_recommendations() {
    let app = seeded_app().await;
    send(
        &app,
        Method::PATCH,
        "/api/recommendations/1",
        Some(json!({ "isActive": false })),
    )
    .await;

    let (status, summary) = get(&app, "/api/analytics/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalRecommendations"], 10);
    assert_eq!(summary["appliedRecommendations"], 1);
    assert_eq!(summary["activeRecommendations"], 9);
    assert_eq!(summary["averageScore"], 77);
    assert_eq!(summary["byPriority"]["high"], 4);
}

#[tokio::test]
async fn layout_zones_exclude_applied_recommendations() {
    let app = seeded_app().await;
    send(
        &app,
        Method::PATCH,
        "/api/recommendations/1",
        Some(json!({ "isActive": false })),
    )
    .await;

    let (status, zones) = get(&app, "/api/layout/zones").await;
    assert_eq!(status, StatusCode::OK);
    let zones = zones.as_array().unwrap();
    assert_eq!(zones.len(), 6);
    assert_eq!(zones[0]["zone"], "Store Entrance");
    assert!(!ids(&zones[0]["recommendations"]).contains(&1));
}

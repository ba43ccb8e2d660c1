// =============================================================================
// StorePulse Backend - Recommendations API
// =============================================================================
// Dashboard listing, history listing, create, apply/reactivate/edit, delete
// =============================================================================

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use storepulse_common::{
    InsertRecommendation, Recommendation, RecommendationEdit, RecommendationUpdate, Validate,
};

use crate::error::ApiError;
use crate::params::parse_id;
use crate::AppState;

/// Active recommendations, highest score first.
pub async fn list_active(State(state): State<AppState>) -> Json<Vec<Recommendation>> {
    Json(state.store.get_active_recommendations().await)
}

/// Every recommendation, newest first.
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Recommendation>> {
    Json(state.store.get_all_recommendations().await)
}

pub async fn get_recommendation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recommendation>, ApiError> {
    let id = parse_id(&id, "recommendation")?;
    state
        .store
        .get_recommendation(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Recommendation not found"))
}

pub async fn create_recommendation(
    State(state): State<AppState>,
    payload: Result<Json<InsertRecommendation>, JsonRejection>,
) -> Result<Json<Recommendation>, ApiError> {
    let Json(rec) = payload.map_err(ApiError::invalid_body("Invalid recommendation data"))?;
    rec.validate()
        .map_err(ApiError::invalid_value("Invalid recommendation data"))?;

    let created = state.store.create_recommendation(rec).await;
    tracing::info!(id = created.id, title = %created.title, "Recommendation added");
    Ok(Json(created))
}

/// Partial update. `{"isActive": false}` applies, `{"isActive": true}`
/// reactivates, anything else edits the given fields.
pub async fn update_recommendation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecommendationEdit>, JsonRejection>,
) -> Result<Json<Recommendation>, ApiError> {
    let id = parse_id(&id, "recommendation")?;
    let Json(edit) = payload.map_err(ApiError::invalid_body("Invalid recommendation update"))?;
    edit.validate()
        .map_err(ApiError::invalid_value("Invalid recommendation update"))?;

    let update = RecommendationUpdate::from(edit);
    let kind = update.kind();
    let updated = state
        .store
        .update_recommendation(id, update)
        .await
        .ok_or_else(|| ApiError::not_found("Recommendation not found"))?;

    tracing::info!(id, kind, "Recommendation updated");
    Ok(Json(updated))
}

pub async fn delete_recommendation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&id, "recommendation")?;
    if !state.store.delete_recommendation(id).await {
        return Err(ApiError::not_found("Recommendation not found"));
    }

    tracing::info!(id, "Recommendation deleted");
    Ok(Json(serde_json::json!({ "success": true })))
}

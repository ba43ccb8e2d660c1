// =============================================================================
// StorePulse Backend - Demand Trends API
// =============================================================================

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use storepulse_common::{DemandTrend, InsertDemandTrend, Validate};

use crate::error::ApiError;
use crate::params::parse_hours;
use crate::AppState;

/// Trends dated within the last `hours` hours, ordered by hour of day.
pub async fn get_trends(
    State(state): State<AppState>,
    Path(hours): Path<String>,
) -> Result<Json<Vec<DemandTrend>>, ApiError> {
    let hours = parse_hours(&hours)?;
    Ok(Json(state.store.get_demand_trends(hours).await))
}

pub async fn create_trend(
    State(state): State<AppState>,
    payload: Result<Json<InsertDemandTrend>, JsonRejection>,
) -> Result<Json<DemandTrend>, ApiError> {
    let Json(trend) = payload.map_err(ApiError::invalid_body("Invalid trend data"))?;
    trend
        .validate()
        .map_err(ApiError::invalid_value("Invalid trend data"))?;

    Ok(Json(state.store.create_demand_trend(trend).await))
}

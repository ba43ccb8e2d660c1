// =============================================================================
// StorePulse Backend - Environmental API
// =============================================================================
// Current reading, history window, manual insert and the simulator step
// =============================================================================

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use storepulse_common::{EnvironmentalData, InsertEnvironmentalData, Validate};

use crate::error::ApiError;
use crate::params::parse_hours;
use crate::simulate::next_reading;
use crate::AppState;

/// Latest reading. An empty store answers 200 with no body.
pub async fn get_current(State(state): State<AppState>) -> Response {
    match state.store.get_current_environmental_data().await {
        Some(reading) => Json(reading).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

/// Readings from the last `hours` hours, oldest first.
pub async fn get_history(
    State(state): State<AppState>,
    Path(hours): Path<String>,
) -> Result<Json<Vec<EnvironmentalData>>, ApiError> {
    let hours = parse_hours(&hours)?;
    Ok(Json(state.store.get_environmental_data_history(hours).await))
}

/// Store a reading supplied by the caller.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<InsertEnvironmentalData>, JsonRejection>,
) -> Result<Json<EnvironmentalData>, ApiError> {
    let Json(data) = payload.map_err(ApiError::invalid_body("Invalid environmental data"))?;
    data.validate()
        .map_err(ApiError::invalid_value("Invalid environmental data"))?;

    Ok(Json(state.store.create_environmental_data(data).await))
}

/// Derive a new reading from the current one and store it.
pub async fn simulate(State(state): State<AppState>) -> Result<Json<EnvironmentalData>, ApiError> {
    let current = state
        .store
        .get_current_environmental_data()
        .await
        .ok_or_else(|| ApiError::not_found("No current data found"))?;

    let next = next_reading(&current, &mut rand::thread_rng());
    let created = state.store.create_environmental_data(next).await;
    tracing::debug!(
        id = created.id,
        temperature = created.temperature,
        humidity = created.humidity,
        aqi = created.aqi,
        "Simulated reading"
    );
    Ok(Json(created))
}

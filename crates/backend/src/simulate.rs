// =============================================================================
// StorePulse Backend - Reading Simulator
// =============================================================================
// Bounded random walk standing in for a live sensor feed.
// =============================================================================

use rand::Rng;
use storepulse_common::{EnvironmentalData, InsertEnvironmentalData};

/// Maximum temperature change per step, °F.
pub const TEMPERATURE_STEP: f64 = 1.0;
/// Maximum humidity change per step, percentage points.
pub const HUMIDITY_STEP: f64 = 2.5;
/// Maximum AQI change per step.
pub const AQI_STEP: f64 = 2.5;

pub const HUMIDITY_BOUNDS: (f64, f64) = (30.0, 90.0);
pub const AQI_BOUNDS: (f64, f64) = (10.0, 100.0);

/// Next reading derived from `current`.
///
/// Temperature drifts freely; humidity and AQI are clamped to their bounds.
pub fn next_reading<R: Rng + ?Sized>(current: &EnvironmentalData, rng: &mut R) -> InsertEnvironmentalData {
    let temperature = current.temperature + rng.gen_range(-TEMPERATURE_STEP..=TEMPERATURE_STEP);
    let humidity = (current.humidity + rng.gen_range(-HUMIDITY_STEP..=HUMIDITY_STEP))
        .clamp(HUMIDITY_BOUNDS.0, HUMIDITY_BOUNDS.1);
    let aqi = (f64::from(current.aqi) + rng.gen_range(-AQI_STEP..=AQI_STEP))
        .clamp(AQI_BOUNDS.0, AQI_BOUNDS.1)
        .round() as i32;

    InsertEnvironmentalData {
        temperature,
        humidity,
        aqi,
    }
}

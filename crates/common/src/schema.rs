//! Entity schema
//!
//! Every collection is keyed by an auto-assigned `i32` id. Field names on the
//! wire are camelCase, instants are RFC 3339 UTC strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Users
// =============================================================================

/// Dashboard account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Opaque credential; the API layer stores an Argon2 hash here.
    pub password: String,
}

/// Signup payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Environmental readings
// =============================================================================

/// One in-store sensor reading. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalData {
    pub id: i32,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    pub aqi: i32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertEnvironmentalData {
    pub temperature: f64,
    pub humidity: f64,
    pub aqi: i32,
}

// =============================================================================
// Recommendations
// =============================================================================

/// Urgency band shown on a recommendation card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Product-placement recommendation.
///
/// `is_active` splits the collection into the dashboard view (`true`) and the
/// applied history view (`false`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    /// Ranking score, 0-100.
    pub score: i32,
    /// Expected revenue impact in whole currency units.
    pub expected_impact: i32,
    pub suggested_placement: String,
    pub inventory_impact: String,
    pub time_sensitivity: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertRecommendation {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub score: i32,
    pub expected_impact: i32,
    pub suggested_placement: String,
    pub inventory_impact: String,
    pub time_sensitivity: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Absent or null means active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

// =============================================================================
// Demand trends
// =============================================================================

/// Hourly sales sample used for the demand/temperature chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandTrend {
    pub id: i32,
    /// Hour of day, 0-23. Not unique across dates.
    pub hour: i32,
    pub temperature: f64,
    pub sales_volume: i32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDemandTrend {
    pub hour: i32,
    pub temperature: f64,
    pub sales_volume: i32,
}

//! Repository for dashboard state
//!
//! ## Table of Contents
//! - **Storage**: Trait implemented by store backends
//! - **StoreError**: Failures a backend may report
//! - **MemStorage**: Process-lifetime in-memory backend
//! - **seed**: Bootstrap records loaded by `initialize`

mod memory;
pub mod seed;

use async_trait::async_trait;
use storepulse_common::{
    DemandTrend, EnvironmentalData, InsertDemandTrend, InsertEnvironmentalData,
    InsertRecommendation, InsertUser, Recommendation, RecommendationUpdate, User,
};
use thiserror::Error;

pub use memory::MemStorage;

/// Store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already taken: {0}")]
    UsernameTaken(String),
}

/// Query and mutation surface over the four collections.
///
/// Lookups return `None` for unknown ids; only user creation can fail.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load bootstrap records. Subsequent calls are no-ops.
    async fn initialize(&self);

    async fn get_user(&self, id: i32) -> Option<User>;

    async fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Insert a user, rejecting a duplicate username.
    async fn create_user(&self, user: InsertUser) -> Result<User, StoreError>;

    async fn get_environmental_data(&self, id: i32) -> Option<EnvironmentalData>;

    /// Reading with the latest timestamp.
    async fn get_current_environmental_data(&self) -> Option<EnvironmentalData>;

    async fn create_environmental_data(&self, data: InsertEnvironmentalData) -> EnvironmentalData;

    /// Readings from the last `hours` hours, oldest first.
    async fn get_environmental_data_history(&self, hours: u32) -> Vec<EnvironmentalData>;

    async fn get_recommendation(&self, id: i32) -> Option<Recommendation>;

    /// Active recommendations, highest score first.
    async fn get_active_recommendations(&self) -> Vec<Recommendation>;

    /// Every recommendation, newest first.
    async fn get_all_recommendations(&self) -> Vec<Recommendation>;

    async fn create_recommendation(&self, rec: InsertRecommendation) -> Recommendation;

    async fn update_recommendation(
        &self,
        id: i32,
        update: RecommendationUpdate,
    ) -> Option<Recommendation>;

    /// Remove permanently. Returns whether a record existed.
    async fn delete_recommendation(&self, id: i32) -> bool;

    async fn get_demand_trend(&self, id: i32) -> Option<DemandTrend>;

    /// Trends dated within the last `hours` hours, ordered by hour of day.
    async fn get_demand_trends(&self, hours: u32) -> Vec<DemandTrend>;

    async fn create_demand_trend(&self, trend: InsertDemandTrend) -> DemandTrend;

    /// Backend name for logging
    fn name(&self) -> &str;
}

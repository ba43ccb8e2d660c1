// =============================================================================
// StorePulse Backend - In-Memory Store
// =============================================================================
// Table of Contents:
// 1. Collections
// 2. MemStorage
// 3. Storage Implementation
// 4. Tests
// =============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use storepulse_common::{
    DemandTrend, EnvironmentalData, InsertDemandTrend, InsertEnvironmentalData,
    InsertRecommendation, InsertUser, Recommendation, RecommendationUpdate, User,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{seed, Storage, StoreError};

// -----------------------------------------------------------------------------
// 1. Collections
// -----------------------------------------------------------------------------

/// Records keyed by id. Ids start at 1 and are never reused, even after delete.
#[derive(Debug)]
struct Collection<T> {
    records: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Collection<T> {
    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn get(&self, id: i32) -> Option<T> {
        self.records.get(&id).cloned()
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Collection<User>,
    environmental: Collection<EnvironmentalData>,
    recommendations: Collection<Recommendation>,
    trends: Collection<DemandTrend>,
    seeded: bool,
}

impl Tables {
    fn insert_environmental(
        &mut self,
        data: InsertEnvironmentalData,
        now: DateTime<Utc>,
    ) -> EnvironmentalData {
        let id = self.environmental.allocate_id();
        let record = EnvironmentalData {
            id,
            temperature: data.temperature,
            humidity: data.humidity,
            aqi: data.aqi,
            timestamp: now,
        };
        self.environmental.records.insert(id, record.clone());
        record
    }

    fn insert_recommendation(
        &mut self,
        rec: InsertRecommendation,
        now: DateTime<Utc>,
    ) -> Recommendation {
        let id = self.recommendations.allocate_id();
        let record = Recommendation {
            id,
            title: rec.title,
            description: rec.description,
            category: rec.category,
            priority: rec.priority,
            score: rec.score,
            expected_impact: rec.expected_impact,
            suggested_placement: rec.suggested_placement,
            inventory_impact: rec.inventory_impact,
            time_sensitivity: rec.time_sensitivity,
            image_url: rec.image_url,
            is_active: rec.is_active.unwrap_or(true),
            created_at: now,
        };
        self.recommendations.records.insert(id, record.clone());
        record
    }

    fn insert_trend(&mut self, trend: InsertDemandTrend, now: DateTime<Utc>) -> DemandTrend {
        let id = self.trends.allocate_id();
        let record = DemandTrend {
            id,
            hour: trend.hour,
            temperature: trend.temperature,
            sales_volume: trend.sales_volume,
            date: now,
        };
        self.trends.records.insert(id, record.clone());
        record
    }
}

/// Start of a trailing window of `hours`, saturating at the earliest instant.
fn window_start(now: DateTime<Utc>, hours: u32) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::hours(i64::from(hours)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

// -----------------------------------------------------------------------------
// 2. MemStorage
// -----------------------------------------------------------------------------

/// In-memory store. Lives for the process lifetime only.
///
/// All collections sit behind one lock, so each operation observes and
/// mutates a consistent snapshot.
#[derive(Debug, Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already loaded with seed data
    pub async fn seeded() -> Self {
        let store = Self::new();
        store.initialize().await;
        store
    }
}

// -----------------------------------------------------------------------------
// 3. Storage Implementation
// -----------------------------------------------------------------------------

#[async_trait]
impl Storage for MemStorage {
    async fn initialize(&self) {
        let mut tables = self.tables.write().await;
        if tables.seeded {
            return;
        }

        let now = Utc::now();
        tables.insert_environmental(seed::environmental(), now);
        for rec in seed::recommendations() {
            tables.insert_recommendation(rec, now);
        }
        for trend in seed::demand_trends() {
            tables.insert_trend(trend, now);
        }
        tables.seeded = true;

        info!(
            readings = tables.environmental.records.len(),
            recommendations = tables.recommendations.records.len(),
            trends = tables.trends.records.len(),
            "Store seeded"
        );
    }

    async fn get_user(&self, id: i32) -> Option<User> {
        self.tables.read().await.users.get(id)
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let tables = self.tables.read().await;
        tables
            .users
            .records
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    async fn create_user(&self, user: InsertUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.records.values().any(|u| u.username == user.username) {
            return Err(StoreError::UsernameTaken(user.username));
        }

        let id = tables.users.allocate_id();
        let record = User {
            id,
            username: user.username,
            password: user.password,
        };
        tables.users.records.insert(id, record.clone());
        debug!(id, username = %record.username, "User created");
        Ok(record)
    }

    async fn get_environmental_data(&self, id: i32) -> Option<EnvironmentalData> {
        self.tables.read().await.environmental.get(id)
    }

    async fn get_current_environmental_data(&self) -> Option<EnvironmentalData> {
        let tables = self.tables.read().await;
        tables
            .environmental
            .records
            .values()
            .max_by_key(|d| (d.timestamp, d.id))
            .cloned()
    }

    async fn create_environmental_data(&self, data: InsertEnvironmentalData) -> EnvironmentalData {
        let record = self
            .tables
            .write()
            .await
            .insert_environmental(data, Utc::now());
        debug!(id = record.id, temperature = record.temperature, "Environmental reading stored");
        record
    }

    async fn get_environmental_data_history(&self, hours: u32) -> Vec<EnvironmentalData> {
        let start = window_start(Utc::now(), hours);
        let tables = self.tables.read().await;
        let mut history: Vec<EnvironmentalData> = tables
            .environmental
            .records
            .values()
            .filter(|d| d.timestamp >= start)
            .cloned()
            .collect();
        history.sort_by_key(|d| d.timestamp);
        history
    }

    async fn get_recommendation(&self, id: i32) -> Option<Recommendation> {
        self.tables.read().await.recommendations.get(id)
    }

    async fn get_active_recommendations(&self) -> Vec<Recommendation> {
        let tables = self.tables.read().await;
        let mut active: Vec<Recommendation> = tables
            .recommendations
            .records
            .values()
            .filter(|r| r.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.score.cmp(&a.score));
        active
    }

    async fn get_all_recommendations(&self) -> Vec<Recommendation> {
        let tables = self.tables.read().await;
        let mut all: Vec<Recommendation> = tables.recommendations.records.values().cloned().collect();
        all.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        all
    }

    async fn create_recommendation(&self, rec: InsertRecommendation) -> Recommendation {
        let record = self
            .tables
            .write()
            .await
            .insert_recommendation(rec, Utc::now());
        debug!(id = record.id, title = %record.title, "Recommendation created");
        record
    }

    async fn update_recommendation(
        &self,
        id: i32,
        update: RecommendationUpdate,
    ) -> Option<Recommendation> {
        let mut tables = self.tables.write().await;
        let record = tables.recommendations.records.get_mut(&id)?;
        let kind = update.kind();
        update.apply_to(record);
        debug!(id, kind, is_active = record.is_active, "Recommendation updated");
        Some(record.clone())
    }

    async fn delete_recommendation(&self, id: i32) -> bool {
        let removed = self
            .tables
            .write()
            .await
            .recommendations
            .records
            .remove(&id)
            .is_some();
        if removed {
            debug!(id, "Recommendation deleted");
        }
        removed
    }

    async fn get_demand_trend(&self, id: i32) -> Option<DemandTrend> {
        self.tables.read().await.trends.get(id)
    }

    async fn get_demand_trends(&self, hours: u32) -> Vec<DemandTrend> {
        let start = window_start(Utc::now(), hours);
        let tables = self.tables.read().await;
        let mut trends: Vec<DemandTrend> = tables
            .trends
            .records
            .values()
            .filter(|t| t.date >= start)
            .cloned()
            .collect();
        // Hour of day, not date: multi-day windows interleave.
        trends.sort_by_key(|t| t.hour);
        trends
    }

    async fn create_demand_trend(&self, trend: InsertDemandTrend) -> DemandTrend {
        let record = self.tables.write().await.insert_trend(trend, Utc::now());
        debug!(id = record.id, hour = record.hour, "Demand trend stored");
        record
    }

    fn name(&self) -> &str {
        "memory"
    }
}

// -----------------------------------------------------------------------------
// 4. Tests
// -----------------------------------------------------------------------------

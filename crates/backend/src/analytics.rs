// =============================================================================
// StorePulse Backend - Analytics & Layout API
// =============================================================================
// Table of Contents:
// 1. Recommendation Summary
// 2. Store Layout Zones
// 3. Handlers
// =============================================================================

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;
use storepulse_common::{Priority, Recommendation};

use crate::AppState;

// -----------------------------------------------------------------------------
// 1. Recommendation Summary
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregates over every recommendation, applied ones included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub total_recommendations: usize,
    pub active_recommendations: usize,
    pub applied_recommendations: usize,
    pub total_expected_impact: i64,
    /// Mean score rounded to the nearest integer; 0 when empty.
    pub average_score: i64,
    pub by_category: BTreeMap<String, usize>,
    pub by_priority: PriorityCounts,
}

impl RecommendationSummary {
    pub fn compute(recs: &[Recommendation]) -> Self {
        let total = recs.len();
        let applied = recs.iter().filter(|r| !r.is_active).count();
        let score_sum: i64 = recs.iter().map(|r| i64::from(r.score)).sum();
        let average_score = if total == 0 {
            0
        } else {
            (score_sum as f64 / total as f64).round() as i64
        };

        let mut by_category = BTreeMap::new();
        let mut by_priority = PriorityCounts::default();
        for rec in recs {
            *by_category.entry(rec.category.clone()).or_insert(0) += 1;
            match rec.priority {
                Priority::High => by_priority.high += 1,
                Priority::Medium => by_priority.medium += 1,
                Priority::Low => by_priority.low += 1,
            }
        }

        Self {
            total_recommendations: total,
            active_recommendations: total - applied,
            applied_recommendations: applied,
            total_expected_impact: recs.iter().map(|r| i64::from(r.expected_impact)).sum(),
            average_score,
            by_category,
            by_priority,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Store Layout Zones
// -----------------------------------------------------------------------------

struct ZoneRule {
    zone: &'static str,
    description: &'static str,
    priority: &'static str,
    /// Matched against `suggested_placement`, lowercase.
    placement: &'static [&'static str],
    /// Matched against `category`, lowercase.
    category: &'static [&'static str],
}

const ZONES: [ZoneRule; 6] = [
    ZoneRule {
        zone: "Store Entrance",
        description: "High-traffic area for maximum visibility",
        priority: "Critical",
        placement: &["entrance", "front"],
        category: &[],
    },
    ZoneRule {
        zone: "Checkout Counter",
        description: "Last-chance impulse purchase zone",
        priority: "High",
        placement: &["checkout", "counter"],
        category: &[],
    },
    ZoneRule {
        zone: "Seasonal Section",
        description: "Dynamic area for holiday and weather-driven products",
        priority: "High",
        placement: &["seasonal"],
        category: &["seasonal", "holiday"],
    },
    ZoneRule {
        zone: "Electronics Section",
        description: "Tech and cooling appliances area",
        priority: "Medium",
        placement: &["electronics"],
        category: &["electronics"],
    },
    ZoneRule {
        zone: "Health & Beauty",
        description: "Personal care and wellness products",
        priority: "Medium",
        placement: &["health"],
        category: &["health", "beauty"],
    },
    ZoneRule {
        zone: "Sports & Recreation",
        description: "Active lifestyle and sports equipment",
        priority: "Medium",
        placement: &["sports"],
        category: &["sports", "fitness"],
    },
];

impl ZoneRule {
    fn matches(&self, rec: &Recommendation) -> bool {
        let placement = rec.suggested_placement.to_lowercase();
        let category = rec.category.to_lowercase();
        self.placement.iter().any(|k| placement.contains(k))
            || self.category.iter().any(|k| category.contains(k))
    }
}

/// One floor zone with the recommendations that target it.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutZone {
    pub zone: &'static str,
    pub description: &'static str,
    pub priority: &'static str,
    pub recommendations: Vec<Recommendation>,
}

/// Group recommendations into floor zones. A recommendation may land in
/// several zones, or in none.
pub fn layout_zones(recs: &[Recommendation]) -> Vec<LayoutZone> {
    ZONES
        .iter()
        .map(|rule| LayoutZone {
            zone: rule.zone,
            description: rule.description,
            priority: rule.priority,
            recommendations: recs.iter().filter(|r| rule.matches(r)).cloned().collect(),
        })
        .collect()
}

// -----------------------------------------------------------------------------
// 3. Handlers
// -----------------------------------------------------------------------------

pub async fn get_summary(State(state): State<AppState>) -> Json<RecommendationSummary> {
    let recs = state.store.get_all_recommendations().await;
    Json(RecommendationSummary::compute(&recs))
}

/// Zones over active recommendations, each list highest score first.
pub async fn get_layout_zones(State(state): State<AppState>) -> Json<Vec<LayoutZone>> {
    let recs = state.store.get_active_recommendations().await;
    Json(layout_zones(&recs))
}

// =============================================================================
// StorePulse Backend - Seed Data
// =============================================================================
// The only bootstrap state the store has; there is no external data source.
// =============================================================================

use storepulse_common::{InsertDemandTrend, InsertEnvironmentalData, InsertRecommendation, Priority};

/// Starting reading: a warm, fairly humid afternoon.
pub fn environmental() -> InsertEnvironmentalData {
    InsertEnvironmentalData {
        temperature: 78.0,
        humidity: 65.0,
        aqi: 42,
    }
}

struct SeedRec {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    priority: Priority,
    score: i32,
    expected_impact: i32,
    suggested_placement: &'static str,
    inventory_impact: &'static str,
    time_sensitivity: &'static str,
    image_url: Option<&'static str>,
}

const RECOMMENDATIONS: [SeedRec; 10] = [
    SeedRec {
        title: "Cold Beverages & Ice",
        description: "Recommended due to high temperature (78°F)",
        category: "Beverages",
        priority: Priority::High,
        score: 94,
        expected_impact: 2400,
        suggested_placement: "Front entrance display",
        inventory_impact: "+85% demand",
        time_sensitivity: "Next 4 hours",
        image_url: Some("https://images.unsplash.com/photo-1622543925917-763c34d1a86e?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    },
    SeedRec {
        title: "Summer Accessories",
        description: "Seasonal trend and weather conditions",
        category: "Seasonal",
        priority: Priority::Medium,
        score: 76,
        expected_impact: 1200,
        suggested_placement: "Seasonal end cap",
        inventory_impact: "+45% demand",
        time_sensitivity: "This week",
        image_url: Some("https://images.unsplash.com/photo-1544551763-46a013bb70d5?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    },
    SeedRec {
        title: "4th of July Prep",
        description: "Holiday in 5 days - BBQ & party supplies",
        category: "Holiday",
        priority: Priority::High,
        score: 82,
        expected_impact: 1800,
        suggested_placement: "Store entrance",
        inventory_impact: "+120% demand",
        time_sensitivity: "Urgent",
        image_url: Some("https://images.unsplash.com/photo-1530841344095-36d6e3a8cf66?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    },
    SeedRec {
        title: "Portable Fans & Cooling",
        description: "Indoor temperature trending above 75°F",
        category: "Electronics",
        priority: Priority::High,
        score: 88,
        expected_impact: 2100,
        suggested_placement: "Electronics section end cap",
        inventory_impact: "+60% demand",
        time_sensitivity: "Today",
        image_url: None,
    },
    SeedRec {
        title: "Sunscreen & After-Sun Care",
        description: "Clear skies and high UV expected",
        category: "Health & Beauty",
        priority: Priority::High,
        score: 85,
        expected_impact: 950,
        suggested_placement: "Health aisle front shelf",
        inventory_impact: "+70% demand",
        time_sensitivity: "Next 2 days",
        image_url: None,
    },
    SeedRec {
        title: "Frozen Treats",
        description: "Impulse demand rises with afternoon heat",
        category: "Frozen",
        priority: Priority::Medium,
        score: 79,
        expected_impact: 1350,
        suggested_placement: "Checkout freezer",
        inventory_impact: "+50% demand",
        time_sensitivity: "Next 6 hours",
        image_url: None,
    },
    SeedRec {
        title: "Hydration & Electrolyte Drinks",
        description: "Humidity above 60% increases hydration purchases",
        category: "Beverages",
        priority: Priority::Medium,
        score: 73,
        expected_impact: 1100,
        suggested_placement: "Checkout counter cooler",
        inventory_impact: "+40% demand",
        time_sensitivity: "Next 8 hours",
        image_url: None,
    },
    SeedRec {
        title: "Allergy Relief",
        description: "Moderate air quality and pollen season",
        category: "Health",
        priority: Priority::Medium,
        score: 71,
        expected_impact: 640,
        suggested_placement: "Pharmacy counter",
        inventory_impact: "+35% demand",
        time_sensitivity: "This week",
        image_url: None,
    },
    SeedRec {
        title: "Picnic & BBQ Essentials",
        description: "Warm weekend forecast",
        category: "Seasonal",
        priority: Priority::Low,
        score: 64,
        expected_impact: 900,
        suggested_placement: "Seasonal aisle",
        inventory_impact: "+30% demand",
        time_sensitivity: "This weekend",
        image_url: None,
    },
    SeedRec {
        title: "Outdoor Sports Gear",
        description: "Good outdoor conditions for recreation",
        category: "Sports",
        priority: Priority::Low,
        score: 58,
        expected_impact: 800,
        suggested_placement: "Sports & recreation aisle",
        inventory_impact: "+20% demand",
        time_sensitivity: "This weekend",
        image_url: None,
    },
];

/// Recommendations in insertion order; the first becomes id 1.
pub fn recommendations() -> Vec<InsertRecommendation> {
    RECOMMENDATIONS
        .iter()
        .map(|r| InsertRecommendation {
            title: r.title.to_string(),
            description: r.description.to_string(),
            category: r.category.to_string(),
            priority: r.priority,
            score: r.score,
            expected_impact: r.expected_impact,
            suggested_placement: r.suggested_placement.to_string(),
            inventory_impact: r.inventory_impact.to_string(),
            time_sensitivity: r.time_sensitivity.to_string(),
            image_url: r.image_url.map(str::to_string),
            is_active: Some(true),
        })
        .collect()
}

/// (hour, temperature, sales volume) over a synthetic day.
const TRENDS: [(i32, f64, i32); 8] = [
    (0, 65.0, 120),
    (3, 62.0, 80),
    (6, 68.0, 150),
    (9, 72.0, 250),
    (12, 75.0, 380),
    (15, 78.0, 450),
    (18, 76.0, 420),
    (21, 74.0, 300),
];

pub fn demand_trends() -> Vec<InsertDemandTrend> {
    TRENDS
        .iter()
        .map(|&(hour, temperature, sales_volume)| InsertDemandTrend {
            hour,
            temperature,
            sales_volume,
        })
        .collect()
}

//! Recommendation mutations
//!
//! PATCH bodies arrive as a plain partial object. They are decoded into a
//! [`RecommendationEdit`] and classified into a [`RecommendationUpdate`], so
//! the store only ever sees one of three well-defined operations. `id` and
//! `createdAt` have no edit field and cannot change.

use serde::{Deserialize, Deserializer, Serialize};

use crate::schema::{Priority, Recommendation};

/// Partial set of editable recommendation fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_impact: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_placement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_sensitivity: Option<String>,
    /// `Some(None)` clears the image, `None` leaves it untouched.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Distinguishes an explicit `null` from an absent key.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl RecommendationEdit {
    /// True when no field other than `is_active` is set.
    fn only_activity(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.score.is_none()
            && self.expected_impact.is_none()
            && self.suggested_placement.is_none()
            && self.inventory_impact.is_none()
            && self.time_sensitivity.is_none()
            && self.image_url.is_none()
    }
}

/// The only mutations a stored recommendation accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationUpdate {
    /// Mark as applied; moves it from the dashboard to history.
    Apply,
    /// Return an applied recommendation to the dashboard.
    Reactivate,
    /// Overwrite the provided fields, keep the rest.
    Edit(RecommendationEdit),
}

impl From<RecommendationEdit> for RecommendationUpdate {
    fn from(edit: RecommendationEdit) -> Self {
        match edit.is_active {
            Some(false) if edit.only_activity() => RecommendationUpdate::Apply,
            Some(true) if edit.only_activity() => RecommendationUpdate::Reactivate,
            _ => RecommendationUpdate::Edit(edit),
        }
    }
}

impl RecommendationUpdate {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            RecommendationUpdate::Apply => "apply",
            RecommendationUpdate::Reactivate => "reactivate",
            RecommendationUpdate::Edit(_) => "edit",
        }
    }

    /// Merge this update into `rec` in place.
    pub fn apply_to(self, rec: &mut Recommendation) {
        match self {
            RecommendationUpdate::Apply => rec.is_active = false,
            RecommendationUpdate::Reactivate => rec.is_active = true,
            RecommendationUpdate::Edit(edit) => {
                if let Some(title) = edit.title {
                    rec.title = title;
                }
                if let Some(description) = edit.description {
                    rec.description = description;
                }
                if let Some(category) = edit.category {
                    rec.category = category;
                }
                if let Some(priority) = edit.priority {
                    rec.priority = priority;
                }
                if let Some(score) = edit.score {
                    rec.score = score;
                }
                if let Some(expected_impact) = edit.expected_impact {
                    rec.expected_impact = expected_impact;
                }
                if let Some(placement) = edit.suggested_placement {
                    rec.suggested_placement = placement;
                }
                if let Some(inventory_impact) = edit.inventory_impact {
                    rec.inventory_impact = inventory_impact;
                }
                if let Some(time_sensitivity) = edit.time_sensitivity {
                    rec.time_sensitivity = time_sensitivity;
                }
                if let Some(image_url) = edit.image_url {
                    rec.image_url = image_url;
                }
                if let Some(is_active) = edit.is_active {
                    rec.is_active = is_active;
                }
            }
        }
    }
}

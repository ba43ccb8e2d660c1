//! Range checks for incoming payloads
//!
//! Serde already enforces the shape; these checks reject values outside the
//! ranges the dashboard is built around.

use thiserror::Error;

use crate::schema::{InsertDemandTrend, InsertEnvironmentalData, InsertRecommendation, InsertUser};
use crate::update::RecommendationEdit;

pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);
pub const AQI_RANGE: (i32, i32) = (0, 500);
pub const SCORE_RANGE: (i32, i32) = (0, 100);
pub const HOUR_RANGE: (i32, i32) = (0, 23);

/// A field value outside its accepted range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Payloads that can be range-checked before they are stored.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite(field))
    }
}

fn check_real(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, min, max })
    }
}

fn check_int(field: &'static str, value: i32, (min, max): (i32, i32)) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: min.into(),
            max: max.into(),
        })
    }
}

impl Validate for InsertUser {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::Empty("username"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Empty("password"));
        }
        Ok(())
    }
}

impl Validate for InsertEnvironmentalData {
    fn validate(&self) -> Result<(), ValidationError> {
        check_finite("temperature", self.temperature)?;
        check_real("humidity", self.humidity, HUMIDITY_RANGE)?;
        check_int("aqi", self.aqi, AQI_RANGE)
    }
}

impl Validate for InsertRecommendation {
    fn validate(&self) -> Result<(), ValidationError> {
        check_int("score", self.score, SCORE_RANGE)
    }
}

impl Validate for RecommendationEdit {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.score {
            Some(score) => check_int("score", score, SCORE_RANGE),
            None => Ok(()),
        }
    }
}

impl Validate for InsertDemandTrend {
    fn validate(&self) -> Result<(), ValidationError> {
        check_int("hour", self.hour, HOUR_RANGE)?;
        check_finite("temperature", self.temperature)
    }
}

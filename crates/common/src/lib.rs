//! Shared types for StorePulse
//!
//! ## Table of Contents
//! - **schema**: Stored records and their insert payloads
//! - **update**: Closed set of recommendation mutations
//! - **validate**: Range checks applied before payloads reach the store

pub mod schema;
pub mod update;
pub mod validate;

pub use schema::{
    DemandTrend, EnvironmentalData, InsertDemandTrend, InsertEnvironmentalData,
    InsertRecommendation, InsertUser, Priority, Recommendation, User,
};
pub use update::{RecommendationEdit, RecommendationUpdate};
pub use validate::{Validate, ValidationError};

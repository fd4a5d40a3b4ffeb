//! ZoMate Match - compatibility scoring and discovery filtering for the ZoMate dating app
//!
//! The two engines are pure functions: [`core::calculate_compatibility`] blends a
//! fixed sign-pair matrix with interest overlap, and [`core::matches_filter`] /
//! [`core::apply_filters`] narrow a deck by astrological and social criteria.
//! Filtering accepts raw [`models::ProfileRecord`]s and tolerates unrecognized
//! signs; scoring only takes validated [`models::Profile`]s.
//! [`core::Matcher`] composes them to rank a deck for one viewer.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    apply_filters, calculate_compatibility, default_criteria, label_for, matches_filter, summarize,
    Element, FilterSubject, Matcher, ZodiacSign,
};
pub use error::ZoMateError;
pub use models::{CompatibilityResult, FilterCriteria, Profile, ProfileRecord, ScoringWeights};

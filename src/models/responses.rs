use serde::{Deserialize, Serialize};

use crate::core::zodiac::{Element, ZodiacSign};
use crate::models::domain::{FilterCriteria, ProfileRecord, RankedMatch};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankMatchesResponse {
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    pub skipped: usize,
    #[serde(rename = "filterSummary")]
    pub filter_summary: String,
}

/// Response for the filter endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyFiltersResponse {
    pub profiles: Vec<ProfileRecord>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSummaryResponse {
    pub summary: String,
    pub criteria: FilterCriteria,
}

/// Static facts about one sign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInfoResponse {
    pub sign: ZodiacSign,
    pub element: Element,
    #[serde(rename = "compatibleSigns")]
    pub compatible_signs: Vec<ZodiacSign>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelResponse {
    pub score: u8,
    pub label: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{FilterCriteria, Profile, ProfileRecord};

/// Request to score one pair of profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    #[serde(alias = "profile_a", rename = "profileA")]
    pub profile_a: Profile,
    #[serde(alias = "profile_b", rename = "profileB")]
    pub profile_b: Profile,
}

/// Request to filter and rank a candidate deck for a viewer
///
/// The viewer must be a valid profile; candidates stay raw so one bad record
/// cannot reject the whole deck.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    pub viewer: Profile,
    #[validate(length(max = 5000))]
    pub candidates: Vec<ProfileRecord>,
    #[serde(default)]
    pub filters: FilterCriteria,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to filter a list of profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyFiltersRequest {
    #[validate(length(max = 5000))]
    pub profiles: Vec<ProfileRecord>,
    #[serde(default)]
    pub filters: FilterCriteria,
}

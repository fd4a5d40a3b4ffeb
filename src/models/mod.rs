// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AstrologyBreakdown, AxisScore, CompatibilityBreakdown, CompatibilityResult, FilterCriteria,
    InterestBreakdown, Profile, ProfileRecord, RankedMatch, ScoringWeights, DEFAULT_MAX_AGE,
    DEFAULT_MAX_DISTANCE_KM, DEFAULT_MIN_AGE,
};
pub use requests::{ApplyFiltersRequest, CompatibilityRequest, RankMatchesRequest};
pub use responses::{
    ApplyFiltersResponse, ErrorResponse, FilterSummaryResponse, HealthResponse, LabelResponse,
    RankMatchesResponse, SignInfoResponse,
};

// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod zodiac;

pub use filters::{
    apply_filters, default_criteria, matches_filter, summarize, FilterSubject, NO_FILTERS_SUMMARY,
};
pub use matcher::{Matcher, RankResult};
pub use scoring::{
    calculate_compatibility, calculate_compatibility_with, calculate_interest_score, label_for,
    match_probability, LikeKind, NEUTRAL_SCORE,
};
pub use zodiac::{Element, ZodiacSign};

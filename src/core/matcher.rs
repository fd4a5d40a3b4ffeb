use std::fmt;

use crate::core::{
    filters::{matches_filter, FilterSubject},
    scoring::{calculate_compatibility_with, label_for, match_probability, LikeKind},
};
use crate::error::Result;
use crate::models::{CompatibilityResult, FilterCriteria, Profile, RankedMatch, ScoringWeights};

/// Result of ranking a candidate deck
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedMatch>,
    /// Deck size after the viewer's own profile is removed
    pub total_candidates: usize,
    /// Candidates that passed the filters but could not be scored
    pub skipped: usize,
}

/// Candidate ranking - filters a deck and orders it by compatibility
///
/// # Pipeline Stages
/// 1. Drop the viewer's own profile
/// 2. Filter criteria (lenient, works on raw records)
/// 3. Strict conversion and compatibility scoring against the viewer
/// 4. Stable sort by overall score, then truncate
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    /// Build a matcher, rejecting weights that do not sum to 1.0
    pub fn new(weights: ScoringWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Compatibility of `viewer` towards `candidate` with this matcher's weights
    pub fn score(&self, viewer: &Profile, candidate: &Profile) -> CompatibilityResult {
        calculate_compatibility_with(viewer, candidate, &self.weights)
    }

    /// Rank candidates for a viewer
    ///
    /// # Arguments
    /// * `viewer` - The profile doing the swiping
    /// * `candidates` - The deck to rank, as typed profiles or raw records
    /// * `criteria` - The viewer's discovery filters
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// RankResult with matches ordered by overall score (highest first);
    /// equal scores keep their deck order. A record that survives the filters
    /// but has no valid sun sign is counted in `skipped` and left out.
    pub fn rank<P>(
        &self,
        viewer: &Profile,
        candidates: Vec<P>,
        criteria: &FilterCriteria,
        limit: usize,
    ) -> RankResult
    where
        P: FilterSubject + TryInto<Profile>,
        P::Error: fmt::Display,
    {
        // Stage 1: never show the viewer to themselves
        let deck: Vec<P> = candidates
            .into_iter()
            .filter(|profile| profile.id() != viewer.id)
            .collect();
        let total_candidates = deck.len();
        let mut skipped = 0;

        let mut ranked: Vec<RankedMatch> = deck
            .into_iter()
            // Stage 2: discovery filters
            .filter(|profile| matches_filter(profile, criteria))
            // Stage 3: score
            .filter_map(|candidate| match TryInto::<Profile>::try_into(candidate) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!("Skipping unscorable candidate: {}", e);
                    skipped += 1;
                    None
                }
            })
            .map(|profile| {
                let compatibility = self.score(viewer, &profile);
                let overall = compatibility.overall;

                RankedMatch {
                    profile,
                    label: label_for(overall).to_string(),
                    like_probability: match_probability(Some(overall), LikeKind::Standard),
                    astro_like_probability: match_probability(Some(overall), LikeKind::Astro),
                    compatibility,
                }
            })
            .collect();

        // Stage 4: highest overall first; sort_by is stable
        ranked.sort_by(|a, b| b.compatibility.overall.cmp(&a.compatibility.overall));
        ranked.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates for {} ({} skipped)",
            ranked.len(),
            total_candidates,
            viewer.id,
            skipped
        );

        RankResult {
            matches: ranked,
            total_candidates,
            skipped,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::zodiac::ZodiacSign;
    use crate::models::ProfileRecord;

    fn create_candidate(id: &str, age: u8, sun: ZodiacSign) -> Profile {
        let mut profile = Profile::new(id, format!("User {}", id), age, sun);
        profile.interests = vec!["Astrology".to_string()];
        profile
    }

    fn create_viewer() -> Profile {
        let mut viewer = Profile::new("viewer", "Viewer", 29, ZodiacSign::Leo);
        viewer.interests = vec!["Astrology".to_string(), "Hiking".to_string()];
        viewer
    }

    #[test]
    fn test_rank_sorted_by_score() {
        let matcher = Matcher::with_default_weights();
        let viewer = create_viewer();

        let candidates = vec![
            create_candidate("1", 25, ZodiacSign::Capricorn), // Leo x Capricorn = 40
            create_candidate("2", 25, ZodiacSign::Aries),     // Leo x Aries = 95
            create_candidate("3", 25, ZodiacSign::Libra),     // Leo x Libra = 90
        ];

        let result = matcher.rank(&viewer, candidates, &FilterCriteria::default(), 10);
        let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();

        assert_eq!(ids, vec!["2", "3", "1"]);
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn test_rank_ties_keep_deck_order() {
        let matcher = Matcher::with_default_weights();
        let viewer = create_viewer();

        let candidates = vec![
            create_candidate("a", 25, ZodiacSign::Aries),
            create_candidate("b", 26, ZodiacSign::Sagittarius), // also 95
            create_candidate("c", 27, ZodiacSign::Aries),
        ];

        let result = matcher.rank(&viewer, candidates, &FilterCriteria::default(), 10);
        let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rank_applies_filters_and_excludes_viewer() {
        let matcher = Matcher::with_default_weights();
        let viewer = create_viewer();
        let criteria = FilterCriteria {
            age_range: (21, 30),
            ..Default::default()
        };

        let candidates = vec![
            viewer.clone(),
            create_candidate("1", 25, ZodiacSign::Aries),
            create_candidate("2", 40, ZodiacSign::Aries), // too old
        ];

        let result = matcher.rank(&viewer, candidates, &criteria, 10);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile.id, "1");
        // the viewer is not counted as a candidate
        assert_eq!(result.total_candidates, 2);
    }

    fn create_record(id: &str, sun: &str) -> ProfileRecord {
        ProfileRecord {
            id: id.to_string(),
            name: format!("User {}", id),
            age: 25,
            sun_sign: Some(sun.to_string()),
            interests: Some(vec!["Astrology".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_records_skips_unscorable() {
        let matcher = Matcher::with_default_weights();
        let viewer = create_viewer();

        let mut bad_moon = create_record("3", "Libra");
        bad_moon.moon_sign = Some("Ophiuchus".to_string());
        let candidates = vec![
            create_record("1", "Capricorn"),
            create_record("2", "Ophiuchus"),
            bad_moon,
            create_record("4", "Aries"),
        ];

        let result = matcher.rank(&viewer, candidates, &FilterCriteria::default(), 10);
        let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();

        assert_eq!(ids, vec!["4", "1"]);
        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.skipped, 2);
    }

    #[test]
    fn test_rank_records_filtered_out_before_scoring() {
        let matcher = Matcher::with_default_weights();
        let viewer = create_viewer();
        let criteria = FilterCriteria {
            sun_signs: vec![ZodiacSign::Aries],
            ..Default::default()
        };

        let candidates = vec![create_record("1", "Ophiuchus"), create_record("2", "aries")];
        let result = matcher.rank(&viewer, candidates, &criteria, 10);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile.sun_sign, ZodiacSign::Aries);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_rank_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let viewer = create_viewer();

        let candidates: Vec<Profile> = (0..20)
            .map(|i| create_candidate(&i.to_string(), 25, ZodiacSign::ALL[i % 12]))
            .collect();

        let result = matcher.rank(&viewer, candidates, &FilterCriteria::default(), 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_rank_annotations() {
        let matcher = Matcher::with_default_weights();
        let viewer = create_viewer();

        let result = matcher.rank(
            &viewer,
            vec![create_candidate("1", 25, ZodiacSign::Aries)],
            &FilterCriteria::default(),
            10,
        );
        let top = &result.matches[0];

        // interests 100, sun 95, moon 50, rising 50
        assert_eq!(top.compatibility.overall, 87);
        assert_eq!(top.label, "Stellar Match");
        assert!((top.like_probability - 0.735).abs() < 1e-9);
        assert!((top.astro_like_probability - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let weights = ScoringWeights {
            interests: 0.3,
            sun: 0.6,
            moon: 0.15,
            rising: 0.05,
        };
        assert!(Matcher::new(weights).is_err());
        assert!(Matcher::new(ScoringWeights::default()).is_ok());
    }
}

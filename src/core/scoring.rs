use serde::{Deserialize, Serialize};

use crate::core::zodiac::ZodiacSign;
use crate::models::{
    AstrologyBreakdown, AxisScore, CompatibilityBreakdown, CompatibilityResult, InterestBreakdown,
    Profile, ScoringWeights,
};

/// Score used when an axis has no data on one side
pub const NEUTRAL_SCORE: u8 = 50;

/// Qualitative buckets, walked top-down
const LABEL_THRESHOLDS: [(u8, &str); 6] = [
    (90, "Cosmic Soulmates"),
    (80, "Stellar Match"),
    (70, "Strong Connection"),
    (60, "Good Harmony"),
    (50, "Potential Match"),
    (40, "Challenging but Possible"),
];

const LOWEST_LABEL: &str = "Different Paths";

/// Map any 0-100 score (overall or per-axis) to its qualitative label
pub fn label_for(score: u8) -> &'static str {
    LABEL_THRESHOLDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, label)| *label)
        .unwrap_or(LOWEST_LABEL)
}

/// Calculate the compatibility of `a` towards `b` with the standard weights
///
/// Scoring formula:
/// overall = round(
///     interests * 0.20 +
///     sun       * 0.60 +
///     moon      * 0.15 +
///     rising    * 0.05
/// )
pub fn calculate_compatibility(a: &Profile, b: &Profile) -> CompatibilityResult {
    calculate_compatibility_with(a, b, &ScoringWeights::default())
}

/// Same as [`calculate_compatibility`] with caller-supplied weights
pub fn calculate_compatibility_with(
    a: &Profile,
    b: &Profile,
    weights: &ScoringWeights,
) -> CompatibilityResult {
    let interests = calculate_interest_score(a, b);

    let sun = a.sun_sign.compatibility_with(b.sun_sign);
    let moon = axis_score(a.moon_sign, b.moon_sign);
    let rising = axis_score(a.rising_sign, b.rising_sign);

    let weighted = f64::from(interests.score) * weights.interests
        + f64::from(sun) * weights.sun
        + f64::from(moon) * weights.moon
        + f64::from(rising) * weights.rising;

    let overall = weighted.round().clamp(0.0, 100.0) as u8;

    tracing::trace!(
        a = %a.id,
        b = %b.id,
        overall,
        interests = interests.score,
        sun,
        moon,
        rising,
        "Scored compatibility"
    );

    CompatibilityResult {
        overall,
        interests: interests.score,
        sun_sign: sun,
        moon_sign: moon,
        rising_sign: rising,
        breakdown: CompatibilityBreakdown {
            interests,
            astrology: AstrologyBreakdown {
                sun: axis(sun),
                moon: axis(moon),
                rising: axis(rising),
            },
        },
    }
}

/// Interest overlap score (0-100)
///
/// Shared count is normalised by the smaller list, so a profile with a few
/// interests that are all shared scores 100. Empty on either side is neutral.
pub fn calculate_interest_score(a: &Profile, b: &Profile) -> InterestBreakdown {
    if a.interests.is_empty() || b.interests.is_empty() {
        return InterestBreakdown {
            score: NEUTRAL_SCORE,
            shared: Vec::new(),
            total: 0,
        };
    }

    let shared: Vec<String> = a
        .interests
        .iter()
        .filter(|interest| b.interests.contains(interest))
        .cloned()
        .collect();

    let smaller = a.interests.len().min(b.interests.len()) as f64;
    let ratio = (shared.len() as f64 / smaller) * 100.0;

    InterestBreakdown {
        score: ratio.min(100.0).round() as u8,
        total: shared.len(),
        shared,
    }
}

/// Moon and rising are only scored when both sides know the sign
#[inline]
fn axis_score(a: Option<ZodiacSign>, b: Option<ZodiacSign>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) => a.compatibility_with(b),
        _ => NEUTRAL_SCORE,
    }
}

#[inline]
fn axis(score: u8) -> AxisScore {
    AxisScore {
        score,
        compatibility: label_for(score).to_string(),
    }
}

/// Kind of like sent from the swipe deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeKind {
    Standard,
    Astro,
}

/// Probability that a like turns into a match, given the overall score
///
/// `None` means no viewer profile was available to score against.
/// The random draw against this probability belongs to the caller.
pub fn match_probability(overall: Option<u8>, kind: LikeKind) -> f64 {
    match (kind, overall) {
        (LikeKind::Standard, Some(score)) => f64::from(score) / 100.0 * 0.5 + 0.3,
        (LikeKind::Standard, None) => 0.3,
        (LikeKind::Astro, Some(score)) => (f64::from(score) / 100.0 * 0.7 + 0.4).min(0.9),
        (LikeKind::Astro, None) => 0.6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(id: &str, sun: ZodiacSign, interests: &[&str]) -> Profile {
        let mut profile = Profile::new(id, format!("User {}", id), 28, sun);
        profile.interests = interests.iter().map(|s| s.to_string()).collect();
        profile
    }

    #[test]
    fn test_leo_aries_no_extras() {
        let a = create_test_profile("a", ZodiacSign::Leo, &[]);
        let b = create_test_profile("b", ZodiacSign::Aries, &[]);

        let result = calculate_compatibility(&a, &b);

        assert_eq!(result.interests, 50);
        assert_eq!(result.sun_sign, 95);
        assert_eq!(result.moon_sign, 50);
        assert_eq!(result.rising_sign, 50);
        assert_eq!(result.overall, 77);
        assert_eq!(result.breakdown.astrology.sun.compatibility, "Cosmic Soulmates");
        assert_eq!(result.breakdown.astrology.moon.compatibility, "Potential Match");
    }

    #[test]
    fn test_interest_subset_scores_full() {
        let a = create_test_profile("a", ZodiacSign::Leo, &["Yoga", "Art"]);
        let b = create_test_profile("b", ZodiacSign::Leo, &["Yoga", "Travel", "Art"]);

        let breakdown = calculate_interest_score(&a, &b);

        assert_eq!(breakdown.score, 100);
        assert_eq!(breakdown.shared, vec!["Yoga", "Art"]);
        assert_eq!(breakdown.total, 2);
    }

    #[test]
    fn test_interest_partial_overlap() {
        let a = create_test_profile("a", ZodiacSign::Leo, &["Yoga", "Art", "Travel"]);
        let b = create_test_profile("b", ZodiacSign::Leo, &["Art", "Hiking"]);

        let breakdown = calculate_interest_score(&a, &b);
        assert_eq!(breakdown.score, 50);
        assert_eq!(breakdown.shared, vec!["Art"]);
    }

    #[test]
    fn test_interests_neutral_when_one_side_empty() {
        let a = create_test_profile("a", ZodiacSign::Leo, &[]);
        let b = create_test_profile("b", ZodiacSign::Leo, &["Yoga", "Art"]);

        assert_eq!(calculate_interest_score(&a, &b).score, 50);
        assert_eq!(calculate_interest_score(&b, &a).score, 50);
        assert!(calculate_interest_score(&b, &a).shared.is_empty());
    }

    #[test]
    fn test_no_shared_interests_scores_zero() {
        let a = create_test_profile("a", ZodiacSign::Aries, &["Gaming"]);
        let b = create_test_profile("b", ZodiacSign::Capricorn, &["Tarot", "Hiking"]);

        let result = calculate_compatibility(&a, &b);
        assert_eq!(result.interests, 0);
        assert_eq!(result.sun_sign, 30);
        assert_eq!(result.overall, 28);
        assert_eq!(label_for(result.overall), "Different Paths");
    }

    #[test]
    fn test_moon_neutral_when_one_side_missing() {
        let mut a = create_test_profile("a", ZodiacSign::Leo, &[]);
        let b = create_test_profile("b", ZodiacSign::Leo, &[]);
        a.moon_sign = Some(ZodiacSign::Cancer);

        let result = calculate_compatibility(&a, &b);
        assert_eq!(result.moon_sign, 50);
    }

    #[test]
    fn test_full_chart() {
        let mut a = create_test_profile("a", ZodiacSign::Leo, &["Yoga", "Art", "Travel"]);
        a.moon_sign = Some(ZodiacSign::Cancer);
        a.rising_sign = Some(ZodiacSign::Libra);
        let mut b = create_test_profile("b", ZodiacSign::Sagittarius, &["Art", "Hiking"]);
        b.moon_sign = Some(ZodiacSign::Scorpio);
        b.rising_sign = Some(ZodiacSign::Gemini);

        let result = calculate_compatibility(&a, &b);

        assert_eq!(result.interests, 50);
        assert_eq!(result.sun_sign, 95);
        assert_eq!(result.moon_sign, 95);
        assert_eq!(result.rising_sign, 95);
        assert_eq!(result.overall, 86);
    }

    #[test]
    fn test_deterministic() {
        let a = create_test_profile("a", ZodiacSign::Pisces, &["Tarot", "Art"]);
        let b = create_test_profile("b", ZodiacSign::Virgo, &["Art"]);

        assert_eq!(calculate_compatibility(&a, &b), calculate_compatibility(&a, &b));
    }

    #[test]
    fn test_labels() {
        assert_eq!(label_for(100), "Cosmic Soulmates");
        assert_eq!(label_for(90), "Cosmic Soulmates");
        assert_eq!(label_for(89), "Stellar Match");
        assert_eq!(label_for(70), "Strong Connection");
        assert_eq!(label_for(60), "Good Harmony");
        assert_eq!(label_for(50), "Potential Match");
        assert_eq!(label_for(40), "Challenging but Possible");
        assert_eq!(label_for(39), "Different Paths");
        assert_eq!(label_for(0), "Different Paths");
    }

    #[test]
    fn test_custom_weights() {
        let a = create_test_profile("a", ZodiacSign::Leo, &[]);
        let b = create_test_profile("b", ZodiacSign::Aries, &[]);
        let sun_only = ScoringWeights {
            interests: 0.0,
            sun: 1.0,
            moon: 0.0,
            rising: 0.0,
        };

        let result = calculate_compatibility_with(&a, &b, &sun_only);
        assert_eq!(result.overall, 95);
    }

    #[test]
    fn test_match_probability() {
        assert!((match_probability(Some(100), LikeKind::Standard) - 0.8).abs() < 1e-9);
        assert!((match_probability(Some(0), LikeKind::Standard) - 0.3).abs() < 1e-9);
        assert_eq!(match_probability(None, LikeKind::Standard), 0.3);
        assert_eq!(match_probability(Some(100), LikeKind::Astro), 0.9);
        assert!((match_probability(Some(50), LikeKind::Astro) - 0.75).abs() < 1e-9);
        assert_eq!(match_probability(None, LikeKind::Astro), 0.6);
    }
}

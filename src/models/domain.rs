use serde::{Deserialize, Serialize};

use crate::core::zodiac::{Element, ZodiacSign};
use crate::error::{Result, ZoMateError};

/// A dating-app participant as seen by the scoring and filter engines
///
/// Deserialization goes through [`ProfileRecord`], so a record with a missing
/// or unrecognized sign is rejected before it can reach the engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    #[serde(rename = "sunSign")]
    pub sun_sign: ZodiacSign,
    #[serde(rename = "moonSign")]
    pub moon_sign: Option<ZodiacSign>,
    #[serde(rename = "risingSign")]
    pub rising_sign: Option<ZodiacSign>,
    pub interests: Vec<String>,
    #[serde(rename = "isOnline")]
    pub is_online: bool,
    /// Distance from the viewer in kilometres, when known
    #[serde(rename = "distance")]
    pub distance_km: Option<f64>,
}

impl Profile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u8,
        sun_sign: ZodiacSign,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            sun_sign,
            moon_sign: None,
            rising_sign: None,
            interests: Vec::new(),
            is_online: false,
            distance_km: None,
        }
    }

    #[inline]
    pub fn element(&self) -> Element {
        self.sun_sign.element()
    }
}

/// Raw profile as supplied by the app store, with signs still as free text
///
/// The filter engine works on records directly; scoring needs the strict
/// [`Profile`] conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub age: u8,
    #[serde(rename = "sunSign", default, skip_serializing_if = "Option::is_none")]
    pub sun_sign: Option<String>,
    #[serde(rename = "moonSign", default, skip_serializing_if = "Option::is_none")]
    pub moon_sign: Option<String>,
    #[serde(rename = "risingSign", default, skip_serializing_if = "Option::is_none")]
    pub rising_sign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(rename = "isOnline", default, skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = ZoMateError;

    fn try_from(record: ProfileRecord) -> Result<Self> {
        let sun_sign = match record.sun_sign.as_deref() {
            Some(sign) => sign.parse::<ZodiacSign>()?,
            None => {
                return Err(ZoMateError::InvalidInput(format!(
                    "profile '{}' has no sun sign",
                    record.id
                )))
            }
        };

        // Blank optional signs mean "not provided"
        let optional_sign = |value: Option<String>| -> Result<Option<ZodiacSign>> {
            match value {
                Some(s) if !s.trim().is_empty() => s.parse::<ZodiacSign>().map(Some),
                _ => Ok(None),
            }
        };

        Ok(Profile {
            moon_sign: optional_sign(record.moon_sign)?,
            rising_sign: optional_sign(record.rising_sign)?,
            id: record.id,
            name: record.name,
            age: record.age,
            sun_sign,
            interests: record.interests.unwrap_or_default(),
            is_online: record.is_online.unwrap_or(false),
            distance_km: record.distance,
        })
    }
}

/// Interest overlap between two profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestBreakdown {
    pub score: u8,
    pub shared: Vec<String>,
    pub total: usize,
}

/// One astrological axis (sun, moon or rising)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScore {
    pub score: u8,
    pub compatibility: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstrologyBreakdown {
    pub sun: AxisScore,
    pub moon: AxisScore,
    pub rising: AxisScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    pub interests: InterestBreakdown,
    pub astrology: AstrologyBreakdown,
}

/// Compatibility between two profiles, computed fresh on every call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub overall: u8,
    pub interests: u8,
    #[serde(rename = "sunSign")]
    pub sun_sign: u8,
    #[serde(rename = "moonSign")]
    pub moon_sign: u8,
    #[serde(rename = "risingSign")]
    pub rising_sign: u8,
    pub breakdown: CompatibilityBreakdown,
}

/// Discovery filter settings
///
/// An empty set means "no constraint" for that axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    #[serde(rename = "sunSigns")]
    pub sun_signs: Vec<ZodiacSign>,
    pub elements: Vec<Element>,
    #[serde(rename = "moonSigns")]
    pub moon_signs: Vec<ZodiacSign>,
    #[serde(rename = "risingSigns")]
    pub rising_signs: Vec<ZodiacSign>,
    /// Inclusive (min, max)
    #[serde(rename = "ageRange")]
    pub age_range: (u8, u8),
    #[serde(rename = "maxDistance")]
    pub max_distance_km: u16,
    pub interests: Vec<String>,
    #[serde(rename = "showOnlineOnly")]
    pub online_only: bool,
}

pub const DEFAULT_MIN_AGE: u8 = 18;
pub const DEFAULT_MAX_AGE: u8 = 50;
pub const DEFAULT_MAX_DISTANCE_KM: u16 = 100;

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            sun_signs: Vec::new(),
            elements: Vec::new(),
            moon_signs: Vec::new(),
            rising_signs: Vec::new(),
            age_range: (DEFAULT_MIN_AGE, DEFAULT_MAX_AGE),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            interests: Vec::new(),
            online_only: false,
        }
    }
}

impl FilterCriteria {
    /// Rejects an inverted age range
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.age_range;
        if min > max {
            return Err(ZoMateError::InvalidInput(format!(
                "age range {}-{} is inverted",
                min, max
            )));
        }
        Ok(())
    }
}

/// Scoring weights for the overall compatibility blend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub interests: f64,
    pub sun: f64,
    pub moon: f64,
    pub rising: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interests: 0.20,
            sun: 0.60,
            moon: 0.15,
            rising: 0.05,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.interests + self.sun + self.moon + self.rising
    }

    /// Weights must be non-negative and add up to 1.0
    pub fn validate(&self) -> Result<()> {
        let all = [self.interests, self.sun, self.moon, self.rising];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ZoMateError::InvalidInput(format!(
                "scoring weights must be non-negative: {:?}",
                self
            )));
        }
        if (self.sum() - 1.0).abs() > 1e-9 {
            return Err(ZoMateError::InvalidInput(format!(
                "scoring weights must sum to 1.0, got {}",
                self.sum()
            )));
        }
        Ok(())
    }
}

/// A filtered candidate annotated with its compatibility against the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub profile: Profile,
    pub compatibility: CompatibilityResult,
    pub label: String,
    #[serde(rename = "likeProbability")]
    pub like_probability: f64,
    #[serde(rename = "astroLikeProbability")]
    pub astro_like_probability: f64,
}

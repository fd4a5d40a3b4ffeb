use crate::core::zodiac::{Element, ZodiacSign};
use crate::models::{
    FilterCriteria, Profile, ProfileRecord, DEFAULT_MAX_AGE, DEFAULT_MAX_DISTANCE_KM,
    DEFAULT_MIN_AGE,
};

/// Sentinel returned by [`summarize`] when no axis is active
pub const NO_FILTERS_SUMMARY: &str = "No filters applied";

/// What the filter engine reads from a profile
///
/// Signs are exposed as names so that raw records with unrecognized signs
/// can still be evaluated instead of being rejected up front.
pub trait FilterSubject {
    fn id(&self) -> &str;
    fn sun_sign_name(&self) -> Option<&str>;
    fn moon_sign_name(&self) -> Option<&str>;
    fn rising_sign_name(&self) -> Option<&str>;
    fn age(&self) -> u8;
    fn distance_km(&self) -> Option<f64>;
    fn interests(&self) -> &[String];
    fn is_online(&self) -> bool;

    /// Element of the sun sign; `Unknown` when the sign is missing or unrecognized
    fn element(&self) -> Element {
        self.sun_sign_name()
            .map(Element::for_sign_name)
            .unwrap_or(Element::Unknown)
    }
}

impl FilterSubject for Profile {
    fn id(&self) -> &str {
        &self.id
    }

    fn sun_sign_name(&self) -> Option<&str> {
        Some(self.sun_sign.name())
    }

    fn moon_sign_name(&self) -> Option<&str> {
        self.moon_sign.map(ZodiacSign::name)
    }

    fn rising_sign_name(&self) -> Option<&str> {
        self.rising_sign.map(ZodiacSign::name)
    }

    fn age(&self) -> u8 {
        self.age
    }

    fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    fn interests(&self) -> &[String] {
        &self.interests
    }

    fn is_online(&self) -> bool {
        self.is_online
    }

    fn element(&self) -> Element {
        self.sun_sign.element()
    }
}

impl FilterSubject for ProfileRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn sun_sign_name(&self) -> Option<&str> {
        non_blank(&self.sun_sign)
    }

    fn moon_sign_name(&self) -> Option<&str> {
        non_blank(&self.moon_sign)
    }

    fn rising_sign_name(&self) -> Option<&str> {
        non_blank(&self.rising_sign)
    }

    fn age(&self) -> u8 {
        self.age
    }

    fn distance_km(&self) -> Option<f64> {
        self.distance
    }

    fn interests(&self) -> &[String] {
        self.interests.as_deref().unwrap_or(&[])
    }

    fn is_online(&self) -> bool {
        self.is_online.unwrap_or(false)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// An unrecognized name is never in the list
fn sign_listed(signs: &[ZodiacSign], name: &str) -> bool {
    name.parse::<ZodiacSign>()
        .map(|sign| signs.contains(&sign))
        .unwrap_or(false)
}

/// Check whether a profile passes every active filter axis
///
/// Missing optional data (moon sign, rising sign, distance) never rejects a
/// profile; only data that is present and out of range does. Unrecognized
/// sign names are not errors here: they simply match no listed sign, and an
/// unrecognized sun sign has the `Unknown` element.
#[inline]
pub fn matches_filter<P: FilterSubject + ?Sized>(profile: &P, criteria: &FilterCriteria) -> bool {
    // Sun sign
    if !criteria.sun_signs.is_empty()
        && !profile
            .sun_sign_name()
            .is_some_and(|name| sign_listed(&criteria.sun_signs, name))
    {
        return false;
    }

    // Element of the sun sign
    if !criteria.elements.is_empty() && !criteria.elements.contains(&profile.element()) {
        return false;
    }

    // Moon sign, only when known
    if let Some(moon) = profile.moon_sign_name() {
        if !criteria.moon_signs.is_empty() && !sign_listed(&criteria.moon_signs, moon) {
            return false;
        }
    }

    // Rising sign, only when known
    if let Some(rising) = profile.rising_sign_name() {
        if !criteria.rising_signs.is_empty() && !sign_listed(&criteria.rising_signs, rising) {
            return false;
        }
    }

    // Age range (inclusive)
    let (min_age, max_age) = criteria.age_range;
    let age = profile.age();
    if age < min_age || age > max_age {
        return false;
    }

    // Distance, only when known
    if let Some(distance_km) = profile.distance_km() {
        if distance_km > f64::from(criteria.max_distance_km) {
            return false;
        }
    }

    // Interests: at least one in common
    if !criteria.interests.is_empty()
        && !profile
            .interests()
            .iter()
            .any(|interest| criteria.interests.contains(interest))
    {
        return false;
    }

    if criteria.online_only && !profile.is_online() {
        return false;
    }

    true
}

/// Keep the profiles that pass `criteria`, in their original order
pub fn apply_filters<P: FilterSubject + Clone>(
    profiles: &[P],
    criteria: &FilterCriteria,
) -> Vec<P> {
    let filtered: Vec<P> = profiles
        .iter()
        .filter(|profile| matches_filter(*profile, criteria))
        .cloned()
        .collect();

    tracing::debug!(
        "Filtered {} profiles down to {}",
        profiles.len(),
        filtered.len()
    );

    filtered
}

/// The "no filters active" configuration, as a fresh value
pub fn default_criteria() -> FilterCriteria {
    FilterCriteria::default()
}

/// Human-readable summary of the active filter axes, e.g. "2 sun signs, online only"
pub fn summarize(criteria: &FilterCriteria) -> String {
    let mut parts: Vec<String> = Vec::new();

    push_count(&mut parts, criteria.sun_signs.len(), "sun sign");
    push_count(&mut parts, criteria.elements.len(), "element");
    push_count(&mut parts, criteria.moon_signs.len(), "moon sign");
    push_count(&mut parts, criteria.rising_signs.len(), "rising sign");
    push_count(&mut parts, criteria.interests.len(), "interest");

    let (min_age, max_age) = criteria.age_range;
    if min_age != DEFAULT_MIN_AGE || max_age != DEFAULT_MAX_AGE {
        parts.push(format!("age {}-{}", min_age, max_age));
    }

    if criteria.max_distance_km != DEFAULT_MAX_DISTANCE_KM {
        parts.push(format!("within {}km", criteria.max_distance_km));
    }

    if criteria.online_only {
        parts.push("online only".to_string());
    }

    if parts.is_empty() {
        return NO_FILTERS_SUMMARY.to_string();
    }

    parts.join(", ")
}

fn push_count(parts: &mut Vec<String>, count: usize, noun: &str) {
    if count > 0 {
        let plural = if count > 1 { "s" } else { "" };
        parts.push(format!("{} {}{}", count, noun, plural));
    }
}

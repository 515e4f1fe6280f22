use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a venue in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(pub u64);

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a person whose preferences are tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cuisine tag, e.g. "Italian". Compared exactly after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Cuisine(String);

impl Cuisine {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cuisine {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Cuisine {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Cuisine> for String {
    fn from(value: Cuisine) -> Self {
        value.0
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A venue in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    /// Ordered cuisine tags, never empty once the venue is in a catalog
    pub cuisines: Vec<Cuisine>,
    /// Price tier from 1 ($) to 4 ($$$$)
    pub price: u8,
}

impl Venue {
    pub fn new(id: u64, name: impl Into<String>, cuisines: &[&str], price: u8) -> Self {
        Self {
            id: VenueId(id),
            name: name.into(),
            cuisines: cuisines.iter().map(|c| Cuisine::new(c)).collect(),
            price,
        }
    }
}

/// A person's durable ratings for venues and cuisines (1.0 - 10.0)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingPreferences {
    #[serde(rename = "venueRatings", default)]
    pub venue_ratings: HashMap<VenueId, f64>,
    #[serde(rename = "cuisineRatings", default)]
    pub cuisine_ratings: HashMap<Cuisine, f64>,
}

impl StandingPreferences {
    pub fn venue_rating(&self, venue: VenueId) -> Option<f64> {
        self.venue_ratings.get(&venue).copied()
    }

    pub fn cuisine_rating(&self, cuisine: &Cuisine) -> Option<f64> {
        self.cuisine_ratings.get(cuisine).copied()
    }
}

/// What a same-day override applies to: exactly one venue or exactly one cuisine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfTarget {
    Venue(VenueId),
    Cuisine(Cuisine),
}

/// A same-day override rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOfRating {
    pub target: DayOfTarget,
    pub rating: f64,
}

impl DayOfRating {
    pub fn venue(id: u64, rating: f64) -> Self {
        Self {
            target: DayOfTarget::Venue(VenueId(id)),
            rating,
        }
    }

    pub fn cuisine(name: &str, rating: f64) -> Self {
        Self {
            target: DayOfTarget::Cuisine(Cuisine::new(name)),
            rating,
        }
    }
}

/// Per-person utilities, positionally aligned with the catalog of a matching run
pub type UtilityVector = Vec<f64>;

/// One entry of a ranked group match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVenue {
    #[serde(rename = "venueId")]
    pub venue_id: VenueId,
    pub name: String,
    pub score: f64,
}

/// Round a rating to one decimal place
#[inline]
pub fn round_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuisine_is_trimmed() {
        assert_eq!(Cuisine::new("  Thai "), Cuisine::new("Thai"));
        assert_eq!(Cuisine::new("Thai").as_str(), "Thai");
    }

    #[test]
    fn test_round_rating() {
        assert_eq!(round_rating(7.25), 7.3);
        assert_eq!(round_rating(7.24), 7.2);
        assert_eq!(round_rating(10.0), 10.0);
    }

    #[test]
    fn test_day_of_target_serialization() {
        let rating = DayOfRating::cuisine("Italian", 9.0);
        let json = serde_json::to_value(&rating).unwrap();
        assert_eq!(json["target"]["cuisine"], "Italian");

        let venue = DayOfRating::venue(3, 2.0);
        let json = serde_json::to_value(&venue).unwrap();
        assert_eq!(json["target"]["venue"], 3);
    }
}

use crate::core::WelfareScheme;
use crate::models::domain::{round_rating, Cuisine, DayOfRating, DayOfTarget, VenueId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Maximum number of same-day overrides a person may submit per run
pub const MAX_DAY_OF_RATINGS: usize = 3;

/// Errors raised while turning boundary requests into domain values
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid day-of override: {0}")]
    InvalidOverride(String),
}

/// Request to rank venues for a group
///
/// ```json
/// {
///   "participants": [{ "userId": 1, "dayOf": [{ "cuisine": "Italian", "rating": 9.0 }] }],
///   "scheme": "nash",
///   "maxPrice": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1), nested)]
    pub participants: Vec<ParticipantRequest>,
    /// Overrides the configured welfare scheme for this request
    #[serde(default)]
    pub scheme: Option<WelfareScheme>,
    #[serde(alias = "max_price", rename = "maxPrice", default)]
    #[validate(range(min = 1, max = 4))]
    pub max_price: Option<u8>,
    /// Restrict the run to venues whose cuisine contains this text
    #[serde(default)]
    #[validate(length(min = 1, max = 50))]
    pub cuisine: Option<String>,
}

/// One attendee in a match request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_unique_targets"))]
pub struct ParticipantRequest {
    #[serde(alias = "user_id", rename = "userId", default)]
    pub user_id: Option<u64>,
    // Must match MAX_DAY_OF_RATINGS
    #[serde(alias = "day_of", rename = "dayOf", default)]
    #[validate(length(max = 3), nested)]
    pub day_of: Vec<DayOfRatingRequest>,
}

impl ParticipantRequest {
    /// Convert validated overrides into domain ratings
    pub fn overrides(&self) -> Result<Vec<DayOfRating>, RequestError> {
        self.day_of.iter().map(DayOfRating::try_from).collect()
    }
}

/// A same-day override as submitted: exactly one of venue or cuisine
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_single_target"))]
pub struct DayOfRatingRequest {
    #[serde(alias = "restaurant_id", rename = "restaurantId", default)]
    pub restaurant_id: Option<u64>,
    #[serde(default)]
    #[validate(length(min = 1, max = 50))]
    pub cuisine: Option<String>,
    #[validate(range(min = 1.0, max = 10.0))]
    pub rating: f64,
}

impl TryFrom<&DayOfRatingRequest> for DayOfRating {
    type Error = RequestError;

    fn try_from(req: &DayOfRatingRequest) -> Result<Self, Self::Error> {
        let target = match (req.restaurant_id, req.cuisine.as_deref()) {
            (Some(id), None) => DayOfTarget::Venue(VenueId(id)),
            (None, Some(cuisine)) => DayOfTarget::Cuisine(Cuisine::new(cuisine)),
            (Some(_), Some(_)) => {
                return Err(RequestError::InvalidOverride(
                    "both restaurantId and cuisine are set".to_string(),
                ))
            }
            (None, None) => {
                return Err(RequestError::InvalidOverride(
                    "one of restaurantId or cuisine is required".to_string(),
                ))
            }
        };

        Ok(DayOfRating {
            target,
            rating: round_rating(req.rating),
        })
    }
}

/// A person's stored preferences as supplied to the preference store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonRecord {
    pub id: u64,
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[serde(alias = "venue_ratings", rename = "venueRatings", default)]
    #[validate(nested)]
    pub venue_ratings: Vec<VenuePreference>,
    #[serde(alias = "cuisine_ratings", rename = "cuisineRatings", default)]
    #[validate(nested)]
    pub cuisine_ratings: Vec<CuisinePreference>,
}

/// Standing rating for one venue
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VenuePreference {
    #[serde(alias = "restaurant_id", rename = "restaurantId")]
    pub restaurant_id: u64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub rating: f64,
}

/// Standing rating for one cuisine
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CuisinePreference {
    #[validate(length(min = 1, max = 50))]
    pub cuisine: String,
    #[validate(range(min = 1.0, max = 10.0))]
    pub rating: f64,
}

fn validate_single_target(req: &DayOfRatingRequest) -> Result<(), ValidationError> {
    if req.restaurant_id.is_some() == req.cuisine.is_some() {
        let mut err = ValidationError::new("exclusive_target");
        err.message = Some("exactly one of restaurantId or cuisine must be set".into());
        return Err(err);
    }
    Ok(())
}

fn validate_unique_targets(req: &ParticipantRequest) -> Result<(), ValidationError> {
    let mut venues = HashSet::new();
    let mut cuisines = HashSet::new();

    for rating in &req.day_of {
        let fresh = match (rating.restaurant_id, rating.cuisine.as_deref()) {
            (Some(id), _) => venues.insert(id),
            (None, Some(cuisine)) => cuisines.insert(Cuisine::new(cuisine)),
            (None, None) => true,
        };
        if !fresh {
            let mut err = ValidationError::new("duplicate_target");
            err.message = Some("each venue or cuisine may be overridden once".into());
            return Err(err);
        }
    }
    Ok(())
}

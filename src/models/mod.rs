// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    round_rating, Cuisine, DayOfRating, DayOfTarget, PersonId, ScoredVenue, StandingPreferences,
    UtilityVector, Venue, VenueId,
};
pub use requests::{
    CuisinePreference, DayOfRatingRequest, MatchRequest, ParticipantRequest, PersonRecord,
    RequestError, VenuePreference,
};
pub use responses::{ErrorResponse, MatchResponse};

//! Venue Match - group venue recommendation engine
//!
//! This library turns each participant's standing ratings and same-day
//! overrides into a utility per venue, then combines the group's utilities
//! under a selectable welfare scheme (egalitarian, utilitarian or Nash) into
//! one ranked list of venues.

pub mod config;
pub mod core;
pub mod handlers;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    aggregate, Catalog, GroupMatcher, MatchResult, Participant, ResolverParams, UtilityResolver,
    WelfareScheme,
};
pub use models::{DayOfRating, MatchRequest, MatchResponse, PersonId, StandingPreferences, Venue, VenueId};

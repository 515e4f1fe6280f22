use crate::core::catalog::Catalog;
use crate::core::transforms::{
    clamp_rating, logistic_modifier, CUISINE_OVERRIDE_STEEPNESS, DEFAULT_UTILITY_SCALE,
    MAX_RATING, NEUTRAL_RATING, VENUE_OVERRIDE_STEEPNESS,
};
use crate::models::{Cuisine, DayOfRating, DayOfTarget, StandingPreferences, UtilityVector, Venue, VenueId};

/// Tunable parameters of utility resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverParams {
    /// Global multiplier applied to every venue for every person
    pub scale: f64,
    pub venue_steepness: f64,
    pub cuisine_steepness: f64,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_UTILITY_SCALE,
            venue_steepness: VENUE_OVERRIDE_STEEPNESS,
            cuisine_steepness: CUISINE_OVERRIDE_STEEPNESS,
        }
    }
}

impl ResolverParams {
    /// Utility assigned to every venue for a participant with no preference data
    #[inline]
    pub fn neutral_utility(&self) -> f64 {
        MAX_RATING * self.scale
    }
}

/// Computes one person's utility for every venue in a catalog
///
/// Per venue:
/// 1. Base value: the direct standing rating, else the best standing rating
///    across the venue's cuisines (unrated cuisines count as neutral)
/// 2. Day-of venue override: steep logistic multiplier
/// 3. Day-of cuisine overrides: gentler logistic multiplier per matching tag,
///    compounded
/// 4. Global scale
#[derive(Debug, Clone, Copy)]
pub struct UtilityResolver<'a> {
    catalog: &'a Catalog,
    params: ResolverParams,
}

impl<'a> UtilityResolver<'a> {
    pub fn new(catalog: &'a Catalog, params: ResolverParams) -> Self {
        Self { catalog, params }
    }

    pub fn params(&self) -> &ResolverParams {
        &self.params
    }

    /// Resolve a utility vector aligned with the catalog
    ///
    /// `standing` is `None` for an absent or unknown person; every venue then
    /// receives the same neutral utility and `day_of` is ignored. `day_of` is
    /// expected to be already validated (at most three entries, one per target).
    pub fn resolve(
        &self,
        standing: Option<&StandingPreferences>,
        day_of: &[DayOfRating],
    ) -> UtilityVector {
        let Some(standing) = standing else {
            return vec![self.params.neutral_utility(); self.catalog.len()];
        };

        self.catalog
            .venues()
            .iter()
            .map(|venue| self.venue_utility(venue, standing, day_of))
            .collect()
    }

    fn venue_utility(
        &self,
        venue: &Venue,
        standing: &StandingPreferences,
        day_of: &[DayOfRating],
    ) -> f64 {
        let mut utility = base_value(venue, standing);

        if let Some(rating) = venue_override(day_of, venue.id) {
            utility *= logistic_modifier(rating, self.params.venue_steepness);
        }

        for cuisine in &venue.cuisines {
            if let Some(rating) = cuisine_override(day_of, cuisine) {
                utility *= logistic_modifier(rating, self.params.cuisine_steepness);
            }
        }

        utility * self.params.scale
    }
}

/// Standing value of a venue before any day-of adjustment
///
/// Falls back to the maximum over the venue's cuisine tags, each defaulting
/// to [`NEUTRAL_RATING`] when unrated.
#[inline]
pub fn base_value(venue: &Venue, standing: &StandingPreferences) -> f64 {
    if let Some(rating) = standing.venue_rating(venue.id) {
        return clamp_rating(rating);
    }

    venue
        .cuisines
        .iter()
        .map(|cuisine| {
            standing
                .cuisine_rating(cuisine)
                .map_or(NEUTRAL_RATING, clamp_rating)
        })
        .reduce(f64::max)
        .unwrap_or(NEUTRAL_RATING)
}

#[inline]
fn venue_override(day_of: &[DayOfRating], id: VenueId) -> Option<f64> {
    day_of.iter().find_map(|d| match &d.target {
        DayOfTarget::Venue(target) if *target == id => Some(d.rating),
        _ => None,
    })
}

#[inline]
fn cuisine_override(day_of: &[DayOfRating], cuisine: &Cuisine) -> Option<f64> {
    day_of.iter().find_map(|d| match &d.target {
        DayOfTarget::Cuisine(target) if target == cuisine => Some(d.rating),
        _ => None,
    })
}

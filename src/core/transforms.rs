//! Numeric transforms shared by utility resolution.
//!
//! Day-of overrides scale a venue's base value by a logistic curve centred on
//! [`OVERRIDE_CENTER`]. The curve is `2 / (1 + e^(-k * (r - 5.5)))`, which is
//! exactly 1.0 at the centre, approaches 0 as the rating drops to 1.0 and
//! approaches 2 as it rises to 10.0. Venue overrides use a steeper `k` than
//! cuisine overrides.

/// Lowest rating accepted anywhere in the system
pub const MIN_RATING: f64 = 1.0;

/// Highest rating accepted anywhere in the system
pub const MAX_RATING: f64 = 10.0;

/// Fallback rating for a cuisine (or venue) with no recorded preference
pub const NEUTRAL_RATING: f64 = 5.0;

/// Override rating at which a day-of override leaves utility unchanged
pub const OVERRIDE_CENTER: f64 = 5.5;

/// Logistic slope for venue-specific day-of overrides
pub const VENUE_OVERRIDE_STEEPNESS: f64 = 1.0;

/// Logistic slope for cuisine-specific day-of overrides
pub const CUISINE_OVERRIDE_STEEPNESS: f64 = 0.5;

/// Global multiplier applied to every resolved utility
pub const DEFAULT_UTILITY_SCALE: f64 = 0.1;

/// Largest slope accepted from configuration; keeps the curve from
/// underflowing to zero inside the rating domain.
pub const MAX_STEEPNESS: f64 = 50.0;

/// Logistic multiplier for an override rating, in the open interval (0, 2)
#[inline]
pub fn logistic_modifier(rating: f64, steepness: f64) -> f64 {
    2.0 / (1.0 + (-steepness * (rating - OVERRIDE_CENTER)).exp())
}

/// Multiplier for a venue-specific override with the default slope
#[inline]
pub fn venue_override_modifier(rating: f64) -> f64 {
    logistic_modifier(rating, VENUE_OVERRIDE_STEEPNESS)
}

/// Multiplier for a cuisine-specific override with the default slope
#[inline]
pub fn cuisine_override_modifier(rating: f64) -> f64 {
    logistic_modifier(rating, CUISINE_OVERRIDE_STEEPNESS)
}

/// Clamp a stored rating into the rating domain
#[inline]
pub fn clamp_rating(rating: f64) -> f64 {
    rating.clamp(MIN_RATING, MAX_RATING)
}

use crate::core::Catalog;
use crate::models::{DayOfRating, PersonId, StandingPreferences};
use crate::services::StoreError;
use std::collections::HashMap;

/// Supplies the fixed, ordered venue catalog for a matching run
pub trait VenueCatalogProvider {
    fn catalog(&self) -> &Catalog;
}

/// Read-only access to people's standing ratings
pub trait PreferenceStore {
    /// `None` when the person is unknown
    fn standing(&self, person: PersonId) -> Option<&StandingPreferences>;
}

/// Intake of same-day overrides
///
/// Submitting replaces the person's previous override set as a whole.
pub trait DayOfIntake {
    fn submit_day_of(&mut self, person: PersonId, ratings: Vec<DayOfRating>) -> Result<(), StoreError>;

    fn day_of(&self, person: PersonId) -> &[DayOfRating];
}

impl PreferenceStore for HashMap<PersonId, StandingPreferences> {
    fn standing(&self, person: PersonId) -> Option<&StandingPreferences> {
        self.get(&person)
    }
}

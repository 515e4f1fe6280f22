use crate::core::transforms::{MAX_RATING, MIN_RATING};
use crate::core::Catalog;
use crate::models::{
    requests::MAX_DAY_OF_RATINGS, round_rating, Cuisine, DayOfRating, DayOfTarget, PersonId,
    PersonRecord, StandingPreferences, VenueId,
};
use crate::services::{DayOfIntake, PreferenceStore, VenueCatalogProvider};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that can occur with preference store operations
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Person not found: {0}")]
    UnknownPerson(PersonId),

    #[error("Venue not found: {0}")]
    UnknownVenue(VenueId),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Rating {0} is outside 1.0 - 10.0")]
    RatingOutOfRange(f64),

    #[error("At most {max} day-of ratings allowed, got {got}")]
    TooManyOverrides { max: usize, got: usize },

    #[error("Day-of target overridden more than once")]
    DuplicateTarget,
}

#[derive(Debug, Clone)]
struct PersonEntry {
    username: String,
    standing: StandingPreferences,
    day_of: Vec<DayOfRating>,
    day_of_submitted_at: Option<DateTime<Utc>>,
}

/// In-memory catalog, preference store and day-of intake
///
/// Standing ratings are rounded to one decimal place and kept one per
/// (person, venue) and (person, cuisine) pair.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    catalog: Catalog,
    people: HashMap<PersonId, PersonEntry>,
}

impl InMemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            people: HashMap::new(),
        }
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn contains_person(&self, person: PersonId) -> bool {
        self.people.contains_key(&person)
    }

    pub fn username(&self, person: PersonId) -> Option<&str> {
        self.people.get(&person).map(|p| p.username.as_str())
    }

    /// Register a person with no ratings
    pub fn register_person(
        &mut self,
        person: PersonId,
        username: impl Into<String>,
    ) -> Result<(), StoreError> {
        let username = username.into();
        if self
            .people
            .iter()
            .any(|(id, entry)| *id != person && entry.username == username)
        {
            return Err(StoreError::DuplicateUsername(username));
        }

        self.people
            .entry(person)
            .and_modify(|entry| entry.username.clone_from(&username))
            .or_insert_with(|| PersonEntry {
                username,
                standing: StandingPreferences::default(),
                day_of: Vec::new(),
                day_of_submitted_at: None,
            });
        Ok(())
    }

    /// Remove a person together with all their ratings
    pub fn remove_person(&mut self, person: PersonId) -> Result<(), StoreError> {
        self.people
            .remove(&person)
            .map(|_| ())
            .ok_or(StoreError::UnknownPerson(person))
    }

    /// Insert or replace a standing venue rating
    pub fn set_venue_rating(
        &mut self,
        person: PersonId,
        venue: VenueId,
        rating: f64,
    ) -> Result<(), StoreError> {
        if !self.catalog.contains(venue) {
            return Err(StoreError::UnknownVenue(venue));
        }
        let rating = checked_rating(rating)?;
        self.entry_mut(person)?
            .standing
            .venue_ratings
            .insert(venue, rating);
        Ok(())
    }

    /// Insert or replace a standing cuisine rating
    pub fn set_cuisine_rating(
        &mut self,
        person: PersonId,
        cuisine: Cuisine,
        rating: f64,
    ) -> Result<(), StoreError> {
        let rating = checked_rating(rating)?;
        self.entry_mut(person)?
            .standing
            .cuisine_ratings
            .insert(cuisine, rating);
        Ok(())
    }

    /// Register a person and load all of their standing ratings
    pub fn import_record(&mut self, record: &PersonRecord) -> Result<(), StoreError> {
        let person = PersonId(record.id);
        self.register_person(person, record.username.clone())?;

        for pref in &record.venue_ratings {
            self.set_venue_rating(person, VenueId(pref.restaurant_id), pref.rating)?;
        }
        for pref in &record.cuisine_ratings {
            self.set_cuisine_rating(person, Cuisine::new(&pref.cuisine), pref.rating)?;
        }

        tracing::debug!(
            "Imported person {} ({} venue ratings, {} cuisine ratings)",
            person,
            record.venue_ratings.len(),
            record.cuisine_ratings.len()
        );
        Ok(())
    }

    /// When the person's current day-of set was submitted
    pub fn day_of_submitted_at(&self, person: PersonId) -> Option<DateTime<Utc>> {
        self.people
            .get(&person)
            .and_then(|entry| entry.day_of_submitted_at)
    }

    fn entry_mut(&mut self, person: PersonId) -> Result<&mut PersonEntry, StoreError> {
        self.people
            .get_mut(&person)
            .ok_or(StoreError::UnknownPerson(person))
    }
}

impl VenueCatalogProvider for InMemoryStore {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl PreferenceStore for InMemoryStore {
    fn standing(&self, person: PersonId) -> Option<&StandingPreferences> {
        self.people.get(&person).map(|entry| &entry.standing)
    }
}

impl DayOfIntake for InMemoryStore {
    fn submit_day_of(
        &mut self,
        person: PersonId,
        ratings: Vec<DayOfRating>,
    ) -> Result<(), StoreError> {
        if ratings.len() > MAX_DAY_OF_RATINGS {
            return Err(StoreError::TooManyOverrides {
                max: MAX_DAY_OF_RATINGS,
                got: ratings.len(),
            });
        }

        let mut targets = HashSet::new();
        let mut checked = Vec::with_capacity(ratings.len());
        for rating in ratings {
            if let DayOfTarget::Venue(id) = rating.target {
                if !self.catalog.contains(id) {
                    return Err(StoreError::UnknownVenue(id));
                }
            }
            if !targets.insert(rating.target.clone()) {
                return Err(StoreError::DuplicateTarget);
            }
            checked.push(DayOfRating {
                rating: checked_rating(rating.rating)?,
                target: rating.target,
            });
        }

        let entry = self.entry_mut(person)?;
        entry.day_of = checked;
        entry.day_of_submitted_at = Some(Utc::now());
        Ok(())
    }

    fn day_of(&self, person: PersonId) -> &[DayOfRating] {
        self.people
            .get(&person)
            .map(|entry| entry.day_of.as_slice())
            .unwrap_or(&[])
    }
}

fn checked_rating(rating: f64) -> Result<f64, StoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(StoreError::RatingOutOfRange(rating));
    }
    Ok(round_rating(rating))
}

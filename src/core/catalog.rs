use crate::models::{Cuisine, Venue, VenueId};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors raised while building a catalog
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog contains no venues")]
    Empty,

    #[error("Duplicate venue id: {0}")]
    DuplicateVenue(VenueId),

    #[error("Venue {0} has no cuisine tags")]
    MissingCuisine(VenueId),
}

/// Fixed-order venue catalog shared by every computation in a matching run
///
/// Index `i` refers to the same venue in every utility vector built against
/// this catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    venues: Vec<Venue>,
    index: HashMap<VenueId, usize>,
}

impl Catalog {
    /// Build a catalog, preserving the given order
    ///
    /// Repeated cuisine tags on a single venue are collapsed to their first
    /// occurrence so each tag contributes at most once.
    pub fn new(venues: Vec<Venue>) -> Result<Self, CatalogError> {
        if venues.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(venues.len());
        let mut normalized = Vec::with_capacity(venues.len());

        for (position, mut venue) in venues.into_iter().enumerate() {
            let mut seen = HashSet::new();
            venue.cuisines.retain(|c| !c.as_str().is_empty() && seen.insert(c.clone()));

            if venue.cuisines.is_empty() {
                return Err(CatalogError::MissingCuisine(venue.id));
            }
            if index.insert(venue.id, position).is_some() {
                return Err(CatalogError::DuplicateVenue(venue.id));
            }
            normalized.push(venue);
        }

        Ok(Self {
            venues: normalized,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn get(&self, index: usize) -> Option<&Venue> {
        self.venues.get(index)
    }

    /// Position of a venue in this catalog
    pub fn index_of(&self, id: VenueId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: VenueId) -> bool {
        self.index.contains_key(&id)
    }

    /// Sub-catalog of venues matching a cuisine and price cap, order preserved
    ///
    /// The cuisine filter is a case-insensitive substring match against any
    /// of the venue's tags.
    pub fn filtered(
        &self,
        cuisine: Option<&str>,
        max_price: Option<u8>,
    ) -> Result<Self, CatalogError> {
        let needle = cuisine.map(|c| c.trim().to_lowercase());

        let venues = self
            .venues
            .iter()
            .filter(|venue| max_price.map_or(true, |cap| venue.price <= cap))
            .filter(|venue| match &needle {
                Some(needle) => venue.cuisines.iter().any(|c| matches_cuisine(c, needle)),
                None => true,
            })
            .cloned()
            .collect();

        Self::new(venues)
    }
}

#[inline]
fn matches_cuisine(cuisine: &Cuisine, needle: &str) -> bool {
    cuisine.as_str().to_lowercase().contains(needle)
}

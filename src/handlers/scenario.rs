use crate::core::{Catalog, GroupMatcher};
use crate::handlers::{AppState, HandlerError};
use crate::models::{MatchRequest, PersonRecord, RequestError, Venue};
use crate::services::{seed_catalog, InMemoryStore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// A self-contained matching scenario: catalog, people and one request
///
/// ```json
/// {
///   "catalog": [{ "id": 1, "name": "Pizza Napoli", "cuisines": ["Italian"], "price": 2 }],
///   "people": [{ "id": 1, "username": "alice", "venueRatings": [{ "restaurantId": 1, "rating": 8.0 }] }],
///   "request": { "participants": [{ "userId": 1 }], "scheme": "nash" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Falls back to the seed catalog when absent
    #[serde(default)]
    pub catalog: Option<Vec<Venue>>,
    #[serde(default)]
    pub people: Vec<PersonRecord>,
    pub request: MatchRequest,
}

impl Scenario {
    /// Populate a store from this scenario and pair it with `matcher`
    pub fn into_state(self, matcher: GroupMatcher) -> Result<(AppState, MatchRequest), HandlerError> {
        let catalog = match self.catalog {
            Some(venues) => Catalog::new(venues)?,
            None => seed_catalog()?,
        };

        let mut store = InMemoryStore::new(catalog);
        for record in &self.people {
            record.validate().map_err(RequestError::from)?;
            store.import_record(record)?;
        }

        tracing::info!(
            "Loaded scenario with {} venues and {} people",
            store.catalog_len(),
            store.person_count()
        );

        Ok((AppState::new(store, matcher), self.request))
    }
}

/// Read a scenario from a JSON file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, HandlerError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&contents)?)
}

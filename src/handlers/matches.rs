use crate::core::{check_override_venues, CatalogError, GroupMatcher, MatchError, Participant};
use crate::models::{ErrorResponse, MatchRequest, MatchResponse, PersonId, RequestError};
use crate::services::{DayOfIntake, InMemoryStore, StoreError, VenueCatalogProvider};
use std::borrow::Cow;
use thiserror::Error;
use validator::Validate;

/// Errors surfaced while serving a match request
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Matching failed: {0}")]
    Match(#[from] MatchError),

    #[error("Failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl HandlerError {
    /// Short machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerError::Request(_) => "invalid_request",
            HandlerError::Catalog(_) => "empty_selection",
            HandlerError::Store(_) => "store_error",
            HandlerError::Match(_) => "matching_failed",
            HandlerError::Io(_) => "io_error",
            HandlerError::Json(_) => "invalid_json",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

/// State shared by match handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: InMemoryStore,
    pub matcher: GroupMatcher,
}

impl AppState {
    pub fn new(store: InMemoryStore, matcher: GroupMatcher) -> Self {
        Self { store, matcher }
    }
}

/// Rank venues for a group
///
/// Known participants have their day-of overrides submitted to the intake,
/// replacing any previous set. Unknown participants resolve to neutral
/// utilities. `maxPrice` and `cuisine` narrow the catalog before resolution.
///
/// Every check runs before the first submission, so a rejected request
/// leaves the store untouched.
pub fn find_group_matches(
    state: &mut AppState,
    req: &MatchRequest,
) -> Result<MatchResponse, HandlerError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return Err(RequestError::from(errors).into());
    }

    let participants = req
        .participants
        .iter()
        .map(|p| Ok(Participant::new(p.user_id.map(PersonId), p.overrides()?)))
        .collect::<Result<Vec<_>, RequestError>>()?;

    let full_catalog = state.store.catalog();
    check_override_venues(full_catalog, &participants)?;

    let narrowed = if req.max_price.is_some() || req.cuisine.is_some() {
        Some(full_catalog.filtered(req.cuisine.as_deref(), req.max_price)?)
    } else {
        None
    };

    for participant in &participants {
        let Some(id) = participant.person_id else {
            continue;
        };
        if !state.store.contains_person(id) {
            continue;
        }
        state.store.submit_day_of(id, participant.day_of.clone())?;
        tracing::debug!(
            "Recorded {} day-of overrides for {}",
            participant.day_of.len(),
            state.store.username(id).unwrap_or("unnamed")
        );
    }

    let catalog = match narrowed {
        Some(catalog) => Cow::Owned(catalog),
        None => Cow::Borrowed(state.store.catalog()),
    };

    tracing::info!(
        "Matching {} participants over {} venues",
        participants.len(),
        catalog.len()
    );

    let result = state
        .matcher
        .find_matches(&catalog, &state.store, &participants, req.scheme)?;

    Ok(result.into())
}

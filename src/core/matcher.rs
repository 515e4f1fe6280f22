use crate::core::{
    aggregator::{aggregate, AggregateError, WelfareScheme},
    catalog::Catalog,
    resolver::{ResolverParams, UtilityResolver},
};
use crate::models::{DayOfRating, DayOfTarget, PersonId, ScoredVenue, UtilityVector, VenueId};
use crate::services::PreferenceStore;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a matching run
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("Day-of override references unknown venue: {0}")]
    UnknownVenue(VenueId),
}

/// One attendee of a matching run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Participant {
    /// `None` when the attendee has no preference record
    pub person_id: Option<PersonId>,
    /// Already validated same-day overrides (at most three)
    pub day_of: Vec<DayOfRating>,
}

impl Participant {
    pub fn new(person_id: Option<PersonId>, day_of: Vec<DayOfRating>) -> Self {
        Self { person_id, day_of }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Result of a matching run
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matches: Vec<ScoredVenue>,
    pub scheme: WelfareScheme,
    pub participants: usize,
    /// Participants resolved with the neutral vector
    pub unknown_participants: usize,
}

/// Group matching orchestrator
///
/// # Pipeline Stages
/// 1. Utility resolution per participant (independent, no shared state)
/// 2. Welfare aggregation across all vectors
/// 3. Ranking with catalog-order tie-breaks
#[derive(Debug, Clone)]
pub struct GroupMatcher {
    params: ResolverParams,
    default_scheme: WelfareScheme,
}

impl GroupMatcher {
    pub fn new(params: ResolverParams, default_scheme: WelfareScheme) -> Self {
        Self {
            params,
            default_scheme,
        }
    }

    pub fn params(&self) -> &ResolverParams {
        &self.params
    }

    pub fn default_scheme(&self) -> WelfareScheme {
        self.default_scheme
    }

    /// Resolve every participant's utility vector against `catalog`
    ///
    /// Returns the vectors together with the number of unknown participants.
    pub fn resolve_all<S: PreferenceStore + ?Sized>(
        &self,
        catalog: &Catalog,
        store: &S,
        participants: &[Participant],
    ) -> (Vec<UtilityVector>, usize) {
        let resolver = UtilityResolver::new(catalog, self.params);
        let mut unknown = 0;

        let vectors = participants
            .iter()
            .map(|participant| {
                let standing = participant.person_id.and_then(|id| store.standing(id));
                if standing.is_none() {
                    unknown += 1;
                    if let Some(id) = participant.person_id {
                        warn!("No preference record for person {}, using neutral utilities", id);
                    }
                }

                let vector = resolver.resolve(standing, &participant.day_of);
                debug!(
                    "Resolved {} utilities for person {:?} ({} day-of overrides)",
                    vector.len(),
                    participant.person_id,
                    participant.day_of.len()
                );
                vector
            })
            .collect();

        (vectors, unknown)
    }

    /// Rank `catalog` for a group of participants
    ///
    /// `scheme` overrides the matcher's configured default for this run only.
    pub fn find_matches<S: PreferenceStore + ?Sized>(
        &self,
        catalog: &Catalog,
        store: &S,
        participants: &[Participant],
        scheme: Option<WelfareScheme>,
    ) -> Result<MatchResult, MatchError> {
        let scheme = scheme.unwrap_or(self.default_scheme);

        if participants.is_empty() {
            return Err(AggregateError::NoParticipants.into());
        }

        // Stage 1: Per-person utility vectors
        let (vectors, unknown_participants) = self.resolve_all(catalog, store, participants);

        // Stage 2 & 3: Aggregate and rank
        let ranked = aggregate(&vectors, scheme)?;

        let matches = ranked
            .into_iter()
            .filter_map(|entry| {
                catalog.get(entry.index).map(|venue| ScoredVenue {
                    venue_id: venue.id,
                    name: venue.name.clone(),
                    score: entry.score,
                })
            })
            .collect();

        info!(
            "Ranked {} venues for {} participants ({} unknown) using {} welfare",
            catalog.len(),
            participants.len(),
            unknown_participants,
            scheme
        );

        Ok(MatchResult {
            matches,
            scheme,
            participants: participants.len(),
            unknown_participants,
        })
    }
}

impl Default for GroupMatcher {
    fn default() -> Self {
        Self::new(ResolverParams::default(), WelfareScheme::Nash)
    }
}

/// Check that every venue-targeted override names a venue in `catalog`
pub fn check_override_venues(
    catalog: &Catalog,
    participants: &[Participant],
) -> Result<(), MatchError> {
    participants
        .iter()
        .flat_map(|p| p.day_of.iter())
        .try_for_each(|rating| match rating.target {
            DayOfTarget::Venue(id) if !catalog.contains(id) => Err(MatchError::UnknownVenue(id)),
            _ => Ok(()),
        })
}

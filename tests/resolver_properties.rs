// Property tests for utility resolution and aggregation

use proptest::prelude::*;
use venue_match::core::transforms::{cuisine_override_modifier, venue_override_modifier};
use venue_match::core::{aggregate, Catalog, ResolverParams, UtilityResolver, WelfareScheme};
use venue_match::models::{Cuisine, DayOfRating, StandingPreferences, Venue, VenueId};

const CUISINES: &[&str] = &["Italian", "Mexican", "Thai", "Indian", "French"];

fn rating() -> impl Strategy<Value = f64> {
    (10u32..=100).prop_map(|tenths| f64::from(tenths) / 10.0)
}

fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        (prop::sample::subsequence(CUISINES, 1..=3), 1u8..=4),
        1..12,
    )
    .prop_map(|venues| {
        let venues = venues
            .into_iter()
            .zip(1u64..)
            .map(|((cuisines, price), id)| Venue::new(id, format!("Venue {}", id), &cuisines, price))
            .collect();
        Catalog::new(venues).unwrap()
    })
}

fn standing() -> impl Strategy<Value = StandingPreferences> {
    (
        prop::collection::hash_map((1u64..12).prop_map(VenueId), rating(), 0..6),
        prop::collection::hash_map(prop::sample::select(CUISINES).prop_map(Cuisine::new), rating(), 0..4),
    )
        .prop_map(|(venue_ratings, cuisine_ratings)| StandingPreferences {
            venue_ratings,
            cuisine_ratings,
        })
}

fn day_of() -> impl Strategy<Value = Vec<DayOfRating>> {
    (
        prop::sample::subsequence((1u64..12).collect::<Vec<_>>(), 0..=2),
        prop::sample::subsequence(CUISINES, 0..=1),
        prop::collection::vec(rating(), 3),
    )
        .prop_map(|(venues, cuisines, ratings)| {
            let targets = venues
                .into_iter()
                .map(|id| DayOfRating::venue(id, 0.0))
                .chain(cuisines.into_iter().map(|c| DayOfRating::cuisine(c, 0.0)));
            targets
                .zip(ratings)
                .map(|(mut d, r)| {
                    d.rating = r;
                    d
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn resolved_utilities_are_strictly_positive(
        catalog in catalog(),
        standing in standing(),
        day_of in day_of(),
    ) {
        let resolver = UtilityResolver::new(&catalog, ResolverParams::default());
        let utilities = resolver.resolve(Some(&standing), &day_of);

        prop_assert_eq!(utilities.len(), catalog.len());
        for u in &utilities {
            prop_assert!(*u > 0.0 && u.is_finite());
        }
    }

    #[test]
    fn resolution_is_deterministic(
        catalog in catalog(),
        standing in standing(),
        day_of in day_of(),
    ) {
        let resolver = UtilityResolver::new(&catalog, ResolverParams::default());
        prop_assert_eq!(
            resolver.resolve(Some(&standing), &day_of),
            resolver.resolve(Some(&standing), &day_of)
        );
    }

    #[test]
    fn override_transforms_increase(a in rating(), b in rating()) {
        prop_assume!(a < b);
        prop_assert!(venue_override_modifier(a) < venue_override_modifier(b));
        prop_assert!(cuisine_override_modifier(a) < cuisine_override_modifier(b));
        prop_assert!(venue_override_modifier(a) > 0.0);
        prop_assert!(cuisine_override_modifier(a) > 0.0);
    }

    #[test]
    fn nash_welfare_never_zero_end_to_end(
        catalog in catalog(),
        people in prop::collection::vec((standing(), day_of()), 1..6),
    ) {
        let resolver = UtilityResolver::new(&catalog, ResolverParams::default());
        let vectors: Vec<_> = people
            .iter()
            .map(|(standing, day_of)| resolver.resolve(Some(standing), day_of))
            .collect();

        let ranked = aggregate(&vectors, WelfareScheme::Nash).unwrap();
        prop_assert_eq!(ranked.len(), catalog.len());
        for entry in &ranked {
            prop_assert!(entry.score > 0.0);
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }
}
